//! Observability subsystem.
//!
//! Every subsystem emits `tracing` events; `logging.rs` installs the
//! subscriber that formats and filters them.

pub mod logging;

pub use logging::init_logging;
