//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouteTable::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table is never mutated at runtime
//! - All fields have defaults; the defaults are the application's own route table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, RedirectConfig, RouteConfig, RouterConfig, ServerConfig};
pub use validation::{ValidationError, ValidationErrors};
