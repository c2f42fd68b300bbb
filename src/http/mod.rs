//! HTTP resolution service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace, timeout)
//!     → handlers.rs
//!         /api/*      → route listing, resolve by path, lookup by name
//!         anything    → deep link: redirect, resolved route, or 404
//!     → response.rs (JSON bodies, status mapping)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
