//! Route table for the form application.
//!
//! Maps four URL paths to the profile, product, order and feedback form
//! views, with `/` redirecting to the profile view. The table is built and
//! validated once at startup, then injected into navigators and the HTTP
//! resolution service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Navigator, Resolution, RouteTable, View};
