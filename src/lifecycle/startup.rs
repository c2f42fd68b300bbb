//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or built-in defaults)
//! - Validate and build the route table
//! - Hand the table out for injection into whatever navigates
//! - Describe the table in the log once logging is up
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - The table is returned, never stored globally

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_config, ConfigError, RouterConfig};
use crate::config::validation::validate_config;
use crate::routing::RouteTable;

/// Load configuration and build the route table.
pub fn initialize(config_path: Option<&Path>) -> Result<(RouterConfig, Arc<RouteTable>), ConfigError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => {
            let config = RouterConfig::default();
            validate_config(&config)?;
            config
        }
    };

    let table = RouteTable::from_config(&config)?;
    Ok((config, Arc::new(table)))
}

/// Log the table once a subscriber is installed.
pub fn log_table(table: &RouteTable, config_path: Option<&Path>) {
    tracing::info!(
        routes = table.routes().len(),
        redirects = table.redirects().len(),
        history = ?table.history().mode,
        source = %config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".into()),
        "Route table initialized"
    );
    for route in table.routes() {
        tracing::debug!(path = %route.path, name = %route.name, view = %route.view, "Route");
    }
    for redirect in table.redirects() {
        tracing::debug!(from = %redirect.from, to = %redirect.to, "Redirect");
    }
}
