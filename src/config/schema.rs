//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! table and the service that exposes it. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::history::HistoryConfig;
use crate::routing::matcher::MatchOptions;
use crate::routing::view::View;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy and base path.
    pub history: HistoryConfig,

    /// Trailing slash and case handling for every route.
    pub matching: MatchOptions,

    /// Route definitions mapping paths to views.
    pub routes: Vec<RouteConfig>,

    /// Redirect rules, applied before route resolution.
    pub redirects: Vec<RedirectConfig>,

    /// Resolution service settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            matching: MatchOptions::default(),
            routes: View::ALL
                .into_iter()
                .map(|view| RouteConfig::new(format!("/{}", view), view, view.as_str()))
                .collect(),
            redirects: vec![RedirectConfig::new("/", "/profile")],
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A path mapped to a view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// URL path, with a leading slash.
    pub path: String,

    /// View rendered when the path matches.
    pub view: View,

    /// Unique name used for programmatic navigation.
    pub name: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, view: View, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view,
            name: name.into(),
        }
    }
}

/// A path that is replaced by another before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectConfig {
    pub from: String,
    pub to: String,
}

impl RedirectConfig {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Resolution service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "form_routes=info,tower_http=info".to_string(),
            log_format: LogFormat::Full,
        }
    }
}
