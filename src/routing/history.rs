//! History strategy selection.
//!
//! The table does not drive a browser; it only needs to know how the host
//! represents a route path in the address bar so it can hand out hrefs.

use serde::{Deserialize, Serialize};

/// How route paths appear in the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Browser-native URL history (`/base/order`).
    #[default]
    Web,
    /// Fragment history (`/base#/order`).
    Hash,
    /// No URL at all; paths are kept in memory only.
    Memory,
}

/// History mode plus the base the application is mounted under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Web,
            base: "/".to_string(),
        }
    }
}

impl HistoryConfig {
    pub fn web() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: HistoryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Base without its trailing slash; empty for the root.
    fn base_prefix(&self) -> String {
        let trimmed = self.base.trim_end_matches('/');
        if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }

    /// Route path addressed by a request path under the base, if any.
    ///
    /// The base itself, with or without its trailing slash, maps to `/`.
    pub fn strip_base(&self, request_path: &str) -> Option<String> {
        let prefix = self.base_prefix();
        if prefix.is_empty() {
            return Some(request_path.to_string());
        }

        let rest = request_path.strip_prefix(prefix.as_str())?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }

    /// The href the host puts in the address bar for a route path.
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Web => format!("{}{}", self.base_prefix(), path),
            HistoryMode::Hash => format!("{}/#{}", self.base_prefix(), path),
            HistoryMode::Memory => path.to_string(),
        }
    }
}
