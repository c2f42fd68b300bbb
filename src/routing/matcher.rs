//! Path normalization and matching.
//!
//! # Responsibilities
//! - Reduce a requested location to the key it is looked up by
//! - Apply the strict (trailing slash) and sensitive (case) options
//!
//! # Design Decisions
//! - Exact matching only: no parameters, no wildcards, no regex
//! - Query string and fragment never take part in matching
//! - Configured paths and requested paths go through the same normalization,
//!   so uniqueness checks and lookups agree

use serde::{Deserialize, Serialize};

/// Matching options shared by every route in a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// When set, `/order/` and `/order` are different paths.
    pub strict: bool,

    /// When set, `/Order` and `/order` are different paths.
    pub sensitive: bool,
}

/// Normalizes paths into lookup keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathMatcher {
    options: MatchOptions,
}

impl PathMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns the lookup key for `raw`.
    pub fn normalize(&self, raw: &str) -> String {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let mut path = &raw[..end];

        if !self.options.strict && path.len() > 1 {
            path = path.trim_end_matches('/');
            if path.is_empty() {
                path = "/";
            }
        }

        if self.options.sensitive {
            path.to_string()
        } else {
            path.to_lowercase()
        }
    }

    /// True if `requested` addresses the configured `path`.
    pub fn matches(&self, path: &str, requested: &str) -> bool {
        self.normalize(path) == self.normalize(requested)
    }
}
