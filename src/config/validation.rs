//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (redirects target existing routes)
//! - Detect duplicate paths and names
//! - Validate value ranges (timeouts > 0, bind address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the config
//! - Runs before a route table is built; a table never exists in an invalid state

use std::collections::HashSet;
use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{RedirectConfig, RouteConfig, RouterConfig};
use crate::routing::matcher::PathMatcher;

/// A single semantic problem in the route configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("path `{path}` must start with `/` and contain no query, fragment or whitespace")]
    InvalidPath { path: String },

    #[error("route `{path}` has an empty name")]
    EmptyName { path: String },

    #[error("duplicate path `{path}`")]
    DuplicatePath { path: String },

    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    #[error("redirect from `{from}` targets `{to}`, which is not a route path")]
    RedirectTargetMissing { from: String, to: String },

    #[error("invalid bind address `{address}`")]
    InvalidBindAddress { address: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Every problem found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn is_valid_path(path: &str) -> bool {
    path.starts_with('/') && !path.contains(['?', '#']) && !path.chars().any(char::is_whitespace)
}

/// Check the route invariants: valid unique paths, unique names, and
/// redirect targets that land on a route.
pub fn validate_routes(
    routes: &[RouteConfig],
    redirects: &[RedirectConfig],
    matcher: &PathMatcher,
) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in routes {
        if !is_valid_path(&route.path) {
            errors.push(ValidationError::InvalidPath { path: route.path.clone() });
        } else if !paths.insert(matcher.normalize(&route.path)) {
            errors.push(ValidationError::DuplicatePath { path: route.path.clone() });
        }

        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { path: route.path.clone() });
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName { name: route.name.clone() });
        }
    }

    let route_paths: HashSet<String> = routes
        .iter()
        .filter(|r| is_valid_path(&r.path))
        .map(|r| matcher.normalize(&r.path))
        .collect();

    for redirect in redirects {
        if !is_valid_path(&redirect.from) {
            errors.push(ValidationError::InvalidPath { path: redirect.from.clone() });
        } else if !paths.insert(matcher.normalize(&redirect.from)) {
            errors.push(ValidationError::DuplicatePath { path: redirect.from.clone() });
        }

        if !is_valid_path(&redirect.to) {
            errors.push(ValidationError::InvalidPath { path: redirect.to.clone() });
        } else if !route_paths.contains(&matcher.normalize(&redirect.to)) {
            errors.push(ValidationError::RedirectTargetMissing {
                from: redirect.from.clone(),
                to: redirect.to.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate a whole configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), ValidationErrors> {
    let matcher = PathMatcher::new(config.matching);
    let mut errors = match validate_routes(&config.routes, &config.redirects, &matcher) {
        Ok(()) => Vec::new(),
        Err(ValidationErrors(errors)) => errors,
    };

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress {
            address: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::MatchOptions;
    use crate::routing::view::View;

    fn route(path: &str, view: View, name: &str) -> RouteConfig {
        RouteConfig::new(path, view, name)
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_path_and_name() {
        let routes = vec![
            route("/profile", View::Profile, "profile"),
            route("/profile", View::Product, "profile"),
        ];
        let err = validate_routes(&routes, &[], &PathMatcher::default()).unwrap_err();

        assert_eq!(
            err.errors(),
            &[
                ValidationError::DuplicatePath { path: "/profile".into() },
                ValidationError::DuplicateName { name: "profile".into() },
            ]
        );
    }

    #[test]
    fn test_redirect_source_clashes_with_route() {
        let routes = vec![route("/profile", View::Profile, "profile")];
        let redirects = vec![RedirectConfig::new("/profile/", "/profile")];
        let err = validate_routes(&routes, &redirects, &PathMatcher::default()).unwrap_err();

        assert_eq!(
            err.errors(),
            &[ValidationError::DuplicatePath { path: "/profile/".into() }]
        );

        // Under strict matching the trailing slash makes it a distinct path.
        let strict = PathMatcher::new(MatchOptions { strict: true, sensitive: false });
        assert!(validate_routes(&routes, &redirects, &strict).is_ok());
    }

    #[test]
    fn test_redirect_target_must_be_route() {
        let routes = vec![route("/profile", View::Profile, "profile")];
        let redirects = vec![
            RedirectConfig::new("/", "/missing"),
            RedirectConfig::new("/home", "/"),
        ];
        let err = validate_routes(&routes, &redirects, &PathMatcher::default()).unwrap_err();

        assert_eq!(
            err.errors(),
            &[
                ValidationError::RedirectTargetMissing { from: "/".into(), to: "/missing".into() },
                // Chained redirects are rejected; targets must be routes.
                ValidationError::RedirectTargetMissing { from: "/home".into(), to: "/".into() },
            ]
        );
    }

    #[test]
    fn test_redirect_target_must_be_plain_path() {
        let routes = vec![route("/profile", View::Profile, "profile")];
        let redirects = vec![RedirectConfig::new("/", "/profile?x=1#y")];
        let err = validate_routes(&routes, &redirects, &PathMatcher::default()).unwrap_err();

        assert_eq!(
            err.errors(),
            &[ValidationError::InvalidPath { path: "/profile?x=1#y".into() }]
        );
    }

    #[test]
    fn test_invalid_paths_and_names() {
        let routes = vec![
            route("profile", View::Profile, "profile"),
            route("/order?x=1", View::Order, "order"),
            route("/feedback", View::Feedback, "  "),
        ];
        let err = validate_routes(&routes, &[], &PathMatcher::default()).unwrap_err();

        assert_eq!(err.errors().len(), 3);
        assert!(matches!(err.errors()[0], ValidationError::InvalidPath { .. }));
        assert!(matches!(err.errors()[1], ValidationError::InvalidPath { .. }));
        assert!(matches!(err.errors()[2], ValidationError::EmptyName { .. }));
    }

    #[test]
    fn test_server_values() {
        let mut config = RouterConfig::default();
        config.server.bind_address = "not-an-address".into();
        config.server.request_timeout_secs = 0;

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                ValidationError::InvalidBindAddress { address: "not-an-address".into() },
                ValidationError::ZeroTimeout,
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid bind address `not-an-address`, request timeout must be greater than zero"
        );
    }
}
