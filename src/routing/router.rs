//! Route lookup and resolution.
//!
//! # Responsibilities
//! - Build the route table from literal entries or configuration
//! - Look up the entry for a requested path
//! - Follow redirects and resolve to a view
//! - Map route names back to paths for programmatic navigation
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc`, no locks)
//! - O(1) lookups by normalized path and by name
//! - Invariants are checked in `build()`; an invalid table is never returned
//! - Explicit `NotFound` rather than a silent default route

use std::collections::HashMap;

use serde::Serialize;

use crate::config::schema::{RedirectConfig, RouteConfig, RouterConfig};
use crate::config::validation::{validate_routes, ValidationErrors};
use crate::routing::history::HistoryConfig;
use crate::routing::matcher::{MatchOptions, PathMatcher};
use crate::routing::view::View;

/// A path that renders a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub view: View,
    pub name: String,
}

/// A path that is replaced by `to` before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// Raw lookup result, before any redirect is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Route(&'a Route),
    Redirect(&'a Redirect),
}

/// A navigation request that ended on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Location as it was requested.
    pub requested: String,
    /// Path of the matched route.
    pub path: String,
    pub name: String,
    pub view: View,
    /// Redirect source when a redirect was followed.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    fn new(requested: &str, route: &Route, redirected_from: Option<&Redirect>) -> Self {
        Self {
            requested: requested.to_string(),
            path: route.path.clone(),
            name: route.name.clone(),
            view: route.view,
            redirected_from: redirected_from.map(|r| r.from.clone()),
        }
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedRoute),
    NotFound { path: String },
}

impl Resolution {
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Resolved(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<ResolvedRoute> {
        match self {
            Resolution::Resolved(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Route(usize),
    Redirect(usize),
}

/// Collects route and redirect entries, then validates them into a table.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<RouteConfig>,
    redirects: Vec<RedirectConfig>,
    history: HistoryConfig,
    options: MatchOptions,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: impl Into<String>, view: View, name: impl Into<String>) -> Self {
        self.routes.push(RouteConfig::new(path, view, name));
        self
    }

    pub fn redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.redirects.push(RedirectConfig::new(from, to));
        self
    }

    pub fn history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the collected entries and freeze them into a table.
    pub fn build(self) -> Result<RouteTable, ValidationErrors> {
        let matcher = PathMatcher::new(self.options);
        validate_routes(&self.routes, &self.redirects, &matcher)?;

        let routes: Vec<Route> = self
            .routes
            .into_iter()
            .map(|r| Route {
                path: r.path,
                view: r.view,
                name: r.name,
            })
            .collect();
        let redirects: Vec<Redirect> = self
            .redirects
            .into_iter()
            .map(|r| Redirect { from: r.from, to: r.to })
            .collect();

        let mut by_path = HashMap::with_capacity(routes.len() + redirects.len());
        let mut by_name = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            by_path.insert(matcher.normalize(&route.path), Slot::Route(i));
            by_name.insert(route.name.clone(), i);
        }
        for (i, redirect) in redirects.iter().enumerate() {
            by_path.insert(matcher.normalize(&redirect.from), Slot::Redirect(i));
        }

        tracing::debug!(
            routes = routes.len(),
            redirects = redirects.len(),
            history = ?self.history.mode,
            "Route table built"
        );

        Ok(RouteTable {
            routes,
            redirects,
            by_path,
            by_name,
            matcher,
            history: self.history,
        })
    }
}

/// Immutable table of routes and redirects.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
    by_path: HashMap<String, Slot>,
    by_name: HashMap<String, usize>,
    matcher: PathMatcher,
    history: HistoryConfig,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Build the table described by a configuration.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ValidationErrors> {
        let builder = RouteTableBuilder {
            routes: config.routes.clone(),
            redirects: config.redirects.clone(),
            history: config.history.clone(),
            options: config.matching,
        };
        builder.build()
    }

    /// The application's four form routes plus the root redirect, under web history.
    pub fn default_table() -> Result<Self, ValidationErrors> {
        Self::from_config(&RouterConfig::default())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    pub fn history(&self) -> &HistoryConfig {
        &self.history
    }

    pub fn options(&self) -> MatchOptions {
        self.matcher.options()
    }

    /// Look up the entry for `path` without following redirects.
    pub fn match_path(&self, path: &str) -> Option<Entry<'_>> {
        match self.by_path.get(&self.matcher.normalize(path))? {
            Slot::Route(i) => Some(Entry::Route(&self.routes[*i])),
            Slot::Redirect(i) => Some(Entry::Redirect(&self.redirects[*i])),
        }
    }

    /// Resolve `path` to a route, following a redirect if one matches.
    pub fn resolve(&self, path: &str) -> Resolution {
        let resolution = match self.match_path(path) {
            Some(Entry::Route(route)) => Resolution::Resolved(ResolvedRoute::new(path, route, None)),
            // Redirect targets are validated to be routes, so one hop is enough.
            Some(Entry::Redirect(redirect)) => match self.match_path(&redirect.to) {
                Some(Entry::Route(route)) => {
                    Resolution::Resolved(ResolvedRoute::new(path, route, Some(redirect)))
                }
                _ => Resolution::NotFound { path: path.to_string() },
            },
            None => Resolution::NotFound { path: path.to_string() },
        };

        match &resolution {
            Resolution::Resolved(route) => tracing::trace!(
                path = %path,
                name = %route.name,
                view = %route.view,
                redirected = route.redirected_from.is_some(),
                "Path resolved"
            ),
            Resolution::NotFound { .. } => tracing::debug!(path = %path, "No route matched"),
        }

        resolution
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|i| &self.routes[*i])
    }

    /// Path registered under `name`.
    pub fn path_for_name(&self, name: &str) -> Option<&str> {
        self.route_by_name(name).map(|r| r.path.as_str())
    }

    /// Resolve a programmatic navigation by route name.
    pub fn resolve_name(&self, name: &str) -> Option<ResolvedRoute> {
        self.route_by_name(name)
            .map(|route| ResolvedRoute::new(&route.path, route, None))
    }

    /// Href for a route path under the configured history mode.
    pub fn href(&self, path: &str) -> String {
        self.history.href(path)
    }

    /// True if both paths address the same table key.
    pub fn same_path(&self, a: &str, b: &str) -> bool {
        self.matcher.matches(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;
    use crate::routing::history::HistoryMode;

    fn table() -> RouteTable {
        RouteTable::default_table().unwrap()
    }

    #[test]
    fn test_defined_paths_resolve() {
        let table = table();

        for view in View::ALL {
            let path = format!("/{}", view);
            let route = table.resolve(&path).into_route().unwrap();
            assert_eq!(route.view, view);
            assert_eq!(route.name, view.as_str());
            assert_eq!(route.path, path);
            assert_eq!(route.redirected_from, None);
        }
    }

    #[test]
    fn test_root_redirects_to_profile() {
        let table = table();

        let root = table.resolve("/").into_route().unwrap();
        let profile = table.resolve("/profile").into_route().unwrap();

        assert_eq!(root.name, "profile");
        assert_eq!(root.view, profile.view);
        assert_eq!(root.path, profile.path);
        assert_eq!(root.requested, "/");
        assert_eq!(root.redirected_from.as_deref(), Some("/"));
    }

    #[test]
    fn test_order_scenario() {
        let route = table().resolve("/order").into_route().unwrap();
        assert_eq!(route.name, "order");
        assert_eq!(route.view, View::Order);
        assert_eq!(route.view.component(), "OrderForm");
    }

    #[test]
    fn test_unknown_path() {
        let table = table();

        assert_eq!(
            table.resolve("/unknown"),
            Resolution::NotFound { path: "/unknown".into() }
        );
        assert!(table.match_path("/unknown").is_none());
        assert!(table.match_path("/order/extra").is_none());
    }

    #[test]
    fn test_match_path_does_not_follow_redirect() {
        let table = table();

        match table.match_path("/") {
            Some(Entry::Redirect(redirect)) => assert_eq!(redirect.to, "/profile"),
            other => panic!("expected redirect, got {:?}", other),
        }
        assert!(matches!(table.match_path("/feedback"), Some(Entry::Route(_))));
    }

    #[test]
    fn test_name_lookup() {
        let table = table();

        assert_eq!(table.path_for_name("feedback"), Some("/feedback"));
        let route = table.resolve_name("feedback").unwrap();
        assert_eq!(route.path, "/feedback");
        assert_eq!(route.view, View::Feedback);
        assert_eq!(table.path_for_name("checkout"), None);
        assert!(table.resolve_name("checkout").is_none());
    }

    #[test]
    fn test_names_and_paths_distinct() {
        let table = table();

        let mut names: Vec<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);

        let mut paths: Vec<&str> = table
            .routes()
            .iter()
            .map(|r| r.path.as_str())
            .chain(table.redirects().iter().map(|r| r.from.as_str()))
            .collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn test_query_and_trailing_slash() {
        let table = table();

        let route = table.resolve("/product/?sku=12#reviews").into_route().unwrap();
        assert_eq!(route.name, "product");
        assert_eq!(route.requested, "/product/?sku=12#reviews");
        assert_eq!(table.resolve("/?tab=1").into_route().unwrap().name, "profile");
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = RouteTable::builder()
            .route("/profile", View::Profile, "profile")
            .route("/profile", View::Order, "order")
            .route("/feedback", View::Feedback, "order")
            .redirect("/", "/nowhere")
            .build()
            .unwrap_err();

        assert_eq!(
            err.errors(),
            &[
                ValidationError::DuplicatePath { path: "/profile".into() },
                ValidationError::DuplicateName { name: "order".into() },
                ValidationError::RedirectTargetMissing { from: "/".into(), to: "/nowhere".into() },
            ]
        );
    }

    #[test]
    fn test_builder_preserves_order_and_history() {
        let table = RouteTable::builder()
            .route("/order", View::Order, "order")
            .route("/profile", View::Profile, "profile")
            .redirect("/", "/order")
            .history(HistoryConfig::with_mode(HistoryMode::Hash))
            .build()
            .unwrap();

        let names: Vec<&str> = table.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["order", "profile"]);
        assert_eq!(table.resolve("/").into_route().unwrap().name, "order");
        assert_eq!(table.href("/order"), "/#/order");
    }

    #[test]
    fn test_sensitive_matching() {
        let table = RouteTable::builder()
            .route("/Order", View::Order, "order")
            .options(MatchOptions { strict: false, sensitive: true })
            .build()
            .unwrap();

        assert!(table.resolve("/Order").route().is_some());
        assert!(table.resolve("/order").route().is_none());
        assert!(!table.same_path("/Order", "/order"));
    }
}
