//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path or route name)
//!     → matcher.rs (normalize to lookup key)
//!     → router.rs (route lookup, redirect hop)
//!     → Return: ResolvedRoute (view) or NotFound
//!
//! Table construction (at startup):
//!     RouteConfig[] + RedirectConfig[]
//!     → validate invariants (unique paths/names, redirect targets)
//!     → index by path and by name
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Passed explicitly (`Arc<RouteTable>`) to whoever navigates; no global
//! - Views are a closed enum
//! - Unmatched paths are an explicit `NotFound`; there is no catch-all route

pub mod history;
pub mod matcher;
pub mod navigation;
pub mod router;
pub mod view;

pub use history::{HistoryConfig, HistoryMode};
pub use matcher::{MatchOptions, PathMatcher};
pub use navigation::{Location, NavigationError, Navigator};
pub use router::{Entry, Redirect, Resolution, ResolvedRoute, Route, RouteTable, RouteTableBuilder};
pub use view::View;
