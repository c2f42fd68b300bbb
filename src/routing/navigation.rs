//! Session navigation on top of an injected route table.
//!
//! A `Navigator` owns the history stack of one session. Every navigation is
//! resolved against the table first; only resolved locations enter history.

use std::sync::Arc;

use crate::routing::router::{ResolvedRoute, Resolution, RouteTable};

/// Why a navigation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`")]
    NotFound { path: String },

    #[error("no route is named `{name}`")]
    UnknownName { name: String },
}

/// A history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: ResolvedRoute,
    /// Address bar value under the table's history mode.
    pub href: String,
}

/// History stack for one navigation session.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    entries: Vec<Location>,
    index: usize,
}

impl Navigator {
    /// Start a session at `initial_path`.
    pub fn start(table: Arc<RouteTable>, initial_path: &str) -> Result<Self, NavigationError> {
        let location = Self::locate(&table, initial_path)?;
        Ok(Self {
            table,
            entries: vec![location],
            index: 0,
        })
    }

    fn locate(table: &RouteTable, path: &str) -> Result<Location, NavigationError> {
        match table.resolve(path) {
            Resolution::Resolved(route) => {
                let href = table.href(&route.path);
                Ok(Location { route, href })
            }
            Resolution::NotFound { path } => Err(NavigationError::NotFound { path }),
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Number of entries in history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn commit(&mut self, location: Location) -> &Location {
        if location.route.path == self.current().route.path {
            tracing::debug!(path = %location.route.path, "Already at location");
            return self.current();
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        tracing::debug!(
            path = %self.current().route.path,
            name = %self.current().route.name,
            depth = self.entries.len(),
            "Navigated"
        );
        self.current()
    }

    /// Navigate to a path, adding a history entry.
    pub fn push_path(&mut self, path: &str) -> Result<&Location, NavigationError> {
        let location = Self::locate(&self.table, path)?;
        Ok(self.commit(location))
    }

    /// Navigate to a named route, adding a history entry.
    pub fn push_name(&mut self, name: &str) -> Result<&Location, NavigationError> {
        let route = self
            .table
            .resolve_name(name)
            .ok_or_else(|| NavigationError::UnknownName { name: name.to_string() })?;
        let href = self.table.href(&route.path);
        Ok(self.commit(Location { route, href }))
    }

    /// Navigate to a path, replacing the current entry.
    pub fn replace_path(&mut self, path: &str) -> Result<&Location, NavigationError> {
        let location = Self::locate(&self.table, path)?;
        self.entries[self.index] = location;
        Ok(self.current())
    }

    /// Step back one entry, if there is one.
    pub fn back(&mut self) -> Option<&Location> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one entry, if there is one.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
