//! Views reachable through the route table.
//!
//! The set of views is fixed, so it is a closed enum rather than a trait
//! object. Rendering is the host application's business; a view here is only
//! an identifier for the component that gets mounted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A form view mounted by the host application when its route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Profile,
    Product,
    Order,
    Feedback,
}

impl View {
    /// Every view, in the order the default table declares them.
    pub const ALL: [View; 4] = [View::Profile, View::Product, View::Order, View::Feedback];

    /// Lowercase identifier used in config files and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Profile => "profile",
            View::Product => "product",
            View::Order => "order",
            View::Feedback => "feedback",
        }
    }

    /// Name of the external component rendered for this view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Profile => "UserProfileForm",
            View::Product => "ProductForm",
            View::Order => "OrderForm",
            View::Feedback => "FeedbackForm",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
