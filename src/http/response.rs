//! Response shaping for resolution results.
//!
//! # Design Decisions
//! - Resolved routes are 200 with the `ResolvedRoute` body
//! - Unmatched paths are 404 with a JSON error body; there is no not-found view

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::Resolution;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 404 with a JSON error body.
pub fn not_found(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for Resolution {
    fn into_response(self) -> Response {
        match self {
            Resolution::Resolved(route) => Json(route).into_response(),
            Resolution::NotFound { path } => not_found(format!("no route matches `{}`", path)),
        }
    }
}
