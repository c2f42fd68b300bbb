//! Request handlers for the resolution service.

use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::not_found;
use crate::http::server::AppState;
use crate::routing::{Entry, HistoryMode, Redirect as RedirectEntry, View};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub routes: usize,
}

#[derive(Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: String,
    pub view: View,
    pub component: &'static str,
    pub href: String,
}

#[derive(Serialize)]
pub struct RouteListing {
    pub history: HistoryMode,
    pub routes: Vec<RouteSummary>,
    pub redirects: Vec<RedirectEntry>,
}

#[derive(Serialize)]
pub struct NamedRoute {
    pub name: String,
    pub path: String,
    pub href: String,
}

#[derive(Deserialize)]
pub struct ResolveParams {
    pub path: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        routes: state.table.routes().len(),
    })
}

pub async fn list_routes(State(state): State<AppState>) -> Json<RouteListing> {
    let table = &state.table;
    let routes = table
        .routes()
        .iter()
        .map(|r| RouteSummary {
            path: r.path.clone(),
            name: r.name.clone(),
            view: r.view,
            component: r.view.component(),
            href: table.href(&r.path),
        })
        .collect();

    Json(RouteListing {
        history: table.history().mode,
        routes,
        redirects: table.redirects().to_vec(),
    })
}

pub async fn resolve_path(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Response {
    state.table.resolve(&params.path).into_response()
}

pub async fn route_by_name(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.table.path_for_name(&name) {
        Some(path) => Json(NamedRoute {
            href: state.table.href(path),
            path: path.to_string(),
            name,
        })
        .into_response(),
        None => not_found(format!("no route is named `{}`", name)),
    }
}

/// Requests outside the resolution API.
///
/// Under web history the address bar path reaches the server, so the path is
/// taken relative to the base and resolved. Under hash and memory history the
/// route never reaches the server; only the base itself is answered, with the
/// root resolution and no redirect.
pub async fn deep_link(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let table = &state.table;
    let history = table.history();
    let Some(path) = history.strip_base(uri.path()) else {
        tracing::warn!(path = %uri.path(), base = %history.base, "Request outside base");
        return not_found(format!("`{}` is outside base `{}`", uri.path(), history.base));
    };

    if history.mode != HistoryMode::Web {
        if path != "/" {
            tracing::warn!(path = %uri.path(), mode = ?history.mode, "Deep link without web history");
            return not_found(format!("no route matches `{}`", uri.path()));
        }
        return table.resolve(&path).into_response();
    }

    if let Some(Entry::Redirect(redirect)) = table.match_path(&path) {
        let target = table.href(&redirect.to);
        tracing::debug!(from = %uri.path(), to = %target, "Redirecting");
        return Redirect::temporary(&target).into_response();
    }

    let resolution = table.resolve(&path);
    if resolution.route().is_none() {
        tracing::warn!(path = %uri.path(), "No route matched");
    }
    resolution.into_response()
}
