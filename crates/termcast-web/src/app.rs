//! axum application over the route table.
//!
//! Every request falls through to [`resolve_request`], which consults the
//! immutable [`RouteTable`] and answers with the resolved handler
//! identity as JSON, or a 404 for unrouted paths. The table is shared as
//! `Arc` state: written once at startup, read concurrently thereafter.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method as HttpMethod, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use serde::Serialize;
use termcast_router::{Method, RouteTable};

/// JSON body for a resolved request.
#[derive(Debug, Serialize)]
pub struct ResolvedRoute {
    /// Full handler identity, e.g. `asciicasts#show`.
    pub handler: String,
    pub resource: String,
    pub action: String,
    /// Bound path parameters with route defaults merged in. BTreeMap so
    /// the serialized order is stable.
    pub params: BTreeMap<String, String>,
    /// Canonical URL rebuilt through the route's alias, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// JSON body for an unrouted request.
#[derive(Debug, Serialize)]
pub struct RoutingError {
    pub error: &'static str,
    pub path: String,
}

/// Builds the axum application around a frozen route table.
pub fn build_app(table: Arc<RouteTable>) -> Router {
    Router::new().fallback(resolve_request).with_state(table)
}

async fn resolve_request(
    State(table): State<Arc<RouteTable>>,
    method: HttpMethod,
    uri: Uri,
) -> Response {
    let Ok(method) = method.as_str().parse::<Method>() else {
        return not_found(uri.path());
    };

    match table.resolve(method, uri.path()) {
        Some(matched) => {
            let route = matched.route();
            let url = route
                .name()
                .and_then(|alias| link_or_log(&table, alias, matched.params()));

            let handler = route.handler();
            let body = ResolvedRoute {
                handler: handler.to_string(),
                resource: handler.resource().to_string(),
                action: handler.action().to_string(),
                params: matched
                    .params()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                url,
            };

            (StatusCode::OK, Json(body)).into_response()
        }
        None => not_found(uri.path()),
    }
}

fn not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(RoutingError {
            error: "not_found",
            path: path.to_string(),
        }),
    )
        .into_response()
}

/// Generates a link through `url_for`, degrading on failure.
///
/// A `UrlError` means a misconfigured alias or parameter set. On a live
/// request path that is logged and the link is dropped from the response
/// rather than failing the whole request.
pub fn link_or_log(
    table: &RouteTable,
    alias: &str,
    params: &HashMap<String, String>,
) -> Option<String> {
    match table.url_for(alias, params) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::error!(alias, %err, "link generation failed");
            None
        }
    }
}
