//! Reverse proxy for the newsletter backend API.
//!
//! The browser only talks to this host; `/api/*` requests (newsletter issues,
//! subscriptions) are forwarded verbatim to `API_ORIGIN`.
//!
//! ERROR HANDLING
//! ==============
//! No configured origin answers 404. Upstream transport failures answer 502
//! and are logged; upstream HTTP errors are passed through unchanged.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    origin: Option<String>,
}

impl ProxyState {
    pub fn new(http: reqwest::Client, origin: Option<String>) -> Self {
        if origin.is_none() {
            tracing::warn!("API_ORIGIN not set; /api requests will return 404");
        }
        Self { http, origin }
    }
}

/// Absolute upstream URL for `/api/{path}?{query}`.
pub fn upstream_url(origin: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{origin}/api/{path}?{q}"),
        None => format!("{origin}/api/{path}"),
    }
}

/// Headers that describe a single connection and must not be forwarded.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

/// Copy end-to-end headers only.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(origin) = state.origin.as_deref() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let url = upstream_url(origin, &path, query.as_deref());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await;

    let resp = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api proxy request failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    let headers = forwardable_headers(resp.headers());
    match resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, %status, "api proxy response");
            (status, headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api proxy body read failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
