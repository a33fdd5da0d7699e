//! `/api` forwarding
//!
//! The browser talks to the backend through the same origin that serves
//! the app, so the backend's session cookie is first-party. Requests under
//! `/api/` are replayed against the configured backend and the answer is
//! passed back untouched apart from hop-by-hop headers.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Serialize;

/// Largest request body forwarded to the backend.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Error body returned when forwarding fails
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

/// Proxy error types
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Backend unavailable: {0}")]
    Upstream(String),

    #[error("Invalid request body: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
            ProxyError::Body(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };

        let body = ErrorBody {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Forwards `/api/*` to the backend.
#[derive(Debug, Clone)]
pub struct ApiProxy {
    backend_url: String,
    client: reqwest::Client,
}

impl ApiProxy {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Router serving `/api/{*path}`.
    pub fn router(self) -> Router {
        Router::new()
            .route("/api/{*path}", any(forward))
            .with_state(self)
    }
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
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

fn forwardable(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

async fn forward(State(proxy): State<ApiProxy>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", proxy.backend_url, path_and_query);

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, url = %url, "Forwarding API request");

    let upstream = proxy
        .client
        .request(parts.method, &url)
        .headers(forwardable(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Backend request to {} failed: {}", url, e);
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = forwardable(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;

    Ok(response)
}
