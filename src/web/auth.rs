// Auth middleware — shared API key check.
//
// The host sends the key either as `Authorization: Bearer <key>` or as an
// `x-api-key` header. Keys are compared in constant time.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use super::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Axum middleware: reject requests without the configured API key with 401.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let expected = &state.config.api_key;

    let authorized = match presented_key(request.headers()) {
        Some(key) => !expected.is_empty() && constant_time_eq(key, expected),
        None => false,
    };

    if !authorized {
        warn!(path = %request.uri().path(), "Rejected request without a valid API key");
        return super::api_error(StatusCode::UNAUTHORIZED, "Authentication required");
    }

    next.run(request).await
}

/// The key presented by the caller, if any.
fn presented_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(bearer) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(bearer.trim());
    }

    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
