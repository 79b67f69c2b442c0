// Web server — Axum-based endpoint for the glasses host platform.
//
// The host forwards session starts and device events as JSON; every
// response lists the text walls to show. All /api/* routes require the
// shared API key. Handlers call the pure digest code directly, so there is
// no shared mutable state beyond the read-only config.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

pub mod auth;
pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let package_name = config.package_name.clone();

    let state = AppState {
        config: Arc::new(config),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(package = %package_name, "hudsum listening on http://{addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    // Authenticated API routes (require the host API key)
    let protected_api = Router::new()
        .route("/api/sessions", post(handlers::session::start_session))
        .route(
            "/api/sessions/{session_id}/events",
            post(handlers::events::post_event),
        )
        .route("/api/summarize", post(handlers::summarize::summarize))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    // Public routes (no auth)
    let public_api = Router::new().route("/health", get(health));

    Router::new()
        .merge(protected_api)
        .merge(public_api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::HeaderName::from_static(auth::API_KEY_HEADER),
                ]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
