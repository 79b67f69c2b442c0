// POST /api/sessions/{session_id}/events — one device event.
//
// Responds with the text walls to show, which is an empty list for interim
// transcriptions and battery updates.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::session::{Session, SessionEvent};
use crate::web::AppState;

pub async fn post_event(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(event): Json<SessionEvent>,
) -> impl IntoResponse {
    let session = Session::new(session_id, String::new(), state.config.display.clone());
    let displays = session.handle(&event);

    Json(serde_json::json!({ "displays": displays }))
}
