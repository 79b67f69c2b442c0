// POST /api/sessions — a pair of glasses connected.
//
// Returns the greeting text wall for the new session.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::session::{DisplayRequest, Session};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSession {
    pub session_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub session_id: String,
    pub package_name: String,
    pub displays: Vec<DisplayRequest>,
}

pub async fn start_session(
    State(state): State<AppState>,
    Json(body): Json<StartSession>,
) -> impl IntoResponse {
    let session = Session::new(
        body.session_id.clone(),
        body.user_id,
        state.config.display.clone(),
    );

    Json(SessionStarted {
        session_id: body.session_id,
        package_name: state.config.package_name.clone(),
        displays: vec![session.greeting()],
    })
}
