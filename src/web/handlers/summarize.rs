// POST /api/summarize — summarize arbitrary text without a session.

use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::digest::{extract_keywords, KeywordSummarizer, Summarizer, DEFAULT_TOP_K};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    pub top_k: Option<usize>,
}

pub async fn summarize(Json(body): Json<SummarizeRequest>) -> impl IntoResponse {
    let summarizer = KeywordSummarizer {
        top_k: body.top_k.unwrap_or(DEFAULT_TOP_K),
        ..Default::default()
    };

    Json(serde_json::json!({
        "summary": summarizer.summarize(&body.text),
        "keywords": extract_keywords(&body.text, summarizer.top_k),
    }))
}
