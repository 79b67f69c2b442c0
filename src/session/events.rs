// Host platform event and display types.
//
// These mirror the JSON the glasses host sends and expects: camelCase field
// names, lowercase view names, and a `type` tag on incoming events.

use serde::{Deserialize, Serialize};

/// A speech-to-text result. Hosts stream interim results with
/// `is_final = false` and send one final result per utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionEvent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub is_final: bool,
}

impl TranscriptionEvent {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_final: false,
        }
    }
}

/// Glasses battery status. Both fields are optional because hosts differ
/// in what they report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryEvent {
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub charging: Option<bool>,
}

/// Any event delivered to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Transcription(TranscriptionEvent),
    Battery(BatteryEvent),
}

/// Display slot on the glasses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Main,
    Secondary,
}

/// A request to show a text wall for a fixed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRequest {
    pub text: String,
    pub view: ViewType,
    pub duration_ms: u64,
}
