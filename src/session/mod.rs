// Session — turns host events into display requests.
//
// One `Session` exists per connected pair of glasses. It holds only display
// settings and a summarizer; no utterance or summary is remembered between
// events, so sessions never need coordination.

pub mod events;

use tracing::{debug, info};

use crate::digest::{KeywordSummarizer, Summarizer};

pub use events::{BatteryEvent, DisplayRequest, SessionEvent, TranscriptionEvent, ViewType};

/// Prefix for the optional transcript echo in the secondary view.
pub const ECHO_PREFIX: &str = "You said: ";

/// How and for how long things are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Text shown once when a session starts
    pub greeting: String,
    pub greeting_ms: u64,
    /// How long each summary stays on the main view
    pub summary_ms: u64,
    /// Also show the raw transcript in the secondary view
    pub echo_transcript: bool,
    pub echo_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            greeting: "hudsum is ready. Start talking!".to_string(),
            greeting_ms: 2500,
            summary_ms: 3000,
            echo_transcript: false,
            echo_ms: 2000,
        }
    }
}

/// Event handler for one connected device.
pub struct Session<S = KeywordSummarizer> {
    pub session_id: String,
    pub user_id: String,
    display: DisplayConfig,
    summarizer: S,
}

impl Session<KeywordSummarizer> {
    /// A session using the default keyword summarizer.
    pub fn new(
        session_id: impl Into<String>,
        user_id: impl Into<String>,
        display: DisplayConfig,
    ) -> Self {
        Self::with_summarizer(session_id, user_id, display, KeywordSummarizer::default())
    }
}

impl<S: Summarizer> Session<S> {
    pub fn with_summarizer(
        session_id: impl Into<String>,
        user_id: impl Into<String>,
        display: DisplayConfig,
        summarizer: S,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            display,
            summarizer,
        }
    }

    /// The first thing shown when a session starts.
    pub fn greeting(&self) -> DisplayRequest {
        info!(
            session_id = %self.session_id,
            user_id = %self.user_id,
            "Session started"
        );
        DisplayRequest {
            text: self.display.greeting.clone(),
            view: ViewType::Main,
            duration_ms: self.display.greeting_ms,
        }
    }

    /// Handle one event, returning what should be displayed (possibly nothing).
    pub fn handle(&self, event: &SessionEvent) -> Vec<DisplayRequest> {
        match event {
            SessionEvent::Transcription(t) => self.on_transcription(t),
            SessionEvent::Battery(b) => {
                info!(
                    session_id = %self.session_id,
                    level = ?b.level,
                    charging = ?b.charging,
                    "Glasses battery"
                );
                Vec::new()
            }
        }
    }

    fn on_transcription(&self, event: &TranscriptionEvent) -> Vec<DisplayRequest> {
        let Some(text) = event.text.as_deref().filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        // Interim results change several times a second; showing them would
        // make the display flicker.
        if !event.is_final {
            debug!(session_id = %self.session_id, "Ignoring interim transcription");
            return Vec::new();
        }

        let summary = self.summarizer.summarize(text);
        debug!(session_id = %self.session_id, summary = %summary, "Summarized transcription");

        let mut displays = vec![DisplayRequest {
            text: summary,
            view: ViewType::Main,
            duration_ms: self.display.summary_ms,
        }];

        if self.display.echo_transcript {
            displays.push(DisplayRequest {
                text: format!("{ECHO_PREFIX}{text}"),
                view: ViewType::Secondary,
                duration_ms: self.display.echo_ms,
            });
        }

        displays
    }
}
