//! A single playback session: its id and the ordered events within it.

use crate::types::media::MediaEvent;

/// All [`MediaEvent`]s sharing one session id, in normalized (ts_device,
/// then original_index) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub events: Vec<MediaEvent>,
}

impl Session {
    #[must_use]
    pub fn new(session_id: impl Into<String>, events: Vec<MediaEvent>) -> Self {
        Self { session_id: session_id.into(), events }
    }
}
