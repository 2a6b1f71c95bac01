//! The normalized Heartbeat event record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impl_enum_display;

/// Whether playback is video-on-demand, live, or linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    Vod,
    Live,
    Linear,
}

impl_enum_display!(StreamType {
    Vod => "vod",
    Live => "live",
    Linear => "linear",
});

/// Whether the currently playing content is the main program or an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Main,
    Ad,
}

impl_enum_display!(AssetType {
    Main => "main",
    Ad => "ad",
});

/// A single normalized Heartbeat event, keyed by session id.
///
/// Produced once by the Normalizer and immutable thereafter. Every
/// `MediaEvent` has a non-empty `session_id` and `event_type` — the
/// Normalizer drops any record lacking either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEvent {
    pub session_id: String,
    /// Event type, e.g. `"play"`, `"ping"`, `"adBreakStart"`.
    pub event_type: String,
    /// Device-local timestamp in milliseconds. Opaque, monotonic-ish.
    pub ts_device: i64,
    /// Playhead position in seconds.
    pub playhead: f64,
    pub stream_type: Option<StreamType>,
    pub asset_type: Option<AssetType>,
    /// Merged parameter map (query, form, and/or JSON body fields).
    pub params: BTreeMap<String, String>,
    /// Stable original input index, used to break ties when sorting by
    /// `ts_device`.
    pub original_index: usize,
}

impl MediaEvent {
    /// Value of a named parameter, treating empty strings as absent.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }
}
