//! The per-session validation verdict produced by the engine.

use serde::{Deserialize, Serialize};

/// Durations and scores computed by the Metrics Aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    /// Total seconds of main content playback.
    #[serde(rename = "content")]
    pub content_seconds: f64,
    /// Total seconds of ad playback.
    #[serde(rename = "ad")]
    pub ad_seconds: f64,
    /// Total seconds spent paused.
    #[serde(rename = "pause")]
    pub pause_seconds: f64,
    /// Total seconds spent buffering.
    #[serde(rename = "buffer")]
    pub buffer_seconds: f64,
    /// `content_seconds + ad_seconds + pause_seconds + buffer_seconds`.
    #[serde(rename = "total")]
    pub total_seconds: f64,
    /// 0-100 score reflecting how closely ping cadence matched expectations.
    pub ping_integrity: f64,
}

/// Violations found by each validator, keyed by concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Violations {
    /// Event-ordering state machine rejections.
    pub ordering: Vec<String>,
    /// Ping cadence/timing anomalies.
    pub timing: Vec<String>,
    /// Missing-required-parameter findings.
    pub params: Vec<String>,
}

impl Violations {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty() && self.timing.is_empty() && self.params.is_empty()
    }
}

/// The full validation verdict for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionReport {
    pub session_id: String,
    pub metrics: Metrics,
    pub violations: Violations,
    /// Compact per-event-type signature string, e.g. `"SPpPpE"`.
    pub signature: String,
    /// Edit distance from `signature` to the nearest configured template.
    pub signature_distance: Option<usize>,
    /// `true` when `signature_distance` exceeds the configured maximum.
    pub anomalous: bool,
}

/// Sanity-check verdict for GA4 enhanced-measurement video beacons.
///
/// Deliberately decoupled from [`SessionReport`]: it has no session id,
/// metrics, or signature of its own, since it validates a single vendor's
/// video events rather than a full Heartbeat session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Ga4VideoReport {
    pub violations: Vec<String>,
}
