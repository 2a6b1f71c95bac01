//! Per-invocation configuration structures for the validation engine.
//!
//! These are passed by value into the engine on every call; there are no
//! process-wide configuration globals (see the concurrency design notes).

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AD_CADENCE_SECS, DEFAULT_MAIN_CADENCE_SECS, DEFAULT_MAX_SIGNATURE_DISTANCE,
    DEFAULT_TOLERANCE_SECS,
};

/// Cadence override configuration for the timing validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CadenceConfig {
    /// Expected seconds between pings while main content is playing.
    pub main_cadence_sec: f64,
    /// Expected seconds between pings while an ad is playing.
    pub ad_cadence_sec: f64,
    /// Allowed deviation in seconds from the expected cadence.
    pub tolerance_sec: f64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            main_cadence_sec: DEFAULT_MAIN_CADENCE_SECS,
            ad_cadence_sec: DEFAULT_AD_CADENCE_SECS,
            tolerance_sec: DEFAULT_TOLERANCE_SECS,
        }
    }
}

impl CadenceConfig {
    /// Cadence in milliseconds for main content.
    #[must_use]
    pub fn main_cadence_ms(&self) -> i64 {
        (self.main_cadence_sec * 1000.0).round() as i64
    }

    /// Cadence in milliseconds for ad playback.
    #[must_use]
    pub fn ad_cadence_ms(&self) -> i64 {
        (self.ad_cadence_sec * 1000.0).round() as i64
    }

    /// Tolerance in milliseconds.
    #[must_use]
    pub fn tolerance_ms(&self) -> i64 {
        (self.tolerance_sec * 1000.0).round() as i64
    }
}

/// Configuration for the sequence-signature anomaly detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnomalyConfig {
    /// Canonical signature templates considered "known good".
    pub templates: Vec<String>,
    /// Maximum edit distance before a signature is flagged anomalous.
    pub max_distance: usize,
}

impl AnomalyConfig {
    /// Build a config with the given templates and the default max distance.
    #[must_use]
    pub fn with_templates(templates: Vec<String>) -> Self {
        Self { templates, max_distance: DEFAULT_MAX_SIGNATURE_DISTANCE }
    }
}
