//! Ping cadence validation and the ping-integrity score.

use harmony_domain::{CadenceConfig, MediaEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Asset {
    Main,
    Ad,
}

impl Asset {
    fn cadence_ms(self, config: &CadenceConfig) -> i64 {
        match self {
            Asset::Main => config.main_cadence_ms(),
            Asset::Ad => config.ad_cadence_ms(),
        }
    }
}

/// Whether an event's asset is `ad`, consulting both the normalized
/// `asset_type` field and the raw `s:asset:type` parameter.
fn is_ad(event: &MediaEvent) -> bool {
    matches!(event.asset_type, Some(harmony_domain::AssetType::Ad))
        || event.param("s:asset:type") == Some("ad")
}

fn cadence_terminating(event_type: &str) -> bool {
    matches!(
        event_type,
        "pauseStart"
            | "bufferStart"
            | "adBreakStart"
            | "adBreakComplete"
            | "adComplete"
            | "sessionEnd"
            | "sessionComplete"
    )
}

/// Validate ping cadence for one session's chronologically sorted events.
///
/// Returns human-readable violation messages for pings observed too early or
/// too late relative to the expected cadence.
#[must_use]
pub fn validate_ping_cadence(events: &[MediaEvent], config: &CadenceConfig) -> Vec<String> {
    let tolerance_ms = config.tolerance_ms();
    let mut current_asset: Option<Asset> = None;
    let mut expected_ts: Option<i64> = None;
    let mut violations = Vec::new();

    for event in events {
        match event.event_type.as_str() {
            "play" | "adStart" => {
                let asset = if event.event_type == "adStart" || is_ad(event) {
                    Asset::Ad
                } else {
                    Asset::Main
                };
                current_asset = Some(asset);
                expected_ts = Some(event.ts_device + asset.cadence_ms(config));
            }
            "ping" => {
                if let Some(asset) = current_asset {
                    if let Some(expected) = expected_ts {
                        let delta = event.ts_device - expected;
                        if delta.abs() > tolerance_ms {
                            if delta > 0 {
                                violations.push(format!(
                                    "missing ping before {} (expected around {})",
                                    event.ts_device, expected
                                ));
                            } else {
                                violations.push(format!(
                                    "early ping at {} (expected around {})",
                                    event.ts_device, expected
                                ));
                            }
                        }
                    }
                    expected_ts = Some(event.ts_device + asset.cadence_ms(config));
                }
            }
            t if cadence_terminating(t) => {
                current_asset = None;
                expected_ts = None;
            }
            _ => {}
        }
    }

    violations
}

/// Compute the 0-100 ping integrity score for one session's chronologically
/// sorted events.
///
/// Returns `100.0` when no ping was ever expected.
#[must_use]
pub fn compute_ping_integrity(events: &[MediaEvent], config: &CadenceConfig) -> f64 {
    let tolerance_ms = config.tolerance_ms();
    let mut current_asset: Option<Asset> = None;
    let mut cadence_ms: Option<i64> = None;
    let mut expected_ts: Option<i64> = None;
    let mut expected = 0u64;
    let mut observed = 0u64;

    for event in events {
        match event.event_type.as_str() {
            "play" | "adStart" => {
                let asset = if event.event_type == "adStart" || is_ad(event) {
                    Asset::Ad
                } else {
                    Asset::Main
                };
                current_asset = Some(asset);
                cadence_ms = Some(asset.cadence_ms(config));
                expected_ts = Some(event.ts_device + asset.cadence_ms(config));
            }
            "ping" if current_asset.is_some() => {
                if let (Some(mut expected_at), Some(cadence)) = (expected_ts, cadence_ms) {
                    while event.ts_device - expected_at > tolerance_ms {
                        expected += 1;
                        expected_at += cadence;
                    }
                    expected += 1;
                    if (event.ts_device - expected_at).abs() <= tolerance_ms {
                        observed += 1;
                    }
                    expected_ts = Some(event.ts_device + cadence);
                }
            }
            t if cadence_terminating(t) => {
                if let (Some(mut expected_at), Some(cadence)) = (expected_ts, cadence_ms) {
                    while event.ts_device - expected_at > tolerance_ms {
                        expected += 1;
                        expected_at += cadence;
                    }
                }
                current_asset = None;
                cadence_ms = None;
                expected_ts = None;
            }
            _ => {}
        }
    }

    if expected == 0 {
        100.0
    } else {
        observed as f64 / expected as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, ts_device: i64) -> MediaEvent {
        MediaEvent {
            session_id: "s1".to_string(),
            event_type: event_type.to_string(),
            ts_device,
            playhead: 0.0,
            stream_type: None,
            asset_type: None,
            params: Default::default(),
            original_index: 0,
        }
    }

    fn config() -> CadenceConfig {
        CadenceConfig { main_cadence_sec: 10.0, ad_cadence_sec: 1.0, tolerance_sec: 2.0 }
    }

    #[test]
    fn no_violations_for_pings_within_cadence() {
        let events = vec![event("play", 0), event("ping", 10_000), event("ping", 20_100)];
        assert!(validate_ping_cadence(&events, &config()).is_empty());
    }

    #[test]
    fn missing_ping_is_flagged() {
        let events = vec![event("play", 0), event("ping", 15_000)];
        let violations = validate_ping_cadence(&events, &config());
        assert_eq!(violations, vec!["missing ping before 15000 (expected around 10000)"]);
    }

    #[test]
    fn early_ping_is_flagged() {
        let events = vec![event("play", 0), event("ping", 3_000)];
        let violations = validate_ping_cadence(&events, &config());
        assert_eq!(violations, vec!["early ping at 3000 (expected around 10000)"]);
    }

    #[test]
    fn pings_before_any_asset_started_are_ignored() {
        let events = vec![event("ping", 50_000)];
        assert!(validate_ping_cadence(&events, &config()).is_empty());
    }

    #[test]
    fn cadence_resets_on_pause() {
        let events =
            vec![event("play", 0), event("pauseStart", 5_000), event("ping", 999_999)];
        assert!(validate_ping_cadence(&events, &config()).is_empty());
    }

    #[test]
    fn integrity_is_100_when_no_ping_expected() {
        assert_eq!(compute_ping_integrity(&[], &config()), 100.0);
        let events = vec![event("sessionStart", 0)];
        assert_eq!(compute_ping_integrity(&events, &config()), 100.0);
    }

    #[test]
    fn integrity_is_100_for_a_perfectly_paced_session() {
        let events = vec![event("play", 0), event("ping", 10_000), event("ping", 20_000)];
        assert_eq!(compute_ping_integrity(&events, &config()), 100.0);
    }

    #[test]
    fn integrity_counts_missed_slots_flushed_on_termination() {
        let events = vec![event("play", 0), event("pauseStart", 35_000)];
        // Expect 3 missed 10s slots (at 10s, 20s, 30s) flushed at pause.
        assert_eq!(compute_ping_integrity(&events, &config()), 0.0);
    }

    #[test]
    fn ad_cadence_applies_during_ad_playback() {
        let events = vec![event("adStart", 0), event("ping", 1_000), event("ping", 2_000)];
        assert_eq!(compute_ping_integrity(&events, &config()), 100.0);
    }
}
