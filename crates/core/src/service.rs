//! Top-level orchestration: ties normalization, ordering, timing, parameter,
//! metrics, and signature analysis together into [`SessionReport`]s.

use harmony_domain::{
    AnomalyConfig, CadenceConfig, MediaEvent, NetworkEvent, ParamRule, Session, SessionReport,
    Violations,
};

use crate::metrics::compute_basic_metrics;
use crate::normalize::network_events_to_media_events;
use crate::ordering::validate_event_order;
use crate::params::validate_param_rules;
use crate::session::group_into_sessions;
use crate::signature::detect_sequence_anomaly;
use crate::timing::{compute_ping_integrity, validate_ping_cadence};

/// Analyze one session's events, producing its full [`SessionReport`].
///
/// Events are sorted by `(ts_device, original_index)` first, guarding
/// against minor ordering mistakes in the caller's input (mirrors
/// [`crate::group_into_sessions`]'s sort, applied defensively here too since
/// a [`Session`] may be constructed directly by callers who skip grouping).
#[must_use]
pub fn analyze_session(
    session: &Session,
    rules: &[ParamRule],
    cadence: &CadenceConfig,
    anomaly: &AnomalyConfig,
) -> SessionReport {
    let mut ordered = session.events.clone();
    ordered.sort_by_key(|e| (e.ts_device, e.original_index));

    let violations = Violations {
        ordering: validate_event_order(&ordered),
        timing: validate_ping_cadence(&ordered, cadence),
        params: validate_param_rules(&ordered, rules),
    };

    let mut metrics = compute_basic_metrics(&ordered);
    metrics.ping_integrity = compute_ping_integrity(&ordered, cadence);

    let (is_anomalous, distance, signature) = detect_sequence_anomaly(&ordered, anomaly);

    SessionReport {
        session_id: session.session_id.clone(),
        metrics,
        violations,
        signature,
        signature_distance: Some(distance),
        anomalous: is_anomalous,
    }
}

/// Group already-normalized events by session and analyze each one.
#[must_use]
pub fn analyze_sessions(
    events: Vec<MediaEvent>,
    rules: &[ParamRule],
    cadence: &CadenceConfig,
    anomaly: &AnomalyConfig,
) -> Vec<SessionReport> {
    group_into_sessions(events)
        .iter()
        .map(|session| analyze_session(session, rules, cadence, anomaly))
        .collect()
}

/// Normalize a raw network log and analyze every session found within it.
#[must_use]
pub fn analyze_network_log(
    events: &[NetworkEvent],
    rules: &[ParamRule],
    cadence: &CadenceConfig,
    anomaly: &AnomalyConfig,
) -> Vec<SessionReport> {
    let media_events = network_events_to_media_events(events);
    analyze_sessions(media_events, rules, cadence, anomaly)
}

#[cfg(test)]
mod tests {
    use harmony_domain::{AssetType, StreamType};

    use super::*;

    fn event(event_type: &str, ts_device: i64, asset_type: Option<AssetType>) -> MediaEvent {
        MediaEvent {
            session_id: "s1".to_string(),
            event_type: event_type.to_string(),
            ts_device,
            playhead: 0.0,
            stream_type: Some(StreamType::Vod),
            asset_type,
            params: Default::default(),
            original_index: 0,
        }
    }

    #[test]
    fn analyzes_a_clean_session_with_no_violations() {
        let events = vec![
            event("sessionStart", 0, None),
            event("play", 0, None),
            event("ping", 10_000, None),
            event("sessionEnd", 20_000, None),
        ];
        let session = Session::new("s1", events);
        let report = analyze_session(
            &session,
            &[],
            &CadenceConfig::default(),
            &AnomalyConfig::default(),
        );
        assert!(report.violations.is_empty());
        assert_eq!(report.metrics.ping_integrity, 100.0);
        assert_eq!(report.session_id, "s1");
    }

    #[test]
    fn sorts_events_before_analysis_even_if_caller_forgot() {
        let events = vec![event("play", 10_000, None), event("sessionStart", 0, None)];
        let session = Session::new("s1", events);
        let report = analyze_session(
            &session,
            &[],
            &CadenceConfig::default(),
            &AnomalyConfig::default(),
        );
        assert!(report.violations.ordering.is_empty());
    }

    #[test]
    fn analyze_sessions_groups_by_session_id() {
        let mut a = event("sessionStart", 0, None);
        a.session_id = "a".to_string();
        let mut b = event("sessionStart", 0, None);
        b.session_id = "b".to_string();
        let reports = analyze_sessions(
            vec![a, b],
            &[],
            &CadenceConfig::default(),
            &AnomalyConfig::default(),
        );
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn analyze_network_log_normalizes_then_analyzes() {
        let mut network_event = harmony_domain::NetworkEvent {
            url: "https://example.com/v1/events".to_string(),
            method: "POST".to_string(),
            status: 200,
            started_date_time: "2024-01-01T00:00:00Z".to_string(),
            request_headers: Default::default(),
            response_headers: Default::default(),
            query_params: vec![
                ("s:event:type".to_string(), "sessionStart".to_string()),
                ("s:event:sid".to_string(), "abc".to_string()),
            ],
            post_data: None,
            body_json: None,
            source: Default::default(),
        };
        network_event.query_params.push(("l:event:ts".to_string(), "0".to_string()));
        let reports = analyze_network_log(
            &[network_event],
            &[],
            &CadenceConfig::default(),
            &AnomalyConfig::default(),
        );
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].session_id, "abc");
    }
}
