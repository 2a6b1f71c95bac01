//! Integrates wall-clock durations per playback state.

use harmony_domain::{AssetType, MediaEvent, Metrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImpliedState {
    Main,
    Ad,
    Pause,
    Buffer,
}

/// The playback state implied by `event`, given the previously implied
/// state. Unknown event types inherit the previous state; `sessionEnd`/
/// `sessionComplete` stop accumulation entirely.
fn implied_state(event: &MediaEvent, current: Option<ImpliedState>) -> Option<ImpliedState> {
    match event.event_type.as_str() {
        "play" | "ping" => {
            let is_ad = event.asset_type == Some(AssetType::Ad)
                || event.param("s:asset:type") == Some("ad");
            Some(if is_ad { ImpliedState::Ad } else { ImpliedState::Main })
        }
        "adStart" => Some(ImpliedState::Ad),
        "adComplete" => Some(ImpliedState::Main),
        "pauseStart" => Some(ImpliedState::Pause),
        "bufferStart" => Some(ImpliedState::Buffer),
        "sessionEnd" | "sessionComplete" => None,
        _ => current,
    }
}

/// Compute playback duration metrics from a session's chronologically
/// sorted events.
///
/// Negative timestamp deltas (clock noise) collapse to zero. `ping_integrity`
/// is left at its default (`0.0`); callers combine this with
/// [`crate::compute_ping_integrity`] to fill that field.
#[must_use]
pub fn compute_basic_metrics(events: &[MediaEvent]) -> Metrics {
    let mut metrics = Metrics::default();

    let Some((first, rest)) = events.split_first() else { return metrics };

    let mut state = implied_state(first, None);
    let mut last_ts = first.ts_device;

    for event in rest {
        let delta = (event.ts_device - last_ts).max(0) as f64 / 1000.0;
        match state {
            Some(ImpliedState::Main) => metrics.content_seconds += delta,
            Some(ImpliedState::Ad) => metrics.ad_seconds += delta,
            Some(ImpliedState::Pause) => metrics.pause_seconds += delta,
            Some(ImpliedState::Buffer) => metrics.buffer_seconds += delta,
            None => {}
        }
        state = implied_state(event, state);
        last_ts = event.ts_device;
    }

    metrics.total_seconds = metrics.content_seconds
        + metrics.ad_seconds
        + metrics.pause_seconds
        + metrics.buffer_seconds;
    metrics
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

    #[test]
    fn empty_session_has_zeroed_metrics() {
        assert_eq!(compute_basic_metrics(&[]), Metrics::default());
    }

    #[test]
    fn accumulates_main_content_time() {
        let events = vec![event("play", 0), event("ping", 10_000), event("sessionEnd", 20_000)];
        let metrics = compute_basic_metrics(&events);
        assert_eq!(metrics.content_seconds, 20.0);
        assert_eq!(metrics.total_seconds, 20.0);
    }

    #[test]
    fn splits_time_across_pause_and_ad_states() {
        let events = vec![
            event("play", 0),
            event("pauseStart", 5_000),
            event("play", 8_000),
            event("adStart", 10_000),
            event("adComplete", 11_000),
            event("sessionEnd", 12_000),
        ];
        let metrics = compute_basic_metrics(&events);
        assert_eq!(metrics.content_seconds, 3.0);
        assert_eq!(metrics.pause_seconds, 3.0);
        assert_eq!(metrics.ad_seconds, 1.0);
        assert_eq!(metrics.total_seconds, 7.0);
    }

    #[test]
    fn stops_accumulating_after_session_end() {
        let events = vec![event("play", 0), event("sessionEnd", 10_000), event("ping", 50_000)];
        let metrics = compute_basic_metrics(&events);
        assert_eq!(metrics.content_seconds, 10.0);
        assert_eq!(metrics.total_seconds, 10.0);
    }

    #[test]
    fn negative_deltas_collapse_to_zero() {
        let events = vec![event("play", 10_000), event("ping", 5_000)];
        let metrics = compute_basic_metrics(&events);
        assert_eq!(metrics.content_seconds, 0.0);
    }
}
