//! The Heartbeat event-ordering state machine.

use harmony_domain::MediaEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackState {
    Idle,
    Main,
    Paused,
    Buffering,
    Ad,
}

/// Validate event ordering for one session's chronologically sorted events.
///
/// Returns human-readable violation messages in the order encountered; an
/// empty list means the sequence adhered to the Heartbeat state machine.
#[must_use]
pub fn validate_event_order(events: &[MediaEvent]) -> Vec<String> {
    let mut state = PlaybackState::Idle;
    let mut ad_break_active = false;
    let mut ad_active = false;
    let mut ad_started_in_break = false;
    let mut violations = Vec::new();

    for event in events {
        match event.event_type.as_str() {
            "sessionStart" => {
                state = PlaybackState::Main;
                ad_break_active = false;
                ad_active = false;
                ad_started_in_break = false;
            }
            "play" => {
                if state == PlaybackState::Main {
                    violations.push("play while already playing".to_string());
                } else {
                    state = PlaybackState::Main;
                }
            }
            "pauseStart" => state = PlaybackState::Paused,
            "bufferStart" => state = PlaybackState::Buffering,
            "adBreakStart" => {
                if ad_break_active || ad_active {
                    violations.push("adBreakStart while previous ad break active".to_string());
                } else {
                    ad_break_active = true;
                    ad_started_in_break = false;
                }
            }
            "adStart" => {
                if !ad_break_active || ad_active {
                    violations.push("adStart without preceding adBreakStart".to_string());
                } else {
                    ad_active = true;
                    ad_started_in_break = true;
                    state = PlaybackState::Ad;
                }
            }
            "adComplete" => {
                if !ad_active {
                    violations.push("adComplete without preceding adStart".to_string());
                } else {
                    ad_active = false;
                    state = PlaybackState::Main;
                }
            }
            "adBreakComplete" => {
                if ad_active {
                    violations.push("adBreakComplete before adComplete".to_string());
                    ad_active = false;
                }
                if !ad_break_active {
                    violations.push("adBreakComplete without adBreakStart".to_string());
                } else if !ad_started_in_break {
                    violations.push("adBreakComplete without adStart".to_string());
                }
                ad_break_active = false;
                ad_started_in_break = false;
                state = PlaybackState::Main;
            }
            "sessionEnd" | "sessionComplete" => {
                if ad_active {
                    violations.push("session ended during active ad".to_string());
                    ad_active = false;
                }
                if ad_break_active {
                    violations.push("session ended during active ad break".to_string());
                    ad_break_active = false;
                }
                state = PlaybackState::Idle;
            }
            _ => {}
        }
    }

    if ad_active {
        violations.push("ad not closed with adComplete".to_string());
    }
    if ad_break_active {
        violations.push("ad break not closed with adBreakComplete".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str) -> MediaEvent {
        MediaEvent {
            session_id: "s1".to_string(),
            event_type: event_type.to_string(),
            ts_device: 0,
            playhead: 0.0,
            stream_type: None,
            asset_type: None,
            params: Default::default(),
            original_index: 0,
        }
    }

    fn types(types: &[&str]) -> Vec<MediaEvent> {
        types.iter().map(|t| event(t)).collect()
    }

    #[test]
    fn clean_session_has_no_violations() {
        let events = types(&["sessionStart", "play", "pauseStart", "play", "sessionEnd"]);
        assert!(validate_event_order(&events).is_empty());
    }

    #[test]
    fn play_while_already_playing_is_flagged() {
        let events = types(&["sessionStart", "play", "play"]);
        assert_eq!(validate_event_order(&events), vec!["play while already playing"]);
    }

    #[test]
    fn clean_ad_break_sequence_has_no_violations() {
        let events = types(&[
            "sessionStart",
            "play",
            "adBreakStart",
            "adStart",
            "adComplete",
            "adBreakComplete",
        ]);
        assert!(validate_event_order(&events).is_empty());
    }

    #[test]
    fn nested_ad_break_start_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart", "adBreakStart"]);
        assert_eq!(
            validate_event_order(&events),
            vec!["adBreakStart while previous ad break active"]
        );
    }

    #[test]
    fn ad_start_without_break_is_flagged() {
        let events = types(&["sessionStart", "adStart"]);
        assert_eq!(validate_event_order(&events), vec!["adStart without preceding adBreakStart"]);
    }

    #[test]
    fn ad_complete_without_start_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart", "adComplete"]);
        assert_eq!(validate_event_order(&events), vec!["adComplete without preceding adStart"]);
    }

    #[test]
    fn ad_break_complete_before_ad_complete_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart", "adStart", "adBreakComplete"]);
        assert_eq!(validate_event_order(&events), vec!["adBreakComplete before adComplete"]);
    }

    #[test]
    fn ad_break_complete_without_start_is_flagged() {
        let events = types(&["sessionStart", "adBreakComplete"]);
        assert_eq!(validate_event_order(&events), vec!["adBreakComplete without adBreakStart"]);
    }

    #[test]
    fn ad_break_complete_without_ad_start_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart", "adBreakComplete"]);
        assert_eq!(validate_event_order(&events), vec!["adBreakComplete without adStart"]);
    }

    #[test]
    fn session_ended_during_active_ad_is_flagged() {
        let events =
            types(&["sessionStart", "adBreakStart", "adStart", "sessionEnd"]);
        assert_eq!(validate_event_order(&events), vec!["session ended during active ad"]);
    }

    #[test]
    fn unclosed_ad_at_end_of_stream_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart", "adStart"]);
        assert_eq!(validate_event_order(&events), vec!["ad not closed with adComplete"]);
    }

    #[test]
    fn unclosed_ad_break_at_end_of_stream_is_flagged() {
        let events = types(&["sessionStart", "adBreakStart"]);
        assert_eq!(
            validate_event_order(&events),
            vec!["ad break not closed with adBreakComplete"]
        );
    }

    #[test]
    fn ping_events_do_not_affect_state() {
        let events = types(&["sessionStart", "play", "ping", "ping", "sessionEnd"]);
        assert!(validate_event_order(&events).is_empty());
    }
}
