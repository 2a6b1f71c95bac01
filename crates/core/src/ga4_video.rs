//! GA4 enhanced-measurement video beacon sanity checks.
//!
//! Independent of the Heartbeat engine: operates directly on [`NetworkEvent`]s
//! fingerprinted as GA4 traffic, not on normalized [`harmony_domain::MediaEvent`]s.
//! Only consulted for events whose [`harmony_domain::Fingerprint::vendor`] is
//! [`harmony_domain::Vendor::Ga4`].

use harmony_domain::{Ga4VideoReport, NetworkEvent};

const EXPECTED_PROGRESS: [f64; 4] = [10.0, 25.0, 50.0, 75.0];

/// The GA4 Measurement Protocol field named `name`, checked as both a
/// top-level query/body key and the `ep.`-prefixed event-parameter variant.
fn field<'a>(event: &'a NetworkEvent, name: &str) -> Option<&'a str> {
    let prefixed = format!("ep.{name}");
    event
        .query_param(&prefixed)
        .or_else(|| event.query_param(name))
        .or_else(|| {
            event.body_json.as_ref().and_then(|body| {
                body.get(&prefixed).or_else(|| body.get(name)).and_then(|v| v.as_str())
            })
        })
}

fn event_name(event: &NetworkEvent) -> String {
    event
        .query_param("en")
        .or_else(|| event.query_param("event_name"))
        .unwrap_or_default()
        .to_string()
}

/// Analyze a sequence of GA4 network events for video-playback sanity.
///
/// Checks, in order of appearance:
/// - `video_title` stays consistent once first observed.
/// - `video_progress` percentages arrive in the order 10, 25, 50, 75.
/// - `video_complete` fires only once at least 95% has been watched
///   (derived from an explicit percent, or from current-time/duration).
#[must_use]
pub fn analyze_video_events(events: &[NetworkEvent]) -> Ga4VideoReport {
    let mut violations = Vec::new();
    let mut title: Option<String> = None;
    let mut next_expected_index = 0usize;
    let mut complete_percent: Option<f64> = None;

    for event in events {
        if let Some(event_title) = field(event, "video_title") {
            match &title {
                None => title = Some(event_title.to_string()),
                Some(t) if t != event_title => {
                    violations.push("video_title changed during session".to_string());
                }
                Some(_) => {}
            }
        }

        match event_name(event).as_str() {
            "video_progress" => {
                let percent = field(event, "video_percent").and_then(|v| v.parse::<f64>().ok());
                let Some(percent) = percent else {
                    violations.push("video_progress missing percent".to_string());
                    continue;
                };
                match EXPECTED_PROGRESS.get(next_expected_index) {
                    None => violations.push(format!("unexpected video_progress {percent}")),
                    Some(expected) if (percent - expected).abs() > f64::EPSILON => {
                        violations.push(format!(
                            "unexpected video progress {percent}; expected {expected}"
                        ));
                    }
                    Some(_) => next_expected_index += 1,
                }
            }
            "video_complete" => {
                let percent = field(event, "video_percent").and_then(|v| v.parse::<f64>().ok());
                complete_percent = percent.or_else(|| {
                    let current = field(event, "video_current_time")?.parse::<f64>().ok()?;
                    let duration = field(event, "video_duration")?.parse::<f64>().ok()?;
                    (duration != 0.0).then_some(current / duration * 100.0)
                });
            }
            _ => {}
        }
    }

    if complete_percent.is_some_and(|p| p < 95.0) {
        violations.push("video_complete before 95% watched".to_string());
    }

    Ga4VideoReport { violations }
}
