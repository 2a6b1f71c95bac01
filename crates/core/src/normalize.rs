//! Projects raw [`NetworkEvent`]s into normalized [`MediaEvent`]s.
//!
//! A single network request can carry zero, one, or many media events: zero
//! when it isn't a Media Collection beacon at all, one when the request body
//! *is* the event, many when the body holds a batched `events` array.

use std::collections::BTreeMap;
use std::str::FromStr;

use harmony_domain::{AssetType, MediaEvent, NetworkEvent, StreamType};
use serde_json::Value;

/// Normalize a batch of [`NetworkEvent`]s into [`MediaEvent`]s, in order.
///
/// Non-media traffic (no recognizable `type`/`sessionId`) is silently
/// dropped. `original_index` is assigned over the *output* sequence, which
/// is what session sorting uses to break timestamp ties.
#[must_use]
pub fn network_events_to_media_events(events: &[NetworkEvent]) -> Vec<MediaEvent> {
    let mut media_events = Vec::new();

    for event in events {
        let query = query_map(event);
        let form = form_params(event);

        for (own_params, top_level) in body_items(event) {
            let mut params = query.clone();
            for (k, v) in &form {
                params.insert(k.clone(), v.clone());
            }
            for (k, v) in &own_params {
                params.insert(k.clone(), v.clone());
            }
            for (k, v) in &top_level {
                params.insert(k.clone(), v.clone());
            }

            let Some(event_type) = first_present(&params, &["s:event:type", "eventType", "type"])
            else {
                continue;
            };
            let mut session_id = first_present(
                &params,
                &["s:event:sid", "s:session:id", "sessionId", "sid"],
            );
            if session_id.is_none() {
                session_id = event
                    .response_header("location")
                    .and_then(session_id_from_location);
            }
            let Some(session_id) = session_id else { continue };
            if event_type.is_empty() || session_id.is_empty() {
                continue;
            }

            let ts_device = first_present(&params, &["l:event:ts", "ts"])
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0);
            let playhead = first_present(&params, &["l:event:playhead", "playhead"])
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0);
            let stream_type = first_present(&params, &["s:stream:type", "streamType"])
                .and_then(|v| StreamType::from_str(&v).ok());
            let asset_type = first_present(&params, &["s:asset:type", "assetType"])
                .and_then(|v| AssetType::from_str(&v).ok());

            let original_index = media_events.len();
            media_events.push(MediaEvent {
                session_id,
                event_type,
                ts_device,
                playhead,
                stream_type,
                asset_type,
                params,
                original_index,
            });
        }
    }

    media_events
}

/// The request's query parameters as a string map, last-write-wins.
fn query_map(event: &NetworkEvent) -> BTreeMap<String, String> {
    event.query_params.iter().cloned().collect()
}

/// Form-encoded parameters from `postData`, whether structured (HAR
/// `params` list) or raw `application/x-www-form-urlencoded` text.
fn form_params(event: &NetworkEvent) -> BTreeMap<String, String> {
    let Some(post) = &event.post_data else { return BTreeMap::new() };

    if !post.params.is_empty() {
        return post.params.iter().map(|p| (p.name.clone(), p.value.clone())).collect();
    }

    let is_form_encoded =
        post.mime_type.as_deref().is_some_and(|m| m.starts_with("application/x-www-form-urlencoded"));
    if is_form_encoded {
        if let Some(text) = &post.text {
            return url::form_urlencoded::parse(text.as_bytes())
                .into_owned()
                .collect();
        }
    }
    BTreeMap::new()
}

/// The candidate events carried by one network event's body, as
/// `(own_params, other_top_level_fields)` pairs.
///
/// When `bodyJSON` holds an `events` array, each element is one candidate:
/// its `params` object is the baseline, its other top-level fields
/// (`eventType`, `sessionId`, ...) are applied last and win on conflict.
/// Otherwise the whole body object is treated as a single candidate the same
/// way, with an empty `params` baseline.
fn body_items(event: &NetworkEvent) -> Vec<(BTreeMap<String, String>, BTreeMap<String, String>)> {
    let Some(body) = &event.body_json else { return vec![(BTreeMap::new(), BTreeMap::new())] };
    let Value::Object(obj) = body else { return vec![(BTreeMap::new(), BTreeMap::new())] };

    if let Some(Value::Array(items)) = obj.get("events") {
        return items
            .iter()
            .map(|item| {
                let Value::Object(item_obj) = item else {
                    return (BTreeMap::new(), BTreeMap::new());
                };
                split_own_params(item_obj)
            })
            .collect();
    }

    vec![split_own_params(obj)]
}

/// Split an object into its `params` sub-object (if any) and its other
/// top-level fields, both stringified.
fn split_own_params(
    obj: &serde_json::Map<String, Value>,
) -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let own_params = match obj.get("params") {
        Some(Value::Object(p)) => value_map_to_strings(p),
        _ => BTreeMap::new(),
    };
    let top_level = obj
        .iter()
        .filter(|(k, _)| k.as_str() != "params")
        .map(|(k, v)| (k.clone(), value_to_string(v)))
        .collect();
    (own_params, top_level)
}

fn value_map_to_strings(obj: &serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    obj.iter().map(|(k, v)| (k.clone(), value_to_string(v))).collect()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// First non-empty value among candidate keys, legacy key checked first.
fn first_present(params: &BTreeMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| params.get(*k)).filter(|v| !v.is_empty()).cloned()
}

/// Derive a session id from a `Location` header URL's final path segment.
fn session_id_from_location(location: &str) -> Option<String> {
    let trimmed = location.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() { None } else { Some(segment.to_string()) }
}
