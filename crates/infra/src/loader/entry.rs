//! Shared HAR/Charles entry → [`NetworkEvent`] projection.
//!
//! HAR and Charles `.chlsj` exports share the same per-entry shape (a
//! `request`/`response` pair plus a `startedDateTime`), so both parsers
//! delegate here.

use harmony_domain::{EventSource, NetworkEvent, PostData, PostDataParam};
use serde_json::Value;
use url::Url;

use super::decode::decode_body;

/// Build one [`NetworkEvent`] from a HAR/`.chlsj`-shaped `entry` object.
#[must_use]
pub fn network_event_from_entry(entry: &Value, source_file: Option<&str>, index: usize) -> NetworkEvent {
    let request = entry.get("request").cloned().unwrap_or(Value::Null);
    let response = entry.get("response").cloned().unwrap_or(Value::Null);

    let url = request.get("url").and_then(Value::as_str).unwrap_or_default().to_string();
    let method = request.get("method").and_then(Value::as_str).unwrap_or_default().to_string();
    let status = response.get("status").and_then(Value::as_u64).unwrap_or_default() as u16;
    let started_date_time =
        entry.get("startedDateTime").and_then(Value::as_str).unwrap_or_default().to_string();

    let request_headers = header_map(&request);
    let response_headers = header_map(&response);

    let mut query_params = query_string(&request);
    if query_params.is_empty() && !url.is_empty() {
        query_params = query_from_url(&url);
    }

    let post_data = post_data(&request);

    let mut network_event = NetworkEvent {
        url,
        method,
        status,
        started_date_time,
        request_headers,
        response_headers,
        query_params,
        post_data,
        body_json: None,
        source: EventSource { file: source_file.map(str::to_string), index },
    };

    network_event.body_json = decoded_body_json(&network_event);
    network_event
}

fn header_map(side: &Value) -> std::collections::BTreeMap<String, String> {
    side.get("headers")
        .and_then(Value::as_array)
        .map(|headers| {
            headers
                .iter()
                .filter_map(|h| {
                    let name = h.get("name").and_then(Value::as_str)?;
                    let value = h.get("value").and_then(Value::as_str)?;
                    Some((name.to_string(), value.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn query_string(request: &Value) -> Vec<(String, String)> {
    request
        .get("queryString")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .filter_map(|p| {
                    let name = p.get("name").and_then(Value::as_str)?;
                    let value = p.get("value").and_then(Value::as_str)?;
                    Some((name.to_string(), value.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn query_from_url(url: &str) -> Vec<(String, String)> {
    Url::parse(url)
        .map(|parsed| parsed.query_pairs().into_owned().collect())
        .unwrap_or_default()
}

fn post_data(request: &Value) -> Option<PostData> {
    let post = request.get("postData")?;
    let params = post
        .get("params")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .filter_map(|p| {
                    let name = p.get("name").and_then(Value::as_str)?.to_string();
                    let value = p.get("value").and_then(Value::as_str).unwrap_or_default().to_string();
                    Some(PostDataParam { name, value })
                })
                .collect()
        })
        .unwrap_or_default();
    Some(PostData {
        params,
        text: post.get("text").and_then(Value::as_str).map(str::to_string),
        mime_type: post.get("mimeType").and_then(Value::as_str).map(str::to_string),
        encoding: post.get("encoding").and_then(Value::as_str).map(str::to_string),
    })
}

/// Decode and parse `event.post_data.text` into JSON, honoring
/// `Content-Encoding` and base64 wrapping. Returns `None` when there's no
/// body, or when the decoded text isn't valid JSON.
fn decoded_body_json(event: &NetworkEvent) -> Option<Value> {
    let post = event.post_data.as_ref()?;
    let text = post.text.as_ref()?;

    let content_encoding = event.request_header("content-encoding");
    let is_base64 = post.encoding.as_deref() == Some("base64");
    let decoded = decode_body(text, content_encoding, is_base64);

    serde_json::from_str(&decoded).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn projects_basic_entry_fields() {
        let entry = json!({
            "startedDateTime": "2024-01-01T00:00:00Z",
            "request": {
                "url": "https://example.com/b/ss/mysite?s:event:type=play",
                "method": "GET",
                "headers": [{"name": "User-Agent", "value": "test"}],
                "queryString": [{"name": "s:event:type", "value": "play"}],
            },
            "response": {
                "status": 200,
                "headers": [],
            },
        });
        let event = network_event_from_entry(&entry, Some("capture.har"), 0);
        assert_eq!(event.url, "https://example.com/b/ss/mysite?s:event:type=play");
        assert_eq!(event.status, 200);
        assert_eq!(event.query_param("s:event:type"), Some("play"));
        assert_eq!(event.source.file.as_deref(), Some("capture.har"));
        assert_eq!(event.source.index, 0);
    }

    #[test]
    fn falls_back_to_url_query_when_query_string_array_is_absent() {
        let entry = json!({
            "request": {"url": "https://example.com/beacon?sid=abc&ts=100"},
            "response": {},
        });
        let event = network_event_from_entry(&entry, None, 0);
        assert_eq!(event.query_param("sid"), Some("abc"));
        assert_eq!(event.query_param("ts"), Some("100"));
    }

    #[test]
    fn parses_plain_json_body_text() {
        let entry = json!({
            "request": {
                "url": "https://example.com/events",
                "postData": {"text": "{\"eventType\":\"play\"}", "mimeType": "application/json"},
            },
            "response": {},
        });
        let event = network_event_from_entry(&entry, None, 0);
        assert_eq!(event.body_json.unwrap()["eventType"], "play");
    }

    #[test]
    fn non_json_body_leaves_body_json_none() {
        let entry = json!({
            "request": {
                "url": "https://example.com/events",
                "postData": {"text": "not json at all"},
            },
            "response": {},
        });
        let event = network_event_from_entry(&entry, None, 0);
        assert!(event.body_json.is_none());
    }
}
