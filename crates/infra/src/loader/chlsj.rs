//! Charles `.chlsj` export parsing, grounded in
//! `original_source/backend/parsers/chlsj_parser.py`.
//!
//! Same entry shape as HAR, but the entries array may live at either
//! `log.entries` or a top-level `entries` key, matching Charles's export
//! variants.

use harmony_domain::{HarmonyError, NetworkEvent, Result};
use serde_json::Value;

use super::entry::network_event_from_entry;

/// Parse a Charles `.chlsj` document into [`NetworkEvent`]s.
///
/// # Errors
/// Returns [`HarmonyError::Parse`] if `contents` isn't valid JSON.
pub fn parse_chlsj(contents: &str, source_file: Option<&str>) -> Result<Vec<NetworkEvent>> {
    let data: Value = serde_json::from_str(contents)
        .map_err(|e| HarmonyError::Parse(format!("invalid .chlsj JSON: {e}")))?;

    let entries = data
        .get("log")
        .and_then(|log| log.get("entries"))
        .and_then(Value::as_array)
        .or_else(|| data.get("entries").and_then(Value::as_array))
        .cloned()
        .unwrap_or_default();

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| network_event_from_entry(entry, source_file, index))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_from_log_wrapper() {
        let chlsj = r#"{"log": {"entries": [{"request": {"url": "https://a.example/1"}, "response": {}}]}}"#;
        let events = parse_chlsj(chlsj, None).expect("valid");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn reads_entries_from_top_level_key() {
        let chlsj = r#"{"entries": [{"request": {"url": "https://a.example/1"}, "response": {}}]}"#;
        let events = parse_chlsj(chlsj, None).expect("valid");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].url, "https://a.example/1");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_chlsj("{not json", None).unwrap_err();
        assert!(matches!(err, HarmonyError::Parse(_)));
    }
}
