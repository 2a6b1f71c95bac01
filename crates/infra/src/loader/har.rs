//! HAR (`log.entries[]`) parsing, grounded in
//! `original_source/backend/parsers/har_parser.py`.

use harmony_domain::{HarmonyError, NetworkEvent, Result};
use serde_json::Value;

use super::entry::network_event_from_entry;

/// Parse a full HAR document's `log.entries` array into [`NetworkEvent`]s.
///
/// # Errors
/// Returns [`HarmonyError::Parse`] if `contents` isn't valid JSON.
pub fn parse_har(contents: &str, source_file: Option<&str>) -> Result<Vec<NetworkEvent>> {
    let data: Value = serde_json::from_str(contents)
        .map_err(|e| HarmonyError::Parse(format!("invalid HAR JSON: {e}")))?;

    let entries = data
        .get("log")
        .and_then(|log| log.get("entries"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| network_event_from_entry(entry, source_file, index))
        .collect())
}
