//! Sequence signature generation and edit-distance anomaly detection.

use harmony_domain::constants::{SYMBOL_TABLE, UNKNOWN_SYMBOL};
use harmony_domain::{AnomalyConfig, MediaEvent};

/// The single-character symbol for an event type, or [`UNKNOWN_SYMBOL`] when
/// the type isn't in [`SYMBOL_TABLE`].
#[must_use]
pub fn canonical_symbol(event_type: &str) -> char {
    SYMBOL_TABLE
        .iter()
        .find(|(t, _)| *t == event_type)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(UNKNOWN_SYMBOL)
}

/// Collapse a session's events into a compact signature string, one symbol
/// per event.
#[must_use]
pub fn sequence_signature(events: &[MediaEvent]) -> String {
    events.iter().map(|e| canonical_symbol(&e.event_type)).collect()
}

/// Textbook Levenshtein edit distance between two strings, operating on
/// `char`s (the signature alphabet is single-byte ASCII, but this stays
/// correct regardless).
fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Minimal edit distance from `signature` to any of `templates`.
///
/// When `templates` is empty, the distance is defined as `signature.len()` —
/// there is nothing closer to compare against than the empty string.
#[must_use]
pub fn sequence_distance(signature: &str, templates: &[String]) -> usize {
    templates
        .iter()
        .map(|t| levenshtein(signature, t))
        .min()
        .unwrap_or(signature.chars().count())
}

/// Detect whether a session's event sequence deviates from known-good
/// `templates`, given `config.max_distance`.
///
/// Returns `(is_anomalous, distance, signature)`.
#[must_use]
pub fn detect_sequence_anomaly(events: &[MediaEvent], config: &AnomalyConfig) -> (bool, usize, String) {
    let signature = sequence_signature(events);
    let distance = sequence_distance(&signature, &config.templates);
    (distance > config.max_distance, distance, signature)
}
