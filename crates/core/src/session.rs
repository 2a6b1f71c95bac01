//! Partitions [`MediaEvent`]s into [`Session`]s, sorted by device timestamp.

use std::collections::BTreeMap;

use harmony_domain::{MediaEvent, Session};

/// Group events by `session_id` and sort each group by `(ts_device,
/// original_index)`.
///
/// The `original_index` tiebreaker makes the sort stable even though
/// [`i64::cmp`] alone can't distinguish equal timestamps, satisfying the
/// "ties keep original input order" invariant.
///
/// Sessions are returned in the order their `session_id` was first seen.
#[must_use]
pub fn group_into_sessions(events: Vec<MediaEvent>) -> Vec<Session> {
    let mut order = Vec::new();
    let mut groups: BTreeMap<String, Vec<MediaEvent>> = BTreeMap::new();

    for event in events {
        if !groups.contains_key(&event.session_id) {
            order.push(event.session_id.clone());
        }
        groups.entry(event.session_id.clone()).or_default().push(event);
    }

    order
        .into_iter()
        .map(|session_id| {
            let mut group = groups.remove(&session_id).unwrap_or_default();
            group.sort_by_key(|e| (e.ts_device, e.original_index));
            Session::new(session_id, group)
        })
        .collect()
}
