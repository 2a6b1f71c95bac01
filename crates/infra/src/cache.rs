//! The process-local report cache.
//!
//! Insert-once, read-many, scoped to process lifetime. Matches the
//! "Shared resource policy" design: a single writer per id, many readers,
//! no persistence, no reliance on insertion order.

use dashmap::DashMap;
use harmony_domain::SessionReport;
use uuid::Uuid;

/// A concurrent map from generated report id to the [`SessionReport`] it
/// names.
#[derive(Debug, Default)]
pub struct ReportCache {
    reports: DashMap<String, SessionReport>,
}

impl ReportCache {
    #[must_use]
    pub fn new() -> Self {
        Self { reports: DashMap::new() }
    }

    /// Store `report` under a freshly generated id and return that id.
    pub fn insert(&self, report: SessionReport) -> String {
        let id = Uuid::new_v4().to_string();
        self.reports.insert(id.clone(), report);
        id
    }

    /// Look up a previously stored report by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<SessionReport> {
        self.reports.get(id).map(|entry| entry.value().clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
