//! Parameter presence rules evaluated against normalized events.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A rule of the form "on events of type `on`, parameters `require` must be
/// present and non-empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRule {
    /// Event type this rule applies to, e.g. `"ping"`.
    pub on: String,
    /// Parameter names that must be present (and non-empty) on matching
    /// events.
    pub require: BTreeSet<String>,
}

impl ParamRule {
    #[must_use]
    pub fn new(on: impl Into<String>, require: impl IntoIterator<Item = String>) -> Self {
        Self { on: on.into(), require: require.into_iter().collect() }
    }
}
