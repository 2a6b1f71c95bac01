//! Shared application state handed to every axum handler.

use std::sync::Arc;

use harmony_infra::config::EngineConfig;
use harmony_infra::ReportCache;

/// Dependencies every handler needs: the engine configuration (cadence,
/// anomaly templates, parameter rules) and the process-local report cache.
///
/// Cheap to clone — `axum` state is shared via an inner `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    config: EngineConfig,
    cache: ReportCache,
}

impl AppState {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { inner: Arc::new(Inner { config, cache: ReportCache::new() }) }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn cache(&self) -> &ReportCache {
        &self.inner.cache
    }
}
