//! Structured logging setup, shared by every Harmony binary.
//!
//! There is exactly one place tracing is initialized: the API binary's
//! `main`. This module exists so that initialization stays identical across
//! binaries and is never duplicated ad hoc.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber reading its filter from `RUST_LOG`
/// (falling back to `info` when unset).
///
/// Safe to call more than once; subsequent calls are no-ops (the underlying
/// `set_global_default` failure is swallowed intentionally).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
