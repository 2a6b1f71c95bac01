//! # Harmony Infra
//!
//! The external collaborators named in the engine design but kept out of
//! `harmony-core`: the Capture Loader (HAR / Charles `.chlsj` / `.chls`
//! parsing), the process-local report cache, and configuration loading.
//!
//! ## Architecture
//! - Depends on `harmony-domain` and `harmony-core`
//! - All the I/O lives here: file reads, the `charles` CLI subprocess, the
//!   concurrent report cache
//! - `harmony-core` remains a pure, deterministic transformation

pub mod cache;
pub mod config;
pub mod loader;

pub use cache::ReportCache;
pub use config::EngineConfig;
pub use loader::{load_network_events, parse_network_file};
