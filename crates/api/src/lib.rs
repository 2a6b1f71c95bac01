//! # Harmony API
//!
//! The thin HTTP service layer: wires the Capture Loader, the media
//! session validation engine, and the process-local report cache into an
//! axum router.
//!
//! This crate contains:
//! - The application router (`build_router`) and its handlers
//! - Error-to-status-code classification at the edge
//! - The `main` entry point, which owns tracing initialization
//!
//! ## Architecture
//! - Depends on `harmony-infra` (for the loader/cache/config) and
//!   `harmony-core` (for the analysis entry points)
//! - All classification of [`harmony_domain::HarmonyError`] into HTTP
//!   responses lives here, never inside the core

pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
