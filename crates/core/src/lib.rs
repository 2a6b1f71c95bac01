//! # Harmony Core
//!
//! The media session validation engine: pure business logic, no I/O.
//!
//! This crate contains:
//! - Fingerprinting of raw network events by analytics vendor/transport
//! - Normalization of Heartbeat beacons into [`harmony_domain::MediaEvent`]
//! - The event-ordering state machine, ping cadence timing validator,
//!   parameter rule validator, metrics aggregator, and sequence-signature
//!   anomaly detector
//! - The `analyze_session`/`analyze_sessions` orchestration entry points
//!
//! ## Architecture Principles
//! - Only depends on `harmony-domain`
//! - No database, HTTP, or platform code
//! - Every public function is a pure, deterministic transformation

pub mod fingerprint;
pub mod ga4_video;
pub mod metrics;
pub mod normalize;
pub mod ordering;
pub mod params;
pub mod service;
pub mod session;
pub mod signature;
pub mod timing;

pub use fingerprint::fingerprint_event;
pub use ga4_video::analyze_video_events;
pub use metrics::compute_basic_metrics;
pub use normalize::network_events_to_media_events;
pub use ordering::validate_event_order;
pub use params::validate_param_rules;
pub use service::{analyze_network_log, analyze_session, analyze_sessions};
pub use session::group_into_sessions;
pub use signature::{detect_sequence_anomaly, sequence_distance, sequence_signature};
pub use timing::{compute_ping_integrity, validate_ping_cadence};
