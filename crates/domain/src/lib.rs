//! # Harmony Domain
//!
//! Pure domain types and models for the Harmony media session validation
//! engine.
//!
//! This crate contains:
//! - Domain data types (`NetworkEvent`, `Fingerprint`, `MediaEvent`, `Session`,
//!   `ParamRule`, `SessionReport`)
//! - Domain error types and `Result` definition
//! - Configuration structures consumed per-invocation by the engine
//!
//! ## Architecture
//! - No dependencies on other Harmony crates
//! - Only external (serde-adjacent) dependencies allowed
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
