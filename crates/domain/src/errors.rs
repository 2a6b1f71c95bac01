//! Error types used throughout the engine and its collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Harmony.
///
/// Variants map to the error taxonomy described in the engine design: loader
/// failures are surfaced via [`HarmonyError::UnsupportedInput`] /
/// [`HarmonyError::Parse`], configuration problems via
/// [`HarmonyError::Config`], and cache misses via [`HarmonyError::NotFound`].
/// Record-level soft errors (bad timestamps, missing session ids) never
/// reach this type: the normalizer coerces or drops them silently.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HarmonyError {
    /// Configuration could not be loaded or was invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The capture file's format could not be determined or is unsupported.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// The capture file was recognized but failed to parse.
    #[error("parse error: {0}")]
    Parse(String),

    /// A requested resource (e.g. a cached report) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An invariant was violated that should never happen in practice.
    #[error("internal error: {0}")]
    Internal(String),
}

/// `Result` alias used throughout the Harmony workspace.
pub type Result<T> = std::result::Result<T, HarmonyError>;
