//! Ambient utilities shared across Harmony crates: structured logging setup
//! and test assertion helpers.
//!
//! This crate intentionally carries none of the domain's business logic —
//! see `harmony-domain` and `harmony-core` for that.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod observability;
pub mod testing;

pub use observability::init_tracing;
