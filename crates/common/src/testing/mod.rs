//! Testing utilities shared across Harmony crates.
//!
//! - **[`assertions`]**: floating-point and ordering assertions used by the
//!   core engine's property tests.

pub mod assertions;

pub use assertions::{assert_approx_eq, assert_sorted};
