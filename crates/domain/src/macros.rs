//! Macro for implementing `Display` and `FromStr` for simple string enums.
//!
//! Eliminates boilerplate for the small closed enums used throughout the
//! fingerprinting and normalization layers (`Vendor`, `Transport`, `Profile`,
//! `Platform`, `StreamType`, `AssetType`). Each generates a case-insensitive
//! `FromStr` and a lowercase `Display`.
//!
//! # Example
//!
//! ```rust
//! use harmony_domain::impl_enum_display;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Sample {
//!     First,
//!     Second,
//! }
//!
//! impl_enum_display!(Sample {
//!     First => "first",
//!     Second => "second",
//! });
//! ```
#[macro_export]
macro_rules! impl_enum_display {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    other => Err(format!("invalid {}: {}", stringify!($enum_name), other)),
                }
            }
        }
    };
}
