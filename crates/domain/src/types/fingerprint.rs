//! Vendor/transport/profile/platform classification produced by the
//! Fingerprinter.

use serde::{Deserialize, Serialize};

use crate::impl_enum_display;

/// Analytics ecosystem that produced a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Adobe,
    Ga4,
}

impl_enum_display!(Vendor {
    Adobe => "adobe",
    Ga4 => "ga4",
});

/// Wire transport/protocol family for a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Heartbeat,
    Edge,
    AaClassic,
    Measurement,
}

impl_enum_display!(Transport {
    Heartbeat => "heartbeat",
    Edge => "edge",
    AaClassic => "aa_classic",
    Measurement => "measurement",
});

/// SDK/implementation profile for a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Legacy,
    Web,
}

impl_enum_display!(Profile {
    Legacy => "legacy",
    Web => "web",
});

/// Client platform inferred from the User-Agent header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Web,
    Ios,
    Android,
    Tvos,
    FireTv,
    Roku,
}

impl_enum_display!(Platform {
    Web => "web",
    Ios => "ios",
    Android => "android",
    Tvos => "tvos",
    FireTv => "fire_tv",
    Roku => "roku",
});

/// Classification result for a single [`crate::NetworkEvent`].
///
/// Any field may be `None` when the request could not be confidently
/// classified along that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub vendor: Option<Vendor>,
    pub transport: Option<Transport>,
    pub profile: Option<Profile>,
    pub platform: Option<Platform>,
}

impl Fingerprint {
    /// A fingerprint with every field unset.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }
}
