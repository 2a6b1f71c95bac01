//! Domain types for the media session validation engine.

pub mod event;
pub mod fingerprint;
pub mod media;
pub mod report;
pub mod rules;
pub mod session;

pub use event::{EventSource, NetworkEvent, PostData, PostDataParam};
pub use fingerprint::{Fingerprint, Platform, Profile, Transport, Vendor};
pub use media::{AssetType, MediaEvent, StreamType};
pub use report::{Ga4VideoReport, Metrics, SessionReport, Violations};
pub use rules::ParamRule;
pub use session::Session;
