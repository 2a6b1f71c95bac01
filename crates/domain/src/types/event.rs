//! Raw-ish HTTP beacon, as handed to the core by the Capture Loader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a [`NetworkEvent`] was read from, for traceability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    /// Originating file name, if known.
    pub file: Option<String>,
    /// Zero-based index of this entry within the originating file.
    pub index: usize,
}

/// A single named form-encoded parameter, as carried by HAR's
/// `postData.params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDataParam {
    pub name: String,
    pub value: String,
}

/// Request body metadata, mirroring HAR's `postData` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub params: Vec<PostDataParam>,
    pub text: Option<String>,
    pub mime_type: Option<String>,
    /// `Some("base64")` when `text` is base64-encoded.
    pub encoding: Option<String>,
}

/// A single captured HTTP request/response pair.
///
/// Produced once by the Capture Loader and immutable thereafter. Header
/// maps are case-preserving (not case-normalized) as captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEvent {
    pub url: String,
    pub method: String,
    pub status: u16,
    /// ISO-8601 wall-clock timestamp; advisory only, never cross-validated.
    pub started_date_time: String,
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub response_headers: BTreeMap<String, String>,
    /// Ordered query parameters as they appeared on the URL.
    #[serde(default)]
    pub query_params: Vec<(String, String)>,
    pub post_data: Option<PostData>,
    /// Parsed JSON body, when the (possibly decoded) body text was valid
    /// JSON.
    pub body_json: Option<serde_json::Value>,
    #[serde(default)]
    pub source: EventSource,
}

impl NetworkEvent {
    /// Look up a request header case-insensitively.
    #[must_use]
    pub fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a response header case-insensitively.
    #[must_use]
    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter by name (first match).
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}
