//! The Capture Loader: turns a HAR / Charles `.chlsj` / `.chls` file into
//! the `NetworkEvent[]` the core engine consumes.
//!
//! Out of the core's scope by design (§1 of the engine design names this a
//! thin external collaborator); implemented here so the workspace runs
//! end-to-end via the HTTP surface.

mod chls;
mod chlsj;
mod decode;
mod entry;
mod har;

use std::path::Path;

use harmony_domain::{HarmonyError, NetworkEvent, Result};

pub use self::chls::parse_chls;
pub use self::chlsj::parse_chlsj;
pub use self::har::parse_har;

/// Parse a captured network log given its raw bytes and a filename used for
/// extension-based format detection.
///
/// Falls back to content sniffing when the extension is missing or
/// unrecognized: a JSON-looking prefix is treated as HAR/`.chlsj`
/// (`log.entries` then a top-level `entries` array), and anything else is
/// treated as a binary `.chls` session.
///
/// # Errors
/// - [`HarmonyError::UnsupportedInput`] if the Charles CLI is required but
///   absent.
/// - [`HarmonyError::Parse`] if the detected format doesn't parse.
pub fn parse_network_file(bytes: &[u8], filename: &str) -> Result<Vec<NetworkEvent>> {
    let source_file = Some(filename);

    match detect_format(filename, bytes) {
        Format::Har => {
            let text = body_text(bytes)?;
            parse_har(&text, source_file)
        }
        Format::Chlsj => {
            let text = body_text(bytes)?;
            parse_chlsj(&text, source_file)
        }
        Format::Chls => parse_chls(bytes, source_file),
    }
}

/// Load and parse a capture file directly from disk.
///
/// # Errors
/// [`HarmonyError::UnsupportedInput`] if the file cannot be read, plus the
/// error cases of [`parse_network_file`].
pub fn load_network_events(path: &Path) -> Result<Vec<NetworkEvent>> {
    let bytes = std::fs::read(path)
        .map_err(|e| HarmonyError::UnsupportedInput(format!("failed to read {}: {e}", path.display())))?;
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    parse_network_file(&bytes, filename)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Har,
    Chlsj,
    Chls,
}

fn detect_format(filename: &str, bytes: &[u8]) -> Format {
    let extension = Path::new(filename).extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "har" => Format::Har,
        "chlsj" => Format::Chlsj,
        "chls" => Format::Chls,
        _ => sniff_format(bytes),
    }
}

fn sniff_format(bytes: &[u8]) -> Format {
    let looks_like_json =
        bytes.iter().find(|b| !b.is_ascii_whitespace()).is_some_and(|b| *b == b'{' || *b == b'[');
    if looks_like_json {
        Format::Chlsj
    } else {
        Format::Chls
    }
}

fn body_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| HarmonyError::Parse(format!("capture file is not valid UTF-8: {e}")))
}
