//! Charles `.chls` (binary) parsing via the external `charles convert` CLI,
//! grounded in `original_source/backend/parsers/chls_parser.py`.

use std::io::Write;
use std::process::Command;

use harmony_domain::{HarmonyError, NetworkEvent, Result};

use super::har::parse_har;

/// Convert a `.chls` binary session to HAR via the `charles` CLI, then parse
/// it as HAR.
///
/// # Errors
/// Returns [`HarmonyError::UnsupportedInput`] with the literal message
/// `"Charles CLI ('charles') not found"` when the CLI isn't on `PATH`, and
/// [`HarmonyError::Parse`] if the conversion subprocess fails.
pub fn parse_chls(bytes: &[u8], source_file: Option<&str>) -> Result<Vec<NetworkEvent>> {
    let charles = which_charles()
        .ok_or_else(|| HarmonyError::UnsupportedInput("Charles CLI ('charles') not found".to_string()))?;

    let mut src = tempfile::Builder::new()
        .suffix(".chls")
        .tempfile()
        .map_err(|e| HarmonyError::Parse(format!("failed to create temp file: {e}")))?;
    src.write_all(bytes).map_err(|e| HarmonyError::Parse(format!("failed to write temp file: {e}")))?;

    let dst = tempfile::Builder::new()
        .suffix(".har")
        .tempfile()
        .map_err(|e| HarmonyError::Parse(format!("failed to create temp file: {e}")))?;

    let output = Command::new(&charles)
        .arg("convert")
        .arg(src.path())
        .arg(dst.path())
        .output()
        .map_err(|e| HarmonyError::Parse(format!("failed to run charles CLI: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HarmonyError::Parse(format!("charles convert failed: {}", stderr.trim())));
    }

    let har_contents = std::fs::read_to_string(dst.path())
        .map_err(|e| HarmonyError::Parse(format!("failed to read converted HAR: {e}")))?;
    parse_har(&har_contents, source_file)
}

fn which_charles() -> Option<std::path::PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var).find_map(|dir| {
        let candidate = dir.join("charles");
        candidate.is_file().then_some(candidate)
    })
}
