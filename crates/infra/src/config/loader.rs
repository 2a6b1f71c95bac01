//! Configuration loader.
//!
//! ## Loading strategy
//! 1. Start from [`EngineConfig::default`].
//! 2. Merge in a `harmony.toml` file if one is found (cadence, anomaly
//!    templates, and parameter rules are structured and multi-valued, so
//!    they only ever come from the file).
//! 3. Apply environment variable overrides for the scalar cadence/listen
//!    settings, which win over both the file and the defaults.
//!
//! ## Environment variables
//! - `HARMONY_MAIN_CADENCE_SECS`
//! - `HARMONY_AD_CADENCE_SECS`
//! - `HARMONY_TOLERANCE_SECS`
//! - `HARMONY_MAX_SIGNATURE_DISTANCE`
//! - `HARMONY_LISTEN_ADDR`
//!
//! ## File locations
//! The loader probes, in order: `./harmony.toml`, `../harmony.toml`,
//! `../../harmony.toml`, and the same three relative to the running
//! executable.

use std::path::{Path, PathBuf};

use harmony_domain::{HarmonyError, Result};

use super::EngineConfig;

/// Load configuration with the file-then-env fallback strategy described in
/// the module documentation.
///
/// # Errors
/// Returns [`HarmonyError::Config`] if a `harmony.toml` file was found but
/// could not be parsed, or if an environment override is present but not a
/// valid number.
pub fn load() -> Result<EngineConfig> {
    let mut config = match probe_config_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading engine configuration from file");
            load_from_file(&path)?
        }
        None => {
            tracing::debug!("no harmony.toml found, starting from built-in defaults");
            EngineConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse an [`EngineConfig`] from a specific TOML file.
///
/// # Errors
/// Returns [`HarmonyError::Config`] if the file cannot be read or does not
/// parse as valid TOML matching [`EngineConfig`]'s shape.
pub fn load_from_file(path: &Path) -> Result<EngineConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| HarmonyError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| HarmonyError::Config(format!("invalid harmony.toml: {e}")))
}

fn apply_env_overrides(config: &mut EngineConfig) -> Result<()> {
    if let Some(v) = env_f64("HARMONY_MAIN_CADENCE_SECS")? {
        config.cadence.main_cadence_sec = v;
    }
    if let Some(v) = env_f64("HARMONY_AD_CADENCE_SECS")? {
        config.cadence.ad_cadence_sec = v;
    }
    if let Some(v) = env_f64("HARMONY_TOLERANCE_SECS")? {
        config.cadence.tolerance_sec = v;
    }
    if let Some(v) = env_usize("HARMONY_MAX_SIGNATURE_DISTANCE")? {
        config.anomaly.max_distance = v;
    }
    if let Ok(addr) = std::env::var("HARMONY_LISTEN_ADDR") {
        config.listen_addr = addr;
    }
    Ok(())
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|e| HarmonyError::Config(format!("invalid {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|e| HarmonyError::Config(format!("invalid {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Probe the standard locations for a `harmony.toml` file, current
/// directory first.
#[must_use]
pub fn probe_config_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("harmony.toml"));
        candidates.push(cwd.join("../harmony.toml"));
        candidates.push(cwd.join("../../harmony.toml"));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("harmony.toml"));
            candidates.push(exe_dir.join("../harmony.toml"));
            candidates.push(exe_dir.join("../../harmony.toml"));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        let config = EngineConfig::default();
        assert_eq!(config.cadence.main_cadence_sec, 10.0);
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn loads_cadence_and_rules_from_toml_file() {
        let toml_content = r#"
[cadence]
main_cadence_sec = 8.0
ad_cadence_sec = 1.5
tolerance_sec = 1.0

[anomaly]
templates = ["SPpE"]
max_distance = 1

[[rules]]
on = "ping"
require = ["playhead"]
"#;
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(toml_content.as_bytes()).expect("write");

        let config = load_from_file(file.path()).expect("parses");
        assert_eq!(config.cadence.main_cadence_sec, 8.0);
        assert_eq!(config.anomaly.templates, vec!["SPpE".to_string()]);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].on, "ping");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"not valid = [").expect("write");
        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, HarmonyError::Config(_)));
    }

    #[test]
    fn env_overrides_win_over_file_and_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var("HARMONY_MAIN_CADENCE_SECS", "5.0");
        std::env::set_var("HARMONY_MAX_SIGNATURE_DISTANCE", "3");

        let mut config = EngineConfig::default();
        apply_env_overrides(&mut config).expect("valid overrides");
        assert_eq!(config.cadence.main_cadence_sec, 5.0);
        assert_eq!(config.anomaly.max_distance, 3);

        std::env::remove_var("HARMONY_MAIN_CADENCE_SECS");
        std::env::remove_var("HARMONY_MAX_SIGNATURE_DISTANCE");
    }

    #[test]
    fn invalid_env_value_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var("HARMONY_TOLERANCE_SECS", "not-a-number");
        let mut config = EngineConfig::default();
        let err = apply_env_overrides(&mut config).unwrap_err();
        assert!(matches!(err, HarmonyError::Config(_)));
        std::env::remove_var("HARMONY_TOLERANCE_SECS");
    }
}
