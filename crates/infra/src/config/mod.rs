//! Engine configuration: cadence overrides, anomaly templates, parameter
//! rules, and the HTTP listen address.

pub mod loader;

use harmony_domain::{AnomalyConfig, CadenceConfig, ParamRule};
use serde::{Deserialize, Serialize};

pub use loader::{load, load_from_file};

/// Everything the engine and its HTTP surface need for one process
/// lifetime, assembled by [`loader::load`] from environment variables and
/// an optional `harmony.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    #[serde(default)]
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub anomaly: AnomalyConfig,
    #[serde(default)]
    pub rules: Vec<ParamRule>,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cadence: CadenceConfig::default(),
            anomaly: AnomalyConfig::default(),
            rules: Vec::new(),
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}
