//! Configuration for progresswalk

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::subscriber::{DEFAULT_ALMOST_DONE_THRESHOLD, DEFAULT_HALFWAY_BAND};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level used when --log-level is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Walk backward when the REVERSE argument is omitted
    #[serde(default)]
    pub reverse: bool,

    /// Tens digit the halfway observer reacts to
    #[serde(default = "default_halfway_band")]
    pub halfway_band: u8,

    /// Percentage at which the almost-done observer starts firing
    #[serde(default = "default_almost_done_threshold")]
    pub almost_done_threshold: u8,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_halfway_band() -> u8 {
    DEFAULT_HALFWAY_BAND
}

fn default_almost_done_threshold() -> u8 {
    DEFAULT_ALMOST_DONE_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            reverse: false,
            halfway_band: default_halfway_band(),
            almost_done_threshold: default_almost_done_threshold(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!(?config_path, "Config::load: explicit path");
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("progresswalk").join("config.yml")),
            Some(PathBuf::from("progresswalk.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                debug!(?path, "Config::load: found default config");
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }
}
