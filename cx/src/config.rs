//! Configuration for computecontext

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::algorithm::AlgorithmKind;

/// Left operand used when none is given on the command line
pub const DEFAULT_A: i64 = 23;

/// Right operand used when none is given on the command line
pub const DEFAULT_B: i64 = 34;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level used when --log-level is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_a")]
    pub a: i64,

    #[serde(default = "default_b")]
    pub b: i64,

    /// Algorithms to demonstrate, in order; the first is installed at construction
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<AlgorithmKind>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_a() -> i64 {
    DEFAULT_A
}

fn default_b() -> i64 {
    DEFAULT_B
}

fn default_algorithms() -> Vec<AlgorithmKind> {
    vec![AlgorithmKind::Sum, AlgorithmKind::Concat]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            a: default_a(),
            b: default_b(),
            algorithms: default_algorithms(),
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
            dirs::config_dir().map(|p| p.join("computecontext").join("config.yml")),
            Some(PathBuf::from("computecontext.yml")),
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
