// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the learning-companion API. Fixed per deployment;
    /// there is no runtime switch beyond editing this file.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for the startup liveness probe, in seconds. Chat requests
    /// carry no timeout at all.
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_health_timeout_secs() -> u64 {
    3
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_timeout_secs: default_health_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Topic used for the problem quick action when no topic has come up yet.
    #[serde(default = "default_topic")]
    pub default_topic: String,
    /// Problem type for quick-action generation.
    #[serde(default = "default_problem_type")]
    pub problem_type: String,
    /// Difficulty for quick-action generation.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_topic() -> String {
    "programming".into()
}

fn default_problem_type() -> String {
    "practical".into()
}

fn default_difficulty() -> String {
    "medium".into()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_topic: default_topic(),
            problem_type: default_problem_type(),
            difficulty: default_difficulty(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
