//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_timeout() -> u64 {
    30
}

fn default_api_url() -> String {
    "http://localhost:5678".to_string()
}

/// Client configuration, normally loaded from a YAML file deployed next to
/// the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the remote bill store
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout for store calls, in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
