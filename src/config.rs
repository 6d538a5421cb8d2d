//! Configuration for the metrics exposition endpoint.
//!
//! Handles loading configuration from YAML files. The extension hook is
//! code-level configuration on [`Subscriber`](crate::Subscriber) and
//! does not appear here.

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::path::Path;

use crate::error::{ConfigError, ReadFileSnafu, YamlParseSnafu};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metrics exposition configuration (optional, enabled by default).
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Metrics configuration for the Prometheus endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether the exposition server is started (default: true).
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    /// Address to bind the metrics HTTP server (default: "0.0.0.0:9090").
    #[serde(default = "default_metrics_address")]
    pub address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            address: default_metrics_address(),
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_address() -> String {
    "0.0.0.0:9090".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref()).context(ReadFileSnafu)?;
        serde_yaml::from_str(&raw).context(YamlParseSnafu)
    }
}
