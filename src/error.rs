//! Error types for workbeat using snafu.
//!
//! This module defines structured error types with context selectors for
//! configuration loading, metrics exposition, and the job-domain error
//! carried on perform-end events.

use snafu::prelude::*;

// ============ Config Errors ============

/// Errors that can occur during configuration parsing.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[snafu(display("Failed to read configuration file"))]
    ReadFile { source: std::io::Error },

    /// Failed to parse YAML configuration.
    #[snafu(display("Failed to parse YAML configuration"))]
    YamlParse { source: serde_yaml::Error },
}

// ============ Metrics Errors ============

/// Errors that can occur during metrics initialization.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum MetricsError {
    /// Failed to initialize Prometheus recorder.
    #[snafu(display("Failed to initialize Prometheus recorder"))]
    PrometheusInit {
        source: metrics_exporter_prometheus::BuildError,
    },

    /// Metrics listen address could not be parsed.
    #[snafu(display("Invalid metrics listen address: {address}"))]
    ListenAddress {
        address: String,
        source: std::net::AddrParseError,
    },
}

// ============ Job Errors ============

/// A failure raised by a job body, as reported by the host framework.
///
/// `kind` is the error's class name and becomes the `failure_reason`
/// tag on the failed-jobs counter. The error is recorded and then
/// handed back to the host unchanged; workbeat never swallows it.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
#[snafu(display("{kind}: {message}"))]
pub struct JobError {
    pub kind: String,
    pub message: String,
}

impl JobError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
