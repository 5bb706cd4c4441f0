//! Configuration schema definitions.
//!
//! This module defines the structure of the gateway file. All types derive
//! Serde traits for deserialization from TOML.
//!
//! ```toml
//! [source]
//! prefix = "postgresql-"
//! env_prefix = "GATEWAY"
//! properties_file = "/etc/gateway/limits.toml"
//!
//! [properties]
//! postgresql-absolute-max-connections = 0
//! postgresql-default-max-connections-per-user = 1
//!
//! [observability]
//! log_level = "info"
//! log_format = "json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway limit layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// How limit properties are looked up.
    pub source: SourceConfig,

    /// Raw limit properties. Parsed by `LimitConfiguration`, not by serde.
    pub properties: toml::Table,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Property lookup settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SourceConfig {
    /// Prefix prepended to every property name (e.g. "mysql-").
    pub prefix: Option<String>,

    /// When set, environment variables with this prefix override the file.
    pub env_prefix: Option<String>,

    /// Standalone properties file, consulted after `[properties]`.
    pub properties_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// JSON lines for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (a level such as "info", or an `EnvFilter` directive).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
