//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of the gateway file (serde handles syntactic)
//! - Parse raw limit properties into connection counts
//!
//! # Design Decisions
//! - `validate_config` returns all validation errors, not just the first
//! - Property parsing fails on the first bad value; startup aborts anyway
//! - Validation is a pure function of its input

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::error::ConfigurationError;
use crate::config::schema::GatewayConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the gateway file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level {0:?}")]
    LogLevel(String),

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("property prefix {0:?} must not contain whitespace")]
    Prefix(String),

    #[error("property `{0}` must be a string, integer or boolean")]
    PropertyType(String),
}

/// Check the gateway file for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.trim();
    // Anything with a directive separator is left to EnvFilter.
    if !level.contains('=') && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    for prefix in [&config.source.prefix, &config.source.env_prefix]
        .into_iter()
        .flatten()
    {
        if prefix.chars().any(char::is_whitespace) {
            errors.push(ValidationError::Prefix(prefix.clone()));
        }
    }

    for (key, value) in &config.properties {
        if !matches!(
            value,
            toml::Value::String(_) | toml::Value::Integer(_) | toml::Value::Boolean(_)
        ) {
            errors.push(ValidationError::PropertyType(key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse a connection-count property. `0` is a valid value meaning unlimited.
pub fn parse_limit(key: &str, raw: &str) -> Result<u32, ConfigurationError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| ConfigurationError::NotNumeric {
        key: key.to_string(),
        value: raw.to_string(),
    })?;

    if value < 0 {
        return Err(ConfigurationError::Negative {
            key: key.to_string(),
            value,
        });
    }

    u32::try_from(value).map_err(|_| ConfigurationError::OutOfRange {
        key: key.to_string(),
        value,
        max: u32::MAX,
    })
}

/// Parse a boolean property (`true` / `false`, case-insensitive).
pub fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigurationError> {
    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigurationError::NotBoolean {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
