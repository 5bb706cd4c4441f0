//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the gateway file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate gateway configuration text.
pub fn parse_config(content: &str) -> Result<GatewayConfig, LoadError> {
    let config: GatewayConfig = toml::from_str(content)?;

    validate_config(&config).map_err(LoadError::Validation)?;

    Ok(config)
}
