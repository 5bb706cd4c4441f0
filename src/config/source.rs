//! Property sources backing the limit configuration.
//!
//! # Responsibilities
//! - Abstract where limit properties live (file, environment, memory)
//! - Apply a backend prefix to property names
//! - Layer sources so the environment can override the file
//!
//! # Design Decisions
//! - Sources return raw strings; parsing belongs to `validation.rs`
//! - An absent property is `Ok(None)`, never an error
//! - Sources are queried once at startup and never again

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::error::{ConfigurationError, SourceError};
use crate::config::schema::GatewayConfig;

/// A read-only key/value store of configuration properties.
pub trait ConfigurationSource: Send + Sync {
    /// Return the raw value of `name`, or `None` when it is not set.
    fn property(&self, name: &str) -> Result<Option<String>, SourceError>;
}

/// Properties held in a TOML table, e.g. the `[properties]` section of the
/// gateway file.
#[derive(Debug, Clone, Default)]
pub struct TomlSource {
    table: toml::Table,
    prefix: String,
}

impl TomlSource {
    /// Wrap an already parsed table.
    pub fn new(table: toml::Table) -> Self {
        Self {
            table,
            prefix: String::new(),
        }
    }

    /// Read a standalone properties file.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|source| SourceError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(table))
    }

    /// Prepend `prefix` to every looked-up name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl ConfigurationSource for TomlSource {
    fn property(&self, name: &str) -> Result<Option<String>, SourceError> {
        let key = format!("{}{}", self.prefix, name);
        Ok(self.table.get(&key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }
}

/// Properties read from environment variables.
///
/// `absolute-max-connections` with prefix `GATEWAY` is looked up as
/// `GATEWAY_ABSOLUTE_MAX_CONNECTIONS`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The environment variable name for a property.
    pub fn variable_name(&self, name: &str) -> String {
        let suffix = name.replace('-', "_").to_uppercase();
        if self.prefix.is_empty() {
            suffix
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl ConfigurationSource for EnvSource {
    fn property(&self, name: &str) -> Result<Option<String>, SourceError> {
        let var = self.variable_name(name);
        match std::env::var(&var) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(SourceError::Unavailable(format!(
                "environment variable {var} is not valid unicode"
            ))),
        }
    }
}

/// Properties held in memory.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigurationSource for MapSource {
    fn property(&self, name: &str) -> Result<Option<String>, SourceError> {
        Ok(self.values.get(name).cloned())
    }
}

/// An ordered stack of sources. The first source holding a property wins.
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn ConfigurationSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer below the existing ones.
    pub fn push(mut self, source: impl ConfigurationSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Build the source stack described by the gateway file, highest first:
    /// environment variables (when an env prefix is set), the `[properties]`
    /// table, then the standalone properties file (when one is named).
    ///
    /// Fails if the properties file cannot be read or parsed.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigurationError> {
        let prefix = config.source.prefix.clone().unwrap_or_default();

        let mut layered = Self::new();
        if let Some(env_prefix) = &config.source.env_prefix {
            layered = layered.push(EnvSource::new(env_prefix.clone()));
        }
        layered = layered.push(TomlSource::new(config.properties.clone()).with_prefix(prefix.clone()));
        if let Some(path) = &config.source.properties_file {
            layered = layered.push(TomlSource::from_path(path)?.with_prefix(prefix));
        }
        Ok(layered)
    }
}

impl ConfigurationSource for LayeredSource {
    fn property(&self, name: &str) -> Result<Option<String>, SourceError> {
        for layer in &self.layers {
            if let Some(value) = layer.property(name)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
