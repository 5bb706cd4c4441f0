//! Configuration error types.

use thiserror::Error;

/// Errors raised by a [`ConfigurationSource`](crate::config::source::ConfigurationSource)
/// while looking up a property.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing store was read but could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The source cannot answer for some other reason.
    #[error("configuration source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while building the limit configuration at startup.
///
/// These are fatal: the gateway must not start admitting connections with a
/// configuration it could not read.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configuration source could not be reached.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The property is present but is not an integer.
    #[error("property `{key}` is not an integer: {value:?}")]
    NotNumeric { key: String, value: String },

    /// The property is an integer below zero.
    #[error("property `{key}` must not be negative, got {value}")]
    Negative { key: String, value: i64 },

    /// The property does not fit a connection count.
    #[error("property `{key}` exceeds the maximum of {max}, got {value}")]
    OutOfRange { key: String, value: i64, max: u32 },

    /// The property is present but is not `true` or `false`.
    #[error("property `{key}` is not a boolean: {value:?}")]
    NotBoolean { key: String, value: String },
}
