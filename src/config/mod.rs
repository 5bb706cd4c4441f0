//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! gateway file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig
//!     → source.rs (LayeredSource: env, then [properties], then properties_file)
//!     → LimitConfiguration::from_source (parse limits, once)
//!     → shared via Arc to the resolver
//! ```
//!
//! # Design Decisions
//! - Limits are read once at startup; changes require a restart
//! - Absent limit properties default to 0 (unlimited)
//! - Property parsing is separate from file parsing so any source can be used

pub mod error;
pub mod loader;
pub mod properties;
pub mod schema;
pub mod source;
pub mod validation;

pub use error::{ConfigurationError, SourceError};
pub use loader::{load_config, LoadError};
pub use schema::{GatewayConfig, LogFormat, ObservabilityConfig, SourceConfig};
pub use source::{ConfigurationSource, EnvSource, LayeredSource, MapSource, TomlSource};
