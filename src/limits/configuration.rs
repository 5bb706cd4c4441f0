//! Global and default limit values.

use serde::Serialize;

use crate::config::error::ConfigurationError;
use crate::config::properties::{
    ABSOLUTE_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS_PER_USER,
    DEFAULT_MAX_GROUP_CONNECTIONS, DEFAULT_MAX_GROUP_CONNECTIONS_PER_USER, USER_REQUIRED,
};
use crate::config::source::ConfigurationSource;
use crate::config::validation::{parse_flag, parse_limit};
use crate::limits::limit::ConnectionLimit;
use crate::limits::scope::Scope;

/// Snapshot of the five global/default limits.
///
/// Read once from a [`ConfigurationSource`] and never mutated; share it via
/// `Arc`. Every value uses `0` for unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LimitConfiguration {
    absolute_max_connections: u32,
    default_max_connections: u32,
    default_max_group_connections: u32,
    default_max_connections_per_user: u32,
    default_max_group_connections_per_user: u32,
}

impl LimitConfiguration {
    /// Build a configuration from explicit values.
    pub const fn new(
        absolute_max_connections: u32,
        default_max_connections: u32,
        default_max_group_connections: u32,
        default_max_connections_per_user: u32,
        default_max_group_connections_per_user: u32,
    ) -> Self {
        Self {
            absolute_max_connections,
            default_max_connections,
            default_max_group_connections,
            default_max_connections_per_user,
            default_max_group_connections_per_user,
        }
    }

    /// A configuration with every scope unlimited.
    pub const fn unlimited() -> Self {
        Self::new(0, 0, 0, 0, 0)
    }

    /// Read all five limits from `source`. Absent properties default to 0.
    pub fn from_source(source: &dyn ConfigurationSource) -> Result<Self, ConfigurationError> {
        let config = Self {
            absolute_max_connections: read_limit(source, ABSOLUTE_MAX_CONNECTIONS)?,
            default_max_connections: read_limit(source, DEFAULT_MAX_CONNECTIONS)?,
            default_max_group_connections: read_limit(source, DEFAULT_MAX_GROUP_CONNECTIONS)?,
            default_max_connections_per_user: read_limit(source, DEFAULT_MAX_CONNECTIONS_PER_USER)?,
            default_max_group_connections_per_user: read_limit(
                source,
                DEFAULT_MAX_GROUP_CONNECTIONS_PER_USER,
            )?,
        };

        tracing::info!(
            absolute_max_connections = config.absolute_max_connections,
            default_max_connections = config.default_max_connections,
            default_max_group_connections = config.default_max_group_connections,
            default_max_connections_per_user = config.default_max_connections_per_user,
            default_max_group_connections_per_user = config.default_max_group_connections_per_user,
            "Connection limits loaded"
        );

        Ok(config)
    }

    /// Maximum concurrent connections overall. Not overridable per entity.
    pub fn absolute_max_connections(&self) -> u32 {
        self.absolute_max_connections
    }

    /// Fallback limit for one connection.
    pub fn default_max_connections(&self) -> u32 {
        self.default_max_connections
    }

    /// Fallback limit for one connection group.
    pub fn default_max_group_connections(&self) -> u32 {
        self.default_max_group_connections
    }

    /// Fallback limit for one user on one connection.
    pub fn default_max_connections_per_user(&self) -> u32 {
        self.default_max_connections_per_user
    }

    /// Fallback limit for one user within one group.
    pub fn default_max_group_connections_per_user(&self) -> u32 {
        self.default_max_group_connections_per_user
    }

    /// The limit applied to `scope` when no override exists.
    pub fn default_for(&self, scope: Scope) -> ConnectionLimit {
        ConnectionLimit::from(match scope {
            Scope::Global => self.absolute_max_connections,
            Scope::Connection => self.default_max_connections,
            Scope::Group => self.default_max_group_connections,
            Scope::UserConnection => self.default_max_connections_per_user,
            Scope::UserGroup => self.default_max_group_connections_per_user,
        })
    }
}

fn read_limit(source: &dyn ConfigurationSource, key: &str) -> Result<u32, ConfigurationError> {
    match source.property(key)? {
        Some(raw) => parse_limit(key, &raw),
        None => Ok(0),
    }
}

/// Properties of the database-backed authentication layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseEnvironment {
    limits: LimitConfiguration,
    user_required: bool,
}

impl DatabaseEnvironment {
    pub fn from_source(source: &dyn ConfigurationSource) -> Result<Self, ConfigurationError> {
        let limits = LimitConfiguration::from_source(source)?;
        let user_required = match source.property(USER_REQUIRED)? {
            Some(raw) => parse_flag(USER_REQUIRED, &raw)?,
            None => false,
        };
        Ok(Self {
            limits,
            user_required,
        })
    }

    pub fn limits(&self) -> &LimitConfiguration {
        &self.limits
    }

    /// Whether a database account is required even when another provider has
    /// already authenticated the user.
    pub fn is_user_required(&self) -> bool {
        self.user_required
    }
}
