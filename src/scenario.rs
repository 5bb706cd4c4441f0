//! Offline admission scenarios.
//!
//! A scenario file describes one connection attempt, the live counts seen
//! for it and any per-entity overrides, so a limit configuration can be
//! checked without a running gateway:
//!
//! ```toml
//! [request.target]
//! connection = "rdp-1"
//! group = "office"
//! user = "alice"
//!
//! [request.counts]
//! global = 12
//! user_connection = 1
//!
//! [[overrides]]
//! scope = "user_connection"
//! user = "alice"
//! connection = "rdp-1"
//! limit = 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::admission::request::AdmissionRequest;
use crate::limits::scope::{ConnectionId, GroupId, Scope, ScopeKey, UserId};
use crate::registry::overrides::{OverrideError, OverrideTable};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("override #{index} for scope {scope} is missing `{field}`")]
    MissingField {
        index: usize,
        scope: Scope,
        field: &'static str,
    },

    #[error("override #{index}: {source}")]
    Override {
        index: usize,
        #[source]
        source: OverrideError,
    },
}

/// One override line of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOverride {
    pub scope: Scope,
    #[serde(default)]
    pub connection: Option<ConnectionId>,
    #[serde(default)]
    pub group: Option<GroupId>,
    #[serde(default)]
    pub user: Option<UserId>,
    pub limit: u32,
}

impl ScenarioOverride {
    fn key(&self, index: usize) -> Result<ScopeKey, ScenarioError> {
        let missing = |field| ScenarioError::MissingField {
            index,
            scope: self.scope,
            field,
        };
        let connection = || self.connection.clone().ok_or_else(|| missing("connection"));
        let group = || self.group.clone().ok_or_else(|| missing("group"));
        let user = || self.user.clone().ok_or_else(|| missing("user"));

        Ok(match self.scope {
            Scope::Global => ScopeKey::Global,
            Scope::Connection => ScopeKey::Connection(connection()?),
            Scope::Group => ScopeKey::Group(group()?),
            Scope::UserConnection => ScopeKey::UserConnection(user()?, connection()?),
            Scope::UserGroup => ScopeKey::UserGroup(user()?, group()?),
        })
    }
}

/// A connection attempt together with the overrides in force.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub request: AdmissionRequest,
    #[serde(default)]
    pub overrides: Vec<ScenarioOverride>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Build the override table described by this scenario.
    pub fn override_table(&self) -> Result<OverrideTable, ScenarioError> {
        let table = OverrideTable::new();
        for (index, entry) in self.overrides.iter().enumerate() {
            let key = entry.key(index)?;
            table
                .set(key, entry.limit)
                .map_err(|source| ScenarioError::Override { index, source })?;
        }
        Ok(table)
    }
}
