//! Admission request types.

use serde::{Deserialize, Serialize};

use crate::limits::scope::{ConnectionId, GroupId, Scope, ScopeKey, UserId};

/// The scopes a prospective connection falls into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub connection: ConnectionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupId>,
    pub user: UserId,
}

impl ConnectionTarget {
    pub fn new(connection: impl Into<ConnectionId>, user: impl Into<UserId>) -> Self {
        Self {
            connection: connection.into(),
            group: None,
            user: user.into(),
        }
    }

    pub fn in_group(mut self, group: impl Into<GroupId>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Applicable scope keys in evaluation order. Group scopes are present
    /// only when the target belongs to a group.
    pub fn scope_keys(&self) -> Vec<ScopeKey> {
        let mut keys = vec![
            ScopeKey::Global,
            ScopeKey::Connection(self.connection.clone()),
        ];
        if let Some(group) = &self.group {
            keys.push(ScopeKey::Group(group.clone()));
        }
        keys.push(ScopeKey::UserConnection(
            self.user.clone(),
            self.connection.clone(),
        ));
        if let Some(group) = &self.group {
            keys.push(ScopeKey::UserGroup(self.user.clone(), group.clone()));
        }
        keys
    }
}

/// Live connection counts per scope at the moment of the check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCounts {
    pub global: u32,
    pub connection: u32,
    pub group: u32,
    pub user_connection: u32,
    pub user_group: u32,
}

impl LiveCounts {
    pub fn get(&self, scope: Scope) -> u32 {
        match scope {
            Scope::Global => self.global,
            Scope::Connection => self.connection,
            Scope::Group => self.group,
            Scope::UserConnection => self.user_connection,
            Scope::UserGroup => self.user_group,
        }
    }

    pub fn set(&mut self, scope: Scope, count: u32) {
        match scope {
            Scope::Global => self.global = count,
            Scope::Connection => self.connection = count,
            Scope::Group => self.group = count,
            Scope::UserConnection => self.user_connection = count,
            Scope::UserGroup => self.user_group = count,
        }
    }
}

/// One connection attempt with the live counts observed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRequest {
    pub target: ConnectionTarget,
    #[serde(default)]
    pub counts: LiveCounts,
}

impl AdmissionRequest {
    pub fn new(target: ConnectionTarget, counts: LiveCounts) -> Self {
        Self { target, counts }
    }
}
