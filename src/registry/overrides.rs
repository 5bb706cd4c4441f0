//! In-memory override table.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::admission::error::AdmissionResult;
use crate::admission::store::OverrideStore;
use crate::limits::scope::{ConnectionId, GroupId, ScopeKey, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("the global limit cannot be overridden")]
    Global,
}

/// A thread-safe table of per-entity limit overrides.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    inner: Arc<DashMap<ScopeKey, u32>>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the override for any non-global scope key. Returns the previous
    /// value.
    pub fn set(&self, key: ScopeKey, limit: u32) -> Result<Option<u32>, OverrideError> {
        if key == ScopeKey::Global {
            return Err(OverrideError::Global);
        }
        Ok(self.inner.insert(key, limit))
    }

    pub fn set_connection(&self, connection: impl Into<ConnectionId>, limit: u32) {
        self.inner
            .insert(ScopeKey::Connection(connection.into()), limit);
    }

    pub fn set_group(&self, group: impl Into<GroupId>, limit: u32) {
        self.inner.insert(ScopeKey::Group(group.into()), limit);
    }

    pub fn set_user_connection(
        &self,
        user: impl Into<UserId>,
        connection: impl Into<ConnectionId>,
        limit: u32,
    ) {
        self.inner.insert(
            ScopeKey::UserConnection(user.into(), connection.into()),
            limit,
        );
    }

    pub fn set_user_group(&self, user: impl Into<UserId>, group: impl Into<GroupId>, limit: u32) {
        self.inner
            .insert(ScopeKey::UserGroup(user.into(), group.into()), limit);
    }

    /// Remove an override so the default applies again.
    pub fn remove(&self, key: &ScopeKey) -> Option<u32> {
        self.inner.remove(key).map(|(_, limit)| limit)
    }

    pub fn get(&self, key: &ScopeKey) -> Option<u32> {
        self.inner.get(key).map(|r| *r.value())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl OverrideStore for OverrideTable {
    fn override_for(&self, key: &ScopeKey) -> AdmissionResult<Option<u32>> {
        Ok(self.get(key))
    }
}
