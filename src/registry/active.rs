//! Live connection registry.
//!
//! # Responsibilities
//! - Count active connections per scope key
//! - Make check-then-increment atomic across concurrent attempts
//! - Release every scope a connection occupied when its guard drops

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use uuid::Uuid;

use crate::admission::error::AdmissionResult;
use crate::admission::request::ConnectionTarget;
use crate::admission::resolver::LimitResolver;
use crate::admission::store::ConnectionRegistry;
use crate::limits::scope::{Scope, ScopeKey};
use crate::observability::metrics;

/// In-process registry of active connections.
#[derive(Debug, Default)]
pub struct ActiveConnections {
    /// Scope key -> active count. Keys with a count of 0 are removed.
    counts: DashMap<ScopeKey, u32>,
    /// Serializes admission checks so two attempts cannot both take the last
    /// slot of a scope.
    admission: Mutex<()>,
}

/// Result of [`ActiveConnections::try_acquire`].
#[derive(Debug)]
pub enum Acquisition {
    /// The connection was admitted and is counted until the guard drops.
    Admitted(ActiveConnection),
    /// The connection was refused; nothing was counted.
    Denied(Scope),
}

impl Acquisition {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Acquisition::Admitted(_))
    }

    pub fn into_connection(self) -> Option<ActiveConnection> {
        match self {
            Acquisition::Admitted(conn) => Some(conn),
            Acquisition::Denied(_) => None,
        }
    }
}

impl ActiveConnections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active connections under one scope key.
    pub fn count(&self, key: &ScopeKey) -> u32 {
        self.counts.get(key).map(|c| *c).unwrap_or(0)
    }

    /// Active connections overall.
    pub fn total(&self) -> u32 {
        self.count(&ScopeKey::Global)
    }

    /// Admit `target` against `resolver` and, if admitted, count it in every
    /// applicable scope before any other attempt is checked.
    pub fn try_acquire(
        self: &Arc<Self>,
        resolver: &LimitResolver,
        target: ConnectionTarget,
    ) -> AdmissionResult<Acquisition> {
        let _serial = self
            .admission
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let decision = resolver.admit(self.as_ref(), &target)?;
        if let Some(scope) = decision.violated_scope {
            return Ok(Acquisition::Denied(scope));
        }

        let keys = target.scope_keys();
        for key in &keys {
            *self.counts.entry(key.clone()).or_insert(0) += 1;
        }
        metrics::record_active_connections(self.total());

        let conn = ActiveConnection {
            id: Uuid::new_v4(),
            target,
            keys,
            registry: Arc::clone(self),
        };
        tracing::debug!(
            session_id = %conn.id,
            connection = %conn.target.connection,
            user = %conn.target.user,
            total = self.total(),
            "Connection acquired"
        );
        Ok(Acquisition::Admitted(conn))
    }

    fn release(&self, keys: &[ScopeKey]) {
        for key in keys {
            if let Some(mut count) = self.counts.get_mut(key) {
                *count = count.saturating_sub(1);
            }
            self.counts.remove_if(key, |_, count| *count == 0);
        }
        metrics::record_active_connections(self.total());
    }
}

impl ConnectionRegistry for ActiveConnections {
    fn live_count(&self, key: &ScopeKey) -> AdmissionResult<u32> {
        Ok(self.count(key))
    }
}

/// A RAII guard for one admitted connection. Dropping it releases the slot
/// in every scope the connection occupied.
#[derive(Debug)]
pub struct ActiveConnection {
    id: Uuid,
    target: ConnectionTarget,
    keys: Vec<ScopeKey>,
    registry: Arc<ActiveConnections>,
}

impl ActiveConnection {
    /// Unique identifier of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }
}

impl Drop for ActiveConnection {
    fn drop(&mut self) {
        self.registry.release(&self.keys);
        tracing::trace!(session_id = %self.id, "Connection released");
    }
}
