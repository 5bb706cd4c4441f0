//! Limit resolution and the admission check.
//!
//! # Algorithm
//! For each applicable scope, in order global → connection → group →
//! user×connection → user×group:
//! - resolve the limit: the entity override if present, else the default
//!   (the global scope has no override)
//! - deny if the limit is fixed and the live count has reached it
//!
//! The first violated scope is reported. Group scopes apply only when the
//! target belongs to a group.

use std::sync::Arc;

use crate::admission::decision::AdmissionDecision;
use crate::admission::error::AdmissionResult;
use crate::admission::request::{AdmissionRequest, ConnectionTarget, LiveCounts};
use crate::admission::store::{ConnectionRegistry, NoOverrides, OverrideStore};
use crate::limits::configuration::LimitConfiguration;
use crate::limits::limit::ConnectionLimit;
use crate::limits::scope::ScopeKey;
use crate::observability::metrics;

/// Computes admission decisions from configured defaults and overrides.
///
/// Holds no mutable state; one instance serves all concurrent checks.
#[derive(Clone)]
pub struct LimitResolver {
    limits: Arc<LimitConfiguration>,
    overrides: Arc<dyn OverrideStore>,
}

impl LimitResolver {
    pub fn new(limits: Arc<LimitConfiguration>, overrides: Arc<dyn OverrideStore>) -> Self {
        Self { limits, overrides }
    }

    /// A resolver that only ever applies the configured defaults.
    pub fn without_overrides(limits: Arc<LimitConfiguration>) -> Self {
        Self::new(limits, Arc::new(NoOverrides))
    }

    /// The limit in force for one scope instance.
    pub fn resolve_limit(&self, key: &ScopeKey) -> AdmissionResult<ConnectionLimit> {
        let default = self.limits.default_for(key.scope());
        if matches!(key, ScopeKey::Global) {
            return Ok(default);
        }

        match self.overrides.override_for(key) {
            Ok(Some(value)) => Ok(ConnectionLimit::from(value)),
            Ok(None) => Ok(default),
            Err(e) => {
                tracing::warn!(scope = %key, error = %e, "Override lookup failed");
                metrics::record_dependency_failure(e.dependency);
                Err(e)
            }
        }
    }

    /// Decide whether the connection described by `request` may be opened.
    pub fn try_admit(&self, request: &AdmissionRequest) -> AdmissionResult<AdmissionDecision> {
        for key in request.target.scope_keys() {
            let scope = key.scope();
            let limit = self.resolve_limit(&key)?;
            let live = request.counts.get(scope);

            if limit.is_reached_at(live) {
                tracing::debug!(
                    scope = %key,
                    limit = %limit,
                    live_count = live,
                    reason = scope.exceeded_reason(),
                    "Connection denied"
                );
                metrics::record_denial(scope);
                return Ok(AdmissionDecision::denied(scope));
            }
        }

        tracing::trace!(
            connection = %request.target.connection,
            user = %request.target.user,
            "Connection admitted"
        );
        metrics::record_admission();
        Ok(AdmissionDecision::admitted())
    }

    /// Read live counts for `target` from `registry`, then run [`try_admit`].
    ///
    /// The counts may change before the caller acts on the decision; use
    /// [`ActiveConnections::try_acquire`] when check and increment must be
    /// atomic.
    ///
    /// [`try_admit`]: Self::try_admit
    /// [`ActiveConnections::try_acquire`]: crate::registry::ActiveConnections::try_acquire
    pub fn admit(
        &self,
        registry: &dyn ConnectionRegistry,
        target: &ConnectionTarget,
    ) -> AdmissionResult<AdmissionDecision> {
        let mut counts = LiveCounts::default();
        for key in target.scope_keys() {
            let count = registry.live_count(&key).inspect_err(|e| {
                tracing::warn!(scope = %key, error = %e, "Live count lookup failed");
                metrics::record_dependency_failure(e.dependency);
            })?;
            counts.set(key.scope(), count);
        }
        self.try_admit(&AdmissionRequest::new(target.clone(), counts))
    }
}
