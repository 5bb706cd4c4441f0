//! Interfaces to the external registry and override store.

use crate::admission::error::AdmissionResult;
use crate::limits::scope::ScopeKey;

/// Source of live connection counts.
///
/// Implementations answer for every scope key, including
/// [`ScopeKey::Global`]. Unknown keys have a count of 0.
pub trait ConnectionRegistry: Send + Sync {
    fn live_count(&self, key: &ScopeKey) -> AdmissionResult<u32>;
}

/// Source of per-entity limit overrides.
///
/// `Ok(None)` means no override: the configured default applies. An override
/// of `0` means unlimited for that entity.
pub trait OverrideStore: Send + Sync {
    fn override_for(&self, key: &ScopeKey) -> AdmissionResult<Option<u32>>;
}

/// An override store with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideStore for NoOverrides {
    fn override_for(&self, _key: &ScopeKey) -> AdmissionResult<Option<u32>> {
        Ok(None)
    }
}
