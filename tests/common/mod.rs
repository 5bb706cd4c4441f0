//! Shared fixtures for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use gateway_limits::admission::{
    AdmissionResult, ConnectionRegistry, Dependency, DependencyUnavailable, OverrideStore,
};
use gateway_limits::limits::ScopeKey;
use gateway_limits::{
    AdmissionRequest, ConnectionTarget, LimitConfiguration, LimitResolver, OverrideTable,
};

/// Target `rdp-1` in group `office` for user `alice`.
#[allow(dead_code)]
pub fn grouped_target() -> ConnectionTarget {
    ConnectionTarget::new("rdp-1", "alice").in_group("office")
}

/// A request for [`grouped_target`] with every scope at `count`.
#[allow(dead_code)]
pub fn uniform_request(count: u32) -> AdmissionRequest {
    let mut request = AdmissionRequest::new(grouped_target(), Default::default());
    for key in grouped_target().scope_keys() {
        request.counts.set(key.scope(), count);
    }
    request
}

#[allow(dead_code)]
pub fn resolver(config: LimitConfiguration, overrides: &OverrideTable) -> LimitResolver {
    LimitResolver::new(Arc::new(config), Arc::new(overrides.clone()))
}

/// A store that always fails, as if its backend were unreachable.
#[allow(dead_code)]
pub struct Unreachable;

impl OverrideStore for Unreachable {
    fn override_for(&self, _key: &ScopeKey) -> AdmissionResult<Option<u32>> {
        Err(DependencyUnavailable::new(
            Dependency::OverrideStore,
            "connection refused",
        ))
    }
}

impl ConnectionRegistry for Unreachable {
    fn live_count(&self, _key: &ScopeKey) -> AdmissionResult<u32> {
        Err(DependencyUnavailable::new(Dependency::Registry, "timed out"))
    }
}

/// Write `content` to a uniquely named file in the temp directory.
#[allow(dead_code)]
pub fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
    std::fs::write(&path, content).unwrap();
    path
}
