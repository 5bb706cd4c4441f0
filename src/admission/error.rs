//! Admission error types.

use thiserror::Error;

/// External collaborator consulted during admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// Live connection count registry.
    Registry,
    /// Per-entity override store.
    OverrideStore,
}

impl Dependency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dependency::Registry => "registry",
            Dependency::OverrideStore => "override_store",
        }
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registry or override store could not answer.
///
/// Callers must treat this as a denial: admitting on stale or missing data
/// could exceed a limit.
#[derive(Debug, Error)]
#[error("{dependency} unavailable: {message}")]
pub struct DependencyUnavailable {
    pub dependency: Dependency,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DependencyUnavailable {
    pub fn new(dependency: Dependency, message: impl Into<String>) -> Self {
        Self {
            dependency,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        dependency: Dependency,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            dependency,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for admission operations.
pub type AdmissionResult<T> = Result<T, DependencyUnavailable>;
