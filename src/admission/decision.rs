//! Admission outcome.

use serde::{Deserialize, Serialize};

use crate::limits::scope::Scope;

/// Outcome of one admission check. A denial is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionDecision {
    pub admitted: bool,
    /// The first scope, in evaluation order, whose limit was reached.
    pub violated_scope: Option<Scope>,
}

impl AdmissionDecision {
    pub fn admitted() -> Self {
        Self {
            admitted: true,
            violated_scope: None,
        }
    }

    pub fn denied(scope: Scope) -> Self {
        Self {
            admitted: false,
            violated_scope: Some(scope),
        }
    }

    pub fn is_admitted(&self) -> bool {
        self.admitted
    }
}

impl std::fmt::Display for AdmissionDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.violated_scope {
            None => write!(f, "admitted"),
            Some(scope) => write!(f, "denied: {}", scope.exceeded_reason()),
        }
    }
}
