//! Admission subsystem.
//!
//! # Data Flow
//! ```text
//! Connection attempt (ConnectionTarget)
//!     → registry (live counts per scope)      ─┐
//!     → store.rs OverrideStore (per entity)    ├→ resolver.rs
//!     → LimitConfiguration (defaults)         ─┘
//!     → AdmissionDecision { admitted, violated_scope }
//! ```
//!
//! # Design Decisions
//! - Denial is a decision, not an error
//! - Dependency failures surface as `DependencyUnavailable`; never admit
//! - The resolver compares; atomic check-then-increment is the registry's job

pub mod decision;
pub mod error;
pub mod request;
pub mod resolver;
pub mod store;

pub use decision::AdmissionDecision;
pub use error::{AdmissionResult, Dependency, DependencyUnavailable};
pub use request::{AdmissionRequest, ConnectionTarget, LiveCounts};
pub use resolver::LimitResolver;
pub use store::{ConnectionRegistry, NoOverrides, OverrideStore};
