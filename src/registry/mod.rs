//! In-process implementations of the registry and override store.
//!
//! # Data Flow
//! ```text
//! Connection attempt
//!     → active.rs (lock, read live counts, resolve, increment)
//!     → ActiveConnection guard held for the connection's lifetime
//!     → guard dropped → every occupied scope decremented
//!
//! overrides.rs: per-entity limits consulted by the resolver
//! ```
//!
//! # Design Decisions
//! - One admission lock per registry; counts themselves live in a DashMap
//! - Releases do not take the admission lock (they only lower counts)

pub mod active;
pub mod overrides;

pub use active::{Acquisition, ActiveConnection, ActiveConnections};
pub use overrides::{OverrideError, OverrideTable};
