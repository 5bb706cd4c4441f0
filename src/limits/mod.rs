//! Limit model.
//!
//! # Data Flow
//! ```text
//! ConfigurationSource
//!     → configuration.rs (five global/default limits, read once)
//!     → limit.rs (0 becomes Unlimited, comparison against live counts)
//!     → scope.rs (which scope a limit belongs to)
//! ```

pub mod configuration;
pub mod limit;
pub mod scope;

pub use configuration::{DatabaseEnvironment, LimitConfiguration};
pub use limit::ConnectionLimit;
pub use scope::{ConnectionId, GroupId, Scope, ScopeKey, UserId};
