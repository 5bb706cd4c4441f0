//! Concurrent connection limits for a remote-access gateway.
//!
//! Limits apply globally, per connection, per connection group, per user on
//! a connection and per user within a group. A limit of `0` means unlimited.

pub mod admission;
pub mod config;
pub mod limits;
pub mod observability;
pub mod registry;
pub mod scenario;

pub use admission::{AdmissionDecision, AdmissionRequest, ConnectionTarget, LimitResolver};
pub use config::GatewayConfig;
pub use limits::{DatabaseEnvironment, LimitConfiguration, Scope};
pub use registry::{ActiveConnections, OverrideTable};
