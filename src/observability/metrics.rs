//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_admissions_total` (counter): admission checks by outcome
//! - `gateway_denials_total` (counter): denials by violated scope
//! - `gateway_dependency_failures_total` (counter): failed lookups by dependency
//! - `gateway_active_connections` (gauge): connections held in the registry
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::admission::error::Dependency;
use crate::limits::scope::Scope;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_admission() {
    counter!("gateway_admissions_total", "outcome" => "admitted").increment(1);
}

pub fn record_denial(scope: Scope) {
    counter!("gateway_admissions_total", "outcome" => "denied").increment(1);
    counter!("gateway_denials_total", "scope" => scope.as_str()).increment(1);
}

pub fn record_dependency_failure(dependency: Dependency) {
    counter!("gateway_dependency_failures_total", "dependency" => dependency.as_str()).increment(1);
}

pub fn record_active_connections(count: u32) {
    gauge!("gateway_active_connections").set(f64::from(count));
}
