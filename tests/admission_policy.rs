//! Admission policy behaviour across all scopes.

use std::sync::Arc;

use gateway_limits::admission::{Dependency, LiveCounts};
use gateway_limits::config::properties::LIMIT_PROPERTIES;
use gateway_limits::config::{ConfigurationError, MapSource};
use gateway_limits::{
    ActiveConnections, AdmissionDecision, AdmissionRequest, ConnectionTarget, LimitConfiguration,
    LimitResolver, OverrideTable, Scope,
};

mod common;

/// A configuration with only `scope` limited to `limit`.
fn only(scope: Scope, limit: u32) -> LimitConfiguration {
    let mut values = [0u32; 5];
    values[scope as usize] = limit;
    LimitConfiguration::new(values[0], values[1], values[2], values[3], values[4])
}

#[test]
fn test_zero_never_denies() {
    let overrides = OverrideTable::new();
    let resolver = common::resolver(LimitConfiguration::unlimited(), &overrides);

    for count in [0, 10_000] {
        let decision = resolver.try_admit(&common::uniform_request(count)).unwrap();
        assert_eq!(decision, AdmissionDecision::admitted(), "count {count}");
    }
}

#[test]
fn test_zero_override_never_denies() {
    let overrides = OverrideTable::new();
    overrides.set_connection("rdp-1", 0);
    overrides.set_group("office", 0);
    overrides.set_user_connection("alice", "rdp-1", 0);
    overrides.set_user_group("alice", "office", 0);
    let resolver = common::resolver(LimitConfiguration::new(0, 1, 1, 1, 1), &overrides);

    for count in [0, 10_000] {
        assert!(resolver
            .try_admit(&common::uniform_request(count))
            .unwrap()
            .is_admitted());
    }
}

#[test]
fn test_boundary_is_exact_for_every_scope() {
    let overrides = OverrideTable::new();
    for scope in Scope::ALL {
        let resolver = common::resolver(only(scope, 3), &overrides);

        let below = resolver.try_admit(&common::uniform_request(2)).unwrap();
        assert!(below.is_admitted(), "{scope} at 2 of 3");

        let at = resolver.try_admit(&common::uniform_request(3)).unwrap();
        assert_eq!(at, AdmissionDecision::denied(scope), "{scope} at 3 of 3");
    }
}

#[test]
fn test_override_takes_precedence_both_ways() {
    let overrides = OverrideTable::new();
    let resolver = common::resolver(only(Scope::Connection, 5), &overrides);
    let request = common::uniform_request(2);

    // Default admits; a tighter override denies.
    assert!(resolver.try_admit(&request).unwrap().is_admitted());
    overrides.set_connection("rdp-1", 2);
    assert_eq!(
        resolver.try_admit(&request).unwrap(),
        AdmissionDecision::denied(Scope::Connection)
    );

    // Default denies; a looser override admits.
    let resolver = common::resolver(only(Scope::UserGroup, 1), &overrides);
    overrides.set_connection("rdp-1", 0);
    assert_eq!(
        resolver.try_admit(&request).unwrap(),
        AdmissionDecision::denied(Scope::UserGroup)
    );
    overrides.set_user_group("alice", "office", 10);
    assert!(resolver.try_admit(&request).unwrap().is_admitted());
}

#[test]
fn test_override_applies_only_to_its_entity() {
    let overrides = OverrideTable::new();
    overrides.set_connection("rdp-2", 100);
    let resolver = common::resolver(only(Scope::Connection, 1), &overrides);

    assert_eq!(
        resolver.try_admit(&common::uniform_request(1)).unwrap(),
        AdmissionDecision::denied(Scope::Connection)
    );
}

#[test]
fn test_first_violated_scope_is_reported() {
    let overrides = OverrideTable::new();
    let resolver = common::resolver(LimitConfiguration::new(1, 1, 1, 1, 1), &overrides);
    let mut request = common::uniform_request(1);

    for scope in Scope::ALL {
        assert_eq!(
            resolver.try_admit(&request).unwrap(),
            AdmissionDecision::denied(scope)
        );
        request.counts.set(scope, 0);
    }
    assert!(resolver.try_admit(&request).unwrap().is_admitted());
}

#[test]
fn test_global_checked_before_connection_headroom() {
    let overrides = OverrideTable::new();
    let resolver = common::resolver(LimitConfiguration::new(2, 5, 0, 0, 0), &overrides);
    let request = AdmissionRequest::new(
        ConnectionTarget::new("rdp-1", "alice"),
        LiveCounts {
            global: 2,
            connection: 0,
            ..Default::default()
        },
    );

    let decision = resolver.try_admit(&request).unwrap();
    assert_eq!(decision, AdmissionDecision::denied(Scope::Global));
    assert_eq!(decision.to_string(), "denied: GlobalLimitExceeded");
}

#[test]
fn test_single_session_per_user_connection() {
    let resolver =
        LimitResolver::without_overrides(Arc::new(LimitConfiguration::new(0, 0, 0, 1, 0)));
    let request = AdmissionRequest::new(
        ConnectionTarget::new("rdp-1", "alice"),
        LiveCounts {
            global: 1,
            connection: 1,
            user_connection: 1,
            ..Default::default()
        },
    );

    let decision = resolver.try_admit(&request).unwrap();
    assert_eq!(decision, AdmissionDecision::denied(Scope::UserConnection));
    assert_eq!(decision.violated_scope.unwrap().exceeded_reason(), "UserConnectionLimitExceeded");
}

#[test]
fn test_group_scopes_skipped_without_group() {
    let overrides = OverrideTable::new();
    let resolver = common::resolver(LimitConfiguration::new(0, 0, 1, 0, 1), &overrides);
    let request = AdmissionRequest::new(
        ConnectionTarget::new("rdp-1", "alice"),
        LiveCounts {
            group: 50,
            user_group: 50,
            ..Default::default()
        },
    );

    assert!(resolver.try_admit(&request).unwrap().is_admitted());
}

#[test]
fn test_invalid_configuration_fails_before_admission() {
    for key in LIMIT_PROPERTIES {
        for bad in ["-1", "unlimited"] {
            let source = MapSource::new().with(key, bad);
            let err = LimitConfiguration::from_source(&source).unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigurationError::Negative { .. } | ConfigurationError::NotNumeric { .. }
                ),
                "{key}={bad}: {err}"
            );
        }
    }
}

#[test]
fn test_dependency_failures_deny_by_default() {
    let resolver = LimitResolver::new(
        Arc::new(LimitConfiguration::unlimited()),
        Arc::new(common::Unreachable),
    );
    let err = resolver
        .try_admit(&common::uniform_request(0))
        .unwrap_err();
    assert_eq!(err.dependency, Dependency::OverrideStore);

    let resolver = LimitResolver::without_overrides(Arc::new(LimitConfiguration::unlimited()));
    let err = resolver
        .admit(&common::Unreachable, &common::grouped_target())
        .unwrap_err();
    assert_eq!(err.dependency, Dependency::Registry);
}

#[test]
fn test_admit_reads_counts_from_registry() {
    let registry = Arc::new(ActiveConnections::new());
    let resolver =
        LimitResolver::without_overrides(Arc::new(LimitConfiguration::new(0, 0, 2, 0, 0)));

    let _a = registry
        .try_acquire(&resolver, ConnectionTarget::new("rdp-1", "alice").in_group("office"))
        .unwrap()
        .into_connection()
        .unwrap();
    let _b = registry
        .try_acquire(&resolver, ConnectionTarget::new("ssh-1", "bob").in_group("office"))
        .unwrap()
        .into_connection()
        .unwrap();

    let decision = resolver
        .admit(registry.as_ref(), &ConnectionTarget::new("vnc-1", "carol").in_group("office"))
        .unwrap();
    assert_eq!(decision, AdmissionDecision::denied(Scope::Group));

    let decision = resolver
        .admit(registry.as_ref(), &ConnectionTarget::new("vnc-1", "carol"))
        .unwrap();
    assert!(decision.is_admitted());
}
