//! Concurrent acquisition against the in-process registry.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gateway_limits::limits::ScopeKey;
use gateway_limits::registry::Acquisition;
use gateway_limits::{
    ActiveConnections, ConnectionTarget, LimitConfiguration, LimitResolver, OverrideTable, Scope,
};

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_attempts_never_exceed_limit() {
    let registry = Arc::new(ActiveConnections::new());
    let resolver = Arc::new(LimitResolver::without_overrides(Arc::new(
        LimitConfiguration::new(0, 5, 0, 0, 0),
    )));
    let admitted = Arc::new(AtomicU32::new(0));
    let peak = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for i in 0..64 {
        let registry = registry.clone();
        let resolver = resolver.clone();
        let admitted = admitted.clone();
        let peak = peak.clone();
        handles.push(tokio::spawn(async move {
            let target = ConnectionTarget::new("rdp-1", format!("user-{i}"));
            match registry.try_acquire(&resolver, target).unwrap() {
                Acquisition::Admitted(conn) => {
                    admitted.fetch_add(1, Ordering::SeqCst);
                    peak.fetch_max(
                        registry.count(&ScopeKey::Connection("rdp-1".into())),
                        Ordering::SeqCst,
                    );
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    drop(conn);
                }
                Acquisition::Denied(scope) => assert_eq!(scope, Scope::Connection),
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert!(admitted.load(Ordering::SeqCst) >= 5);
    assert!(peak.load(Ordering::SeqCst) <= 5);
    assert_eq!(registry.total(), 0);
}

#[tokio::test]
async fn test_slot_reused_after_release() {
    let registry = Arc::new(ActiveConnections::new());
    let overrides = OverrideTable::new();
    overrides.set_user_group("alice", "office", 1);
    let resolver = common::resolver(LimitConfiguration::unlimited(), &overrides);

    let first = registry
        .try_acquire(&resolver, common::grouped_target())
        .unwrap()
        .into_connection()
        .expect("first connection admitted");

    let second = registry
        .try_acquire(
            &resolver,
            ConnectionTarget::new("ssh-1", "alice").in_group("office"),
        )
        .unwrap();
    assert!(matches!(second, Acquisition::Denied(Scope::UserGroup)));

    let session = first.id();
    drop(first);

    let third = registry
        .try_acquire(
            &resolver,
            ConnectionTarget::new("ssh-1", "alice").in_group("office"),
        )
        .unwrap()
        .into_connection()
        .expect("slot released");
    assert_ne!(third.id(), session);
    assert_eq!(third.target().connection.as_str(), "ssh-1");
    assert_eq!(registry.total(), 1);
}

#[test]
fn test_registry_failure_leaves_counts_untouched() {
    let registry = Arc::new(ActiveConnections::new());
    let resolver = LimitResolver::new(
        Arc::new(LimitConfiguration::unlimited()),
        Arc::new(common::Unreachable),
    );

    assert!(registry
        .try_acquire(&resolver, common::grouped_target())
        .is_err());
    assert_eq!(registry.total(), 0);
}
