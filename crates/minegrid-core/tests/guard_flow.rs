//! Integration tests for the session lifecycle.
//!
//! Drives the route guard through the full login / verify / revoke cycle
//! against the mock backend, the way the app services use it.

use minegrid_core::{
    FixedFingerprint, GuardState, MemorySessionStore, MockAuthBackend, Route, RouteGuard,
    SessionStore, SessionToken,
};
use std::sync::Arc;

struct Harness {
    store: Arc<MemorySessionStore>,
    backend: MockAuthBackend,
    guard: RouteGuard,
}

fn harness() -> Harness {
    let store = Arc::new(MemorySessionStore::new());
    let backend = MockAuthBackend::with_codes(["otp-1", "otp-2"]);
    let guard = RouteGuard::new(
        store.clone(),
        Arc::new(backend.clone()),
        &FixedFingerprint::new("device-a"),
    );
    Harness { store, backend, guard }
}

#[tokio::test]
async fn test_fresh_session_lands_on_login() {
    let h = harness();

    assert_eq!(h.guard.resolve_root(), Route::Login);
    assert_eq!(h.guard.enter_protected().await, GuardState::Unauthenticated);
}

#[tokio::test]
async fn test_login_then_protected_route_renders() {
    let h = harness();

    h.guard.login("otp-1").await.unwrap();

    assert_eq!(h.guard.resolve_root(), Route::Home);
    assert_eq!(h.guard.enter_protected().await, GuardState::Authenticated);
}

#[tokio::test]
async fn test_remount_verifies_again() {
    let h = harness();
    let token = h.guard.login("otp-1").await.unwrap();

    // First mount verifies and passes.
    assert_eq!(h.guard.enter_protected().await, GuardState::Authenticated);

    // Navigating away and back repeats verification; a revoked token is
    // caught on the remount and cleared.
    h.backend.revoke(&token);
    assert_eq!(h.guard.enter_protected().await, GuardState::Unauthenticated);
    assert!(h.store.token().is_none());
}

#[tokio::test]
async fn test_stale_token_redirects_root_but_fails_mount() {
    let h = harness();

    // The root redirect trusts token presence without verification.
    h.store.set_token(SessionToken::new("stale"));
    assert_eq!(h.guard.resolve_root(), Route::Home);

    // Mounting the protected view is where the stale token dies.
    assert_eq!(h.guard.enter_protected().await, GuardState::Unauthenticated);
    assert!(h.store.token().is_none());
    assert_eq!(h.guard.resolve_root(), Route::Login);
}

#[tokio::test]
async fn test_failed_login_is_retryable() {
    let h = harness();

    let err = h.guard.login("bad-code").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid or expired code.");
    assert!(h.store.token().is_none());

    // A retry with a valid code succeeds on the same guard.
    h.guard.login("otp-2").await.unwrap();
    assert_eq!(h.guard.enter_protected().await, GuardState::Authenticated);
}

#[tokio::test]
async fn test_network_failure_during_login_keeps_state() {
    let h = harness();
    h.backend.fail_next_login();

    let err = h.guard.login("otp-1").await.unwrap_err();
    assert!(err.to_string().starts_with("network error"));
    assert!(h.store.token().is_none());

    h.guard.login("otp-1").await.unwrap();
    assert!(h.store.token().is_some());
}

#[tokio::test]
async fn test_token_bound_to_other_device_fails_verification() {
    let h = harness();
    let token = h.guard.login("otp-1").await.unwrap();

    let other_store = Arc::new(MemorySessionStore::new());
    other_store.set_token(token);
    let other_guard = RouteGuard::new(
        other_store.clone(),
        Arc::new(h.backend.clone()),
        &FixedFingerprint::new("device-b"),
    );

    assert_eq!(other_guard.enter_protected().await, GuardState::Unauthenticated);
    assert!(other_store.token().is_none());
}
