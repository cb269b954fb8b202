use super::*;

use std::sync::{Arc, Mutex};

use crate::util::storage::MemoryStorage;

fn stored_raw(storage: &MemoryStorage) -> Option<String> {
    storage.get(SESSION_STORAGE_KEY).unwrap()
}

fn stored_session(storage: &MemoryStorage) -> Option<Session> {
    load_json(storage, SESSION_STORAGE_KEY).unwrap()
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), r#""customer""#);
}

#[test]
fn role_dashboard_roots() {
    assert_eq!(Role::Admin.dashboard_root(), "/admin/dashboard");
    assert_eq!(Role::Customer.dashboard_root(), "/customer");
}

#[test]
fn role_labels() {
    assert_eq!(Role::Admin.label(), "Administrator");
    assert_eq!(Role::Customer.label(), "Customer");
}

// =============================================================
// Session record
// =============================================================

#[test]
fn session_default_is_logged_out() {
    let session = Session::default();
    assert!(!session.authenticated);
    assert_eq!(session.role, None);
    assert_eq!(session.active_role(), None);
}

#[test]
fn session_record_wire_format() {
    let json = serde_json::to_string(&Session::signed_in(Role::Admin)).unwrap();
    assert_eq!(json, r#"{"authenticated":true,"role":"admin"}"#);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_sets_state_and_persists_for_every_role() {
    for role in [Role::Admin, Role::Customer] {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());

        assert!(store.login(Some(role)));

        let session = store.session();
        assert!(session.authenticated);
        assert_eq!(session.role, Some(role));
        assert_eq!(stored_session(&storage), Some(session));
    }
}

#[test]
fn login_without_role_fails_and_changes_nothing() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());

    assert!(!store.login(None));
    assert_eq!(store.session(), Session::default());
    assert!(storage.is_empty());
}

#[test]
fn login_without_role_keeps_existing_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.login(Some(Role::Customer));

    assert!(!store.login(None));
    assert_eq!(store.session().role, Some(Role::Customer));
    assert_eq!(stored_session(&storage), Some(Session::signed_in(Role::Customer)));
}

#[test]
fn login_switching_role_overwrites_record() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.login(Some(Role::Customer));
    store.login(Some(Role::Admin));

    assert_eq!(store.session().role, Some(Role::Admin));
    assert_eq!(stored_session(&storage), Some(Session::signed_in(Role::Admin)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_succeeds_in_memory_when_storage_unavailable() {
    let mut store = SessionStore::new(BrowserStorage);
    assert!(store.login(Some(Role::Admin)));
    assert_eq!(store.session().active_role(), Some(Role::Admin));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_state_and_record() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.login(Some(Role::Admin));

    store.logout();

    assert_eq!(store.session(), Session::default());
    assert_eq!(stored_raw(&storage), None);
}

#[test]
fn logout_when_logged_out_is_harmless() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.logout();
    assert_eq!(store.session(), Session::default());
    assert!(storage.is_empty());
}

#[test]
fn logout_twice_matches_logout_once() {
    let once_storage = MemoryStorage::new();
    let mut once = SessionStore::new(once_storage.clone());
    once.login(Some(Role::Customer));
    once.logout();

    let twice_storage = MemoryStorage::new();
    let mut twice = SessionStore::new(twice_storage.clone());
    twice.login(Some(Role::Customer));
    twice.logout();
    twice.logout();

    assert_eq!(once.session(), twice.session());
    assert_eq!(stored_raw(&once_storage), stored_raw(&twice_storage));
}

// =============================================================
// hydrate / reload
// =============================================================

#[test]
fn hydrate_round_trips_login() {
    for role in [Role::Admin, Role::Customer] {
        let storage = MemoryStorage::new();
        let mut first = SessionStore::new(storage.clone());
        first.login(Some(role));

        let fresh = SessionStore::hydrate(storage.clone());
        assert_eq!(fresh.session(), first.session());
    }
}

#[test]
fn hydrate_without_record_is_logged_out() {
    let store = SessionStore::hydrate(MemoryStorage::new());
    assert_eq!(store.session(), Session::default());
}

#[test]
fn hydrate_corrupt_record_is_logged_out_and_cleared() {
    let storage = MemoryStorage::new();
    storage.set(SESSION_STORAGE_KEY, "{\"authenticated\":tru").unwrap();

    let store = SessionStore::hydrate(storage.clone());

    assert_eq!(store.session(), Session::default());
    assert_eq!(stored_raw(&storage), None);
}

#[test]
fn hydrate_unknown_role_is_logged_out_and_cleared() {
    let storage = MemoryStorage::new();
    storage
        .set(SESSION_STORAGE_KEY, r#"{"authenticated":true,"role":"operator"}"#)
        .unwrap();

    let store = SessionStore::hydrate(storage.clone());

    assert_eq!(store.session(), Session::default());
    assert_eq!(stored_raw(&storage), None);
}

#[test]
fn hydrate_authenticated_without_role_is_rejected() {
    let storage = MemoryStorage::new();
    storage
        .set(SESSION_STORAGE_KEY, r#"{"authenticated":true,"role":null}"#)
        .unwrap();

    let store = SessionStore::hydrate(storage.clone());

    assert!(!store.session().authenticated);
    assert_eq!(stored_raw(&storage), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn hydrate_unavailable_storage_is_logged_out() {
    let store = SessionStore::hydrate(BrowserStorage);
    assert_eq!(store.session(), Session::default());
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn subscribers_see_every_change_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut store = SessionStore::new(MemoryStorage::new());
    store.subscribe(move |s| sink.lock().unwrap().push(s.active_role()));

    store.login(Some(Role::Admin));
    store.login(None);
    store.logout();

    assert_eq!(*seen.lock().unwrap(), vec![Some(Role::Admin), None]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    let mut store = SessionStore::new(MemoryStorage::new());
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.login(Some(Role::Customer));
    assert!(store.unsubscribe(id));
    store.logout();

    assert_eq!(*count.lock().unwrap(), 1);
    assert!(!store.unsubscribe(id));
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn auth_context_starts_not_ready_and_logged_out() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        assert!(!auth.ready.get_untracked());
        assert_eq!(auth.session.get_untracked(), Session::default());
    });
}

#[test]
fn auth_context_login_updates_signal() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        assert!(auth.login(Some(Role::Customer)));
        assert_eq!(auth.session.get_untracked().active_role(), Some(Role::Customer));

        auth.logout();
        assert_eq!(auth.session.get_untracked(), Session::default());
    });
}

#[test]
fn auth_context_rejects_missing_role() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        assert!(!auth.login(None));
        assert_eq!(auth.session.get_untracked(), Session::default());
    });
}

#[test]
fn auth_context_restore_marks_ready() {
    Owner::new().with(|| {
        let auth = AuthContext::new();
        auth.restore();
        assert!(auth.ready.get_untracked());
    });
}

#[test]
#[should_panic]
fn use_auth_outside_provider_panics() {
    Owner::new().with(|| {
        let _ = use_auth();
    });
}

#[test]
fn use_auth_inside_provider_returns_same_context() {
    Owner::new().with(|| {
        let provided = provide_auth();
        provided.login(Some(Role::Admin));
        let found = use_auth();
        assert_eq!(found.session.get_untracked().active_role(), Some(Role::Admin));
    });
}
