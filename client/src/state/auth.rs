//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the dashboard sidebar to decide who may see what.
//! The session is a role flag persisted to `localStorage`; there is no token
//! and no server-side validation, so nothing here is an authorization
//! boundary.
//!
//! DESIGN
//! ======
//! `SessionStore` is a plain owned object that holds the session, the storage
//! backend, and a list of subscribers. It knows nothing about Leptos and is
//! what the tests exercise. `AuthContext` wraps one store for the view tree:
//! the store's subscription feeds an `RwSignal`, which is what components
//! track.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError, load_json, save_json};

/// `localStorage` key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "riverwatts_auth";

/// Dashboard audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// Landing route of the role's dashboard.
    pub fn dashboard_root(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Customer => "/customer",
        }
    }

    /// Human-readable role name for the sidebar and login page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Customer => "Customer",
        }
    }
}

/// Who is signed in, and as what.
///
/// `authenticated` implies `role.is_some()`; only [`SessionStore::login`]
/// produces an authenticated session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Session {
    fn signed_in(role: Role) -> Self {
        Self { authenticated: true, role: Some(role) }
    }

    /// Authenticated role, if any.
    pub fn active_role(&self) -> Option<Role> {
        if self.authenticated { self.role } else { None }
    }

    fn is_consistent(&self) -> bool {
        self.authenticated == self.role.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&Session) + Send + Sync>;

/// Owned session holder with durable persistence and change notification.
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    session: Session,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Logged-out store. Storage is not read until [`reload`](Self::reload).
    pub fn new(storage: S) -> Self {
        Self { storage, session: Session::default(), subscribers: Vec::new(), next_id: 0 }
    }

    /// Store initialized from whatever `storage` currently holds.
    pub fn hydrate(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.reload();
        store
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-read the durable record and notify subscribers.
    ///
    /// Missing, unreadable, corrupt, or inconsistent records all leave the
    /// store logged out; bad records are deleted so the next start is clean.
    pub fn reload(&mut self) {
        self.session = match load_json::<Session>(&self.storage, SESSION_STORAGE_KEY) {
            Ok(Some(stored)) if stored.is_consistent() => stored,
            Ok(Some(stored)) => {
                leptos::logging::warn!("discarding inconsistent session record: {stored:?}");
                self.discard_record();
                Session::default()
            }
            Ok(None) => Session::default(),
            Err(StorageError::Corrupt(e)) => {
                leptos::logging::warn!("discarding corrupt session record: {e}");
                self.discard_record();
                Session::default()
            }
            Err(e) => {
                leptos::logging::warn!("session restore skipped: {e}");
                Session::default()
            }
        };
        self.notify();
    }

    /// Sign in as `role`. Returns `false` without touching state when no
    /// role is given.
    pub fn login(&mut self, role: Option<Role>) -> bool {
        let Some(role) = role else {
            return false;
        };
        self.session = Session::signed_in(role);
        if let Err(e) = save_json(&self.storage, SESSION_STORAGE_KEY, &self.session) {
            leptos::logging::warn!("session not persisted: {e}");
        }
        self.notify();
        true
    }

    /// Sign out unconditionally and drop the durable record.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.discard_record();
        self.notify();
    }

    /// Register `callback` to run after every session change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn discard_record(&self) {
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            leptos::logging::warn!("session record not removed: {e}");
        }
    }

    fn notify(&self) {
        for (_, callback) in &self.subscribers {
            callback(&self.session);
        }
    }
}

// =============================================================================
// LEPTOS CONTEXT
// =============================================================================

/// View-tree handle to the tab's session.
///
/// Provided once by the root component. `ready` stays `false` until the
/// client has read `localStorage`, which keeps the server render and the
/// first hydration pass identical.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    ready: RwSignal<bool>,
    store: StoredValue<SessionStore<BrowserStorage>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let session = RwSignal::new(Session::default());
        let mut store = SessionStore::new(BrowserStorage);
        store.subscribe(move |s| session.set(*s));
        Self { session, ready: RwSignal::new(false), store: StoredValue::new(store) }
    }

    /// Tracked read of the current session.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Tracked read of the restore flag.
    pub fn ready(&self) -> bool {
        self.ready.get()
    }

    /// Load the persisted session. Call once, on the client.
    pub fn restore(&self) {
        self.store.update_value(SessionStore::reload);
        self.ready.set(true);
    }

    pub fn login(&self, role: Option<Role>) -> bool {
        self.store.try_update_value(|s| s.login(role)).unwrap_or(false)
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the tab's [`AuthContext`] and provide it to descendants.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);
    auth
}

/// Fetch the [`AuthContext`].
///
/// # Panics
///
/// Panics when called outside the tree below [`provide_auth`]; that is a
/// wiring bug, not a runtime condition.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
