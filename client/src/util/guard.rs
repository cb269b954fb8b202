//! Route-guard decisions for role-gated layouts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dashboard layouts apply identical redirect behavior: anyone who is
//! not signed in with the layout's role is sent to `/login`. The check is a
//! UX gate only. Nothing behind it is protected unless the server enforces
//! its own authorization.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::{Arc, Mutex};

use crate::state::auth::{Role, Session, SessionStore, SubscriptionId};
use crate::util::storage::KeyValueStore;

/// Redirect target for denied visitors.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Session not restored yet; render a placeholder, do not redirect.
    #[default]
    Checking,
    /// Wrong or missing role; render a placeholder and go to `/login`.
    Redirecting,
    /// Render the protected subtree.
    Authorized,
}

/// Decide what a layout requiring `required` should do for `session`.
pub fn evaluate(ready: bool, session: &Session, required: Role) -> GuardState {
    if !ready {
        return GuardState::Checking;
    }
    if session.active_role() == Some(required) {
        GuardState::Authorized
    } else {
        GuardState::Redirecting
    }
}

/// Where a guard in `state` must send the visitor, if anywhere.
pub fn redirect_target(state: GuardState) -> Option<&'static str> {
    (state == GuardState::Redirecting).then_some(LOGIN_ROUTE)
}

/// Guard bound to a [`SessionStore`] outside of any view framework.
///
/// Evaluates once on attach and again on every session change, calling
/// `redirect(LOGIN_ROUTE)` each time the result is
/// [`GuardState::Redirecting`].
pub struct RouteGate {
    required: Role,
    state: Arc<Mutex<GuardState>>,
    subscription: SubscriptionId,
}

impl RouteGate {
    pub fn attach<S, F>(store: &mut SessionStore<S>, required: Role, redirect: F) -> Self
    where
        S: KeyValueStore,
        F: Fn(&str) + Send + Sync + 'static,
    {
        let state = Arc::new(Mutex::new(GuardState::Checking));
        let apply = {
            let state = state.clone();
            move |session: &Session| {
                let next = evaluate(true, session, required);
                if let Ok(mut current) = state.lock() {
                    *current = next;
                }
                if let Some(target) = redirect_target(next) {
                    redirect(target);
                }
            }
        };

        apply(&store.session());
        let subscription = store.subscribe(apply);
        Self { required, state, subscription }
    }

    pub fn required(&self) -> Role {
        self.required
    }

    /// Result of the latest evaluation.
    pub fn state(&self) -> GuardState {
        self.state.lock().map_or(GuardState::Checking, |s| *s)
    }

    pub fn is_authorized(&self) -> bool {
        self.state() == GuardState::Authorized
    }

    /// Stop following `store`.
    pub fn detach<S: KeyValueStore>(self, store: &mut SessionStore<S>) {
        store.unsubscribe(self.subscription);
    }
}
