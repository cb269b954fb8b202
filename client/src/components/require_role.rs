//! Role gate wrapping each dashboard layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders its children only for a session signed in with `role`; every
//! other visitor sees a placeholder and is sent to `/login`. The decision
//! re-runs on each session change, so signing out on a protected page
//! redirects immediately. Client-side only; not an authorization boundary.

#[cfg(test)]
#[path = "require_role_test.rs"]
mod require_role_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthContext, Role, use_auth};
use crate::util::guard::{GuardState, evaluate, redirect_target};

/// Guard decision for `role`, re-evaluated on every session or restore change.
pub(crate) fn gate_state(auth: AuthContext, role: Role) -> Memo<GuardState> {
    Memo::new(move |_| evaluate(auth.ready(), &auth.session(), role))
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let state = gate_state(auth, role);

    Effect::new(move || {
        if let Some(target) = redirect_target(state.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || state.get() == GuardState::Authorized fallback=|| view! { <LoadingPlaceholder/> }>
            {children()}
        </Show>
    }
}

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <span class="loading-placeholder__spinner" aria-hidden="true"></span>
            "Loading..."
        </div>
    }
}
