//! Demo sign-in: pick an account type and land on its dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::site_chrome::MarketingLayout;
use crate::state::auth::{Role, use_auth};

const CHOOSE_ROLE_MESSAGE: &str = "Choose an account type to continue.";

/// Where a successful sign-in goes, or the message to show instead.
fn login_outcome(accepted: bool, role: Option<Role>) -> Result<&'static str, &'static str> {
    match (accepted, role) {
        (true, Some(role)) => Ok(role.dashboard_root()),
        _ => Err(CHOOSE_ROLE_MESSAGE),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let info = RwSignal::new(String::new());

    let sign_in = move |role: Option<Role>| match login_outcome(auth.login(role), role) {
        Ok(dest) => {
            info.set(String::new());
            navigate(dest, NavigateOptions::default());
        }
        Err(message) => info.set(message.to_owned()),
    };
    let sign_in_admin = sign_in.clone();

    let signed_in_as = move || auth.session().active_role();

    view! {
        <MarketingLayout>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Sign in to RiverWatts"</h1>
                    <p class="login-card__subtitle">"Demo accounts: no password required."</p>
                    <Show when=move || signed_in_as().is_some()>
                        <p class="login-message">
                            "Signed in as "
                            {move || signed_in_as().map(Role::label).unwrap_or_default()}
                            ". "
                            <a href=move || signed_in_as().map_or("/", Role::dashboard_root)>"Go to dashboard"</a>
                        </p>
                    </Show>
                    <div class="login-actions">
                        <button class="login-button" on:click=move |_| sign_in_admin(Some(Role::Admin))>
                            "Sign in as admin"
                        </button>
                        <button class="login-button login-button--secondary" on:click=move |_| sign_in(Some(Role::Customer))>
                            "Sign in as customer"
                        </button>
                    </div>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message login-message--error">{move || info.get()}</p>
                    </Show>
                </div>
            </div>
        </MarketingLayout>
    }
}
