//! Dashboard sidebar: role menu, active-link highlight, sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::use_auth;
use crate::util::nav::{NavEntry, SITE_HOME, compose, is_active};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let pathname = location.pathname;

    let items = move || {
        let role = auth.session().active_role();
        compose(role, &pathname.get())
            .into_iter()
            .map(|item| view! { <SidebarLink entry=item.entry active=item.active/> })
            .collect_view()
    };
    let home_active = move || is_active(&pathname.get(), SITE_HOME.href, auth.session().active_role());
    let role_label = move || auth.session().active_role().map(|r| r.label()).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <a href="/" class="sidebar__logo">"RiverWatts"</a>
                <span class="sidebar__role">{role_label}</span>
            </div>
            <nav class="sidebar__nav">
                <ul class="sidebar__list">{items}</ul>
            </nav>
            <div class="sidebar__footer">
                <a
                    href=SITE_HOME.href
                    class="sidebar__link"
                    class:sidebar__link--active=home_active
                >
                    <span class="sidebar__icon">{SITE_HOME.icon.glyph()}</span>
                    {SITE_HOME.label}
                </a>
                <button class="sidebar__logout" type="button" on:click=move |_| auth.logout()>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(entry: &'static NavEntry, active: bool) -> impl IntoView {
    view! {
        <li>
            <a
                href=entry.href
                class="sidebar__link"
                class:sidebar__link--active=active
                aria-current=active.then_some("page")
            >
                <span class="sidebar__icon">{entry.icon.glyph()}</span>
                {entry.label}
            </a>
        </li>
    }
}
