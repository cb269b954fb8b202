//! Shared shell for the admin and customer dashboards.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::require_role::RequireRole;
use crate::components::sidebar::Sidebar;
use crate::state::auth::Role;

/// Gate + sidebar + nested route outlet.
#[component]
pub fn DashboardLayout(role: Role) -> impl IntoView {
    view! {
        <RequireRole role=role>
            <div class="dashboard">
                <Sidebar/>
                <main class="dashboard__main">
                    <Outlet/>
                </main>
            </div>
        </RequireRole>
    }
}

#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional, into)] subtitle: Option<String>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
        </header>
    }
}
