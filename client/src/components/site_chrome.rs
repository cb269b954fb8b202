//! Marketing-site header and footer.

use leptos::prelude::*;

use crate::state::auth::use_auth;

const MARKETING_LINKS: &[(&str, &str)] = &[
    ("About", "/about"),
    ("Pricing", "/pricing"),
    ("Careers", "/careers"),
    ("Blog", "/blog"),
    ("Support", "/support"),
    ("Contact", "/contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = use_auth();
    let account_link = move || match auth.session().active_role() {
        Some(role) => view! { <a class="button button--secondary" href=role.dashboard_root()>"Dashboard"</a> }.into_any(),
        None => view! { <a class="button button--primary" href="/login">"Sign in"</a> }.into_any(),
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__logo">"RiverWatts"</a>
            <nav class="site-header__nav">
                {MARKETING_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <div class="site-header__account">{account_link}</div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"RiverWatts hydrokinetic monitoring"</p>
            <nav class="site-footer__nav">
                {MARKETING_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
        </footer>
    }
}

/// Header + page body + footer for public routes.
#[component]
pub fn MarketingLayout(children: Children) -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="marketing">{children()}</main>
        <SiteFooter/>
    }
}
