//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::admin::{
    AdminAlerts, AdminAnalytics, AdminCustomers, AdminDashboard, AdminLayout, AdminSettings, AdminSiteAnalytics,
    AdminSites,
};
use crate::pages::customer::{
    CustomerBilling, CustomerEnergy, CustomerLayout, CustomerOverview, CustomerSettings, CustomerSites,
    CustomerSupport,
};
use crate::pages::login::LoginPage;
use crate::pages::marketing::{
    AboutPage, BlogPage, BlogPostPage, CareersPage, ContactPage, HomePage, NotFoundPage, PricingPage, SupportPage,
};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The stored
/// session is only read once mounted in the browser, so the server render
/// and the first hydration pass both see a guard still checking.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth();
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/riverwatts.css"/>
        <Title text="RiverWatts"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("careers") view=CareersPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                <Route path=StaticSegment("support") view=SupportPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("dashboard") view=AdminDashboard/>
                    <Route path=StaticSegment("sites") view=AdminSites/>
                    <Route path=StaticSegment("customers") view=AdminCustomers/>
                    <Route path=StaticSegment("analytics") view=AdminAnalytics/>
                    <Route path=(StaticSegment("analytics"), ParamSegment("id")) view=AdminSiteAnalytics/>
                    <Route path=StaticSegment("alerts") view=AdminAlerts/>
                    <Route path=StaticSegment("settings") view=AdminSettings/>
                    <Route path=StaticSegment("") view=AdminDashboard/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("customer") view=CustomerLayout>
                    <Route path=StaticSegment("energy") view=CustomerEnergy/>
                    <Route path=StaticSegment("sites") view=CustomerSites/>
                    <Route path=StaticSegment("billing") view=CustomerBilling/>
                    <Route path=StaticSegment("support") view=CustomerSupport/>
                    <Route path=StaticSegment("settings") view=CustomerSettings/>
                    <Route path=StaticSegment("") view=CustomerOverview/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
