//! Public marketing pages.
//!
//! Everything here renders from `data::catalog` and `data::sites`; none of it
//! depends on the session beyond the header's account link.

#[cfg(test)]
#[path = "marketing_test.rs"]
mod marketing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::site_chrome::MarketingLayout;
use crate::components::stat_card::StatCard;
use crate::data::accounts::format_cents;
use crate::data::catalog::{BLOG_POSTS, JOB_OPENINGS, PRICING_TIERS, PricingTier, find_post};
use crate::data::sites::{SITES, online_count, total_output_kw};
use crate::util::markdown::render_markdown;

/// `$49.00/mo` style label for a tier.
fn monthly_price(tier: &PricingTier) -> String {
    format!("{}/mo", format_cents(tier.monthly_price_cents))
}

fn tier_class(tier: &PricingTier) -> &'static str {
    if tier.highlighted { "pricing-tier pricing-tier--highlighted" } else { "pricing-tier" }
}

fn post_href(slug: &str) -> String {
    format!("/blog/{slug}")
}

#[component]
pub fn HomePage() -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let online = online_count(SITES) as f64;
    #[allow(clippy::cast_precision_loss)]
    let fleet = SITES.len() as f64;

    view! {
        <MarketingLayout>
            <section class="hero">
                <h1 class="hero__title">"Clean power from moving water"</h1>
                <p class="hero__lead">
                    "RiverWatts installs and monitors hydrokinetic turbines that run in the current, with no dam required."
                </p>
                <div class="hero__actions">
                    <Button href="/pricing">"See pricing"</Button>
                    <Button variant=ButtonVariant::Secondary href="/login">"Customer sign in"</Button>
                </div>
            </section>
            <section class="stat-row">
                <StatCard label="Live output" value=total_output_kw(SITES) decimals=1 suffix=" kW"/>
                <StatCard label="Sites online" value=online hint=format!("of {fleet} installed")/>
                <StatCard label="Carbon avoided" value=1_284.0 suffix=" t CO₂"/>
            </section>
        </MarketingLayout>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Card title="About RiverWatts">
                <p>
                    "We started in 2019 with one turbine in the Willamette. Today we operate arrays across "
                    "North America and monitor every one of them from the same dashboard our customers use."
                </p>
            </Card>
        </MarketingLayout>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <h1>"Pricing"</h1>
            <div class="pricing-grid">
                {PRICING_TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <section class=tier_class(tier)>
                                <h2 class="pricing-tier__name">{tier.name}</h2>
                                <p class="pricing-tier__price">{monthly_price(tier)}</p>
                                <p class="pricing-tier__blurb">{tier.blurb}</p>
                                <ul class="pricing-tier__features">
                                    {tier.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                                <Button href="/contact">"Talk to sales"</Button>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </MarketingLayout>
    }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Card title="Open roles">
                <ul class="job-list">
                    {JOB_OPENINGS
                        .iter()
                        .map(|job| {
                            view! {
                                <li class="job-list__item">
                                    <strong>{job.title}</strong>
                                    <span class="job-list__meta">{format!("{} · {}", job.team, job.location)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Card>
        </MarketingLayout>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <h1>"Blog"</h1>
            <div class="post-list">
                {BLOG_POSTS
                    .iter()
                    .map(|post| {
                        view! {
                            <article class="post-list__item">
                                <a href=post_href(post.slug)><h2>{post.title}</h2></a>
                                <time>{post.published}</time>
                                <p>{post.summary}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </MarketingLayout>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = move || params.with(|p| p.get("slug")).and_then(|slug| find_post(&slug));

    view! {
        <MarketingLayout>
            {move || match post() {
                Some(post) => view! {
                    <article class="post">
                        <h1>{post.title}</h1>
                        <time>{post.published}</time>
                        <div class="post__body" inner_html=render_markdown(post.body_markdown)></div>
                        <a href="/blog">"All posts"</a>
                    </article>
                }
                .into_any(),
                None => view! { <NotFoundBody/> }.into_any(),
            }}
        </MarketingLayout>
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Card title="Support">
                <p>"Existing customers can open a ticket from the dashboard. Field emergencies: call +1 503 555 0142."</p>
                <Button href="/login">"Open the dashboard"</Button>
            </Card>
        </MarketingLayout>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <Card title="Contact sales">
                <p>"hello@riverwatts.example"</p>
                <p>"1200 NW Naito Pkwy, Portland, OR"</p>
            </Card>
        </MarketingLayout>
    }
}

#[component]
fn NotFoundBody() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <Button variant=ButtonVariant::Ghost href="/">"Back home"</Button>
        </section>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <MarketingLayout>
            <NotFoundBody/>
        </MarketingLayout>
    }
}
