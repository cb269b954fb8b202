//! Customer portal under `/customer`.
//!
//! The demo signs every customer in as `DEMO_CUSTOMER_ID`; each page scopes
//! its data to that account.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::dashboard_layout::{DashboardLayout, PageHeader};
use crate::components::data_table::{Column, DataTable};
use crate::components::site_map::SiteMap;
use crate::components::stat_card::StatCard;
use crate::data::accounts::{
    DEMO_CUSTOMER_ID, INVOICES, Invoice, InvoiceStatus, MONTHLY_GENERATION_KWH, find_customer, format_cents,
};
use crate::data::sites::{for_customer, online_count, total_output_kw};
use crate::state::auth::Role;
use crate::util::counter::format_number;
use crate::util::table::Row;

#[derive(Clone, Debug, PartialEq)]
struct Bar {
    label: &'static str,
    kwh: f64,
    /// Height relative to the tallest month, 0-100.
    percent: f64,
}

fn generation_bars(months: &[(&'static str, f64)]) -> Vec<Bar> {
    let peak = months.iter().map(|(_, kwh)| *kwh).fold(0.0_f64, f64::max);
    months
        .iter()
        .map(|&(label, kwh)| Bar { label, kwh, percent: if peak > 0.0 { kwh / peak * 100.0 } else { 0.0 } })
        .collect()
}

fn invoice_rows(invoices: &[Invoice]) -> Vec<Row> {
    invoices
        .iter()
        .map(|i| vec![i.id.to_owned(), i.period.to_owned(), format_cents(i.amount_cents), i.status.label().to_owned()])
        .collect()
}

/// Total of every invoice not yet paid.
fn outstanding_cents(invoices: &[Invoice]) -> u64 {
    invoices.iter().filter(|i| i.status != InvoiceStatus::Paid).map(|i| i.amount_cents).sum()
}

fn validate_ticket(subject: &str, body: &str) -> Result<(), &'static str> {
    if subject.trim().is_empty() {
        return Err("Add a subject so we can route your ticket.");
    }
    if body.trim().len() < 10 {
        return Err("Describe the issue in a little more detail.");
    }
    Ok(())
}

fn account_name() -> &'static str {
    find_customer(DEMO_CUSTOMER_ID).map_or("Your account", |c| c.name)
}

#[component]
pub fn CustomerLayout() -> impl IntoView {
    view! { <DashboardLayout role=Role::Customer/> }
}

#[component]
pub fn CustomerOverview() -> impl IntoView {
    let sites = for_customer(DEMO_CUSTOMER_ID);
    #[allow(clippy::cast_precision_loss)]
    let online = online_count(&sites) as f64;
    let this_month = MONTHLY_GENERATION_KWH.last().map_or(0.0, |(_, kwh)| *kwh);

    view! {
        <PageHeader title=account_name() subtitle="Your installations right now"/>
        <div class="stat-row">
            <StatCard label="Current output" value=total_output_kw(&sites) decimals=1 suffix=" kW"/>
            <StatCard label="Sites online" value=online hint=format!("of {}", sites.len())/>
            <StatCard label="This month" value=this_month suffix=" kWh"/>
        </div>
        <Card title="Your sites">
            <SiteMap sites=sites container_id="customer-site-map" zoom=6/>
        </Card>
    }
}

#[component]
pub fn CustomerEnergy() -> impl IntoView {
    view! {
        <PageHeader title="Energy" subtitle="Monthly generation across all sites"/>
        <Card>
            <div class="bar-chart">
                {generation_bars(MONTHLY_GENERATION_KWH)
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <div class="bar-chart__column" title=format!("{} kWh", format_number(bar.kwh, 0))>
                                <span class="bar-chart__bar" style=format!("height: {:.0}%", bar.percent)></span>
                                <span class="bar-chart__label">{bar.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
pub fn CustomerSites() -> impl IntoView {
    let rows: Vec<Row> = for_customer(DEMO_CUSTOMER_ID)
        .iter()
        .map(|s| {
            vec![
                s.name.to_owned(),
                s.location.to_owned(),
                format!("{} kW", format_number(s.output_kw, 1)),
                s.status.label().to_owned(),
            ]
        })
        .collect();
    let columns = vec![Column::text("Site"), Column::text("Location"), Column::text("Output"), Column::status("Status")];

    view! {
        <PageHeader title="Sites"/>
        <Card>
            <DataTable columns=columns rows=rows/>
        </Card>
    }
}

#[component]
pub fn CustomerBilling() -> impl IntoView {
    let columns = vec![Column::text("Invoice"), Column::text("Period"), Column::text("Amount"), Column::status("Status")];

    view! {
        <PageHeader title="Billing"/>
        <div class="stat-row">
            <div class="stat-card">
                <span class="stat-card__label">"Outstanding"</span>
                <span class="stat-card__value">{format_cents(outstanding_cents(INVOICES))}</span>
            </div>
        </div>
        <Card title="Invoices">
            <DataTable columns=columns rows=invoice_rows(INVOICES)/>
        </Card>
    }
}

#[component]
pub fn CustomerSupport() -> impl IntoView {
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_ticket(&subject.get(), &body.get()) {
            Ok(()) => {
                leptos::logging::log!("support ticket submitted: {}", subject.get());
                sent.set(true);
                info.set(String::new());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <PageHeader title="Support"/>
        <Card title="Open a ticket">
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="support-form__done">"Thanks. An engineer will reply within one business day."</p> }
            >
                <form class="support-form" on:submit=on_submit>
                    <input
                        class="support-form__input"
                        type="text"
                        placeholder="Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                    <textarea
                        class="support-form__input"
                        placeholder="What is happening?"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                    <button class="button button--primary" type="submit">"Submit"</button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="support-form__error">{move || info.get()}</p>
            </Show>
        </Card>
    }
}

#[component]
pub fn CustomerSettings() -> impl IntoView {
    let monthly_report = RwSignal::new(true);

    view! {
        <PageHeader title="Settings"/>
        <Card title="Account">
            <p>{account_name()}</p>
            <label class="settings-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || monthly_report.get()
                    on:change=move |_| monthly_report.update(|v| *v = !*v)
                />
                "Email me a monthly generation report"
            </label>
            <Button variant=ButtonVariant::Ghost href="/support">"Need help?"</Button>
        </Card>
    }
}
