//! Operator dashboard under `/admin`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page renders inside `AdminLayout`, which gates on `Role::Admin`
//! before any of these components mount. Tables are fed pre-formatted rows
//! built by the `*_rows` helpers so that formatting is testable off-DOM.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::badge::Badge;
use crate::components::card::Card;
use crate::components::dashboard_layout::{DashboardLayout, PageHeader};
use crate::components::data_table::{Column, DataTable};
use crate::components::site_map::SiteMap;
use crate::components::stat_card::StatCard;
use crate::data::accounts::{ALERTS, Alert, CUSTOMERS, Customer, Severity};
use crate::data::sites::{self, SITES, Site, online_count, total_output_kw};
use crate::state::auth::Role;
use crate::util::counter::format_number;
use crate::util::table::Row;

/// Share of nameplate capacity currently produced, in percent.
pub(crate) fn utilization_pct(site: &Site) -> f64 {
    if site.capacity_kw <= 0.0 {
        return 0.0;
    }
    site.output_kw / site.capacity_kw * 100.0
}

fn site_rows(sites: &[Site]) -> Vec<Row> {
    sites
        .iter()
        .map(|s| {
            vec![
                s.id.to_owned(),
                s.name.to_owned(),
                s.location.to_owned(),
                format!("{} kW", format_number(s.output_kw, 1)),
                format!("{} kW", format_number(s.capacity_kw, 0)),
                format!("{}%", format_number(utilization_pct(s), 0)),
                s.status.label().to_owned(),
            ]
        })
        .collect()
}

fn customer_rows(customers: &[Customer]) -> Vec<Row> {
    customers
        .iter()
        .map(|c| {
            vec![
                c.id.to_owned(),
                c.name.to_owned(),
                c.plan.to_owned(),
                c.sites.to_string(),
                format!("{} kWh", format_number(c.monthly_kwh, 0)),
                c.status.label().to_owned(),
            ]
        })
        .collect()
}

/// Most severe first; ties keep feed order.
fn alert_rows(alerts: &[Alert]) -> Vec<Row> {
    let mut ordered: Vec<&Alert> = alerts.iter().collect();
    ordered.sort_by(|a, b| b.severity.cmp(&a.severity));
    ordered
        .into_iter()
        .map(|a| {
            let site = sites::find(a.site_id).map_or(a.site_id, |s| s.name);
            vec![
                a.severity.label().to_owned(),
                site.to_owned(),
                a.message.to_owned(),
                a.raised_at.to_owned(),
            ]
        })
        .collect()
}

fn open_critical(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.severity == Severity::Critical).count()
}

fn site_columns() -> Vec<Column> {
    vec![
        Column::text("ID"),
        Column::text("Site"),
        Column::text("Location"),
        Column::text("Output"),
        Column::text("Capacity"),
        Column::text("Utilization"),
        Column::status("Status"),
    ]
}

fn alert_columns() -> Vec<Column> {
    vec![Column::status("Severity"), Column::text("Site"), Column::text("Message"), Column::text("Raised")]
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <DashboardLayout role=Role::Admin/> }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    #[allow(clippy::cast_precision_loss)]
    let online = online_count(SITES) as f64;
    #[allow(clippy::cast_precision_loss)]
    let critical = open_critical(ALERTS) as f64;
    #[allow(clippy::cast_precision_loss)]
    let customers = CUSTOMERS.len() as f64;

    view! {
        <PageHeader title="Fleet overview" subtitle="Every RiverWatts installation at a glance"/>
        <div class="stat-row">
            <StatCard label="Fleet output" value=total_output_kw(SITES) decimals=1 suffix=" kW"/>
            <StatCard label="Sites online" value=online hint=format!("of {} installed", SITES.len())/>
            <StatCard label="Customers" value=customers/>
            <StatCard label="Critical alerts" value=critical/>
        </div>
        <Card title="Site map">
            <SiteMap sites=SITES.to_vec() container_id="admin-site-map"/>
        </Card>
        <Card title="Recent alerts">
            <DataTable columns=alert_columns() rows=alert_rows(ALERTS)/>
        </Card>
    }
}

#[component]
pub fn AdminSites() -> impl IntoView {
    view! {
        <PageHeader title="Sites"/>
        <Card>
            <DataTable columns=site_columns() rows=site_rows(SITES) searchable=true empty_text="No sites match."/>
        </Card>
    }
}

#[component]
pub fn AdminCustomers() -> impl IntoView {
    let columns = vec![
        Column::text("ID"),
        Column::text("Customer"),
        Column::text("Plan"),
        Column::text("Sites"),
        Column::text("Monthly generation"),
        Column::status("Status"),
    ];
    view! {
        <PageHeader title="Customers"/>
        <Card>
            <DataTable columns=columns rows=customer_rows(CUSTOMERS) searchable=true empty_text="No customers match."/>
        </Card>
    }
}

#[component]
pub fn AdminAnalytics() -> impl IntoView {
    view! {
        <PageHeader title="Analytics" subtitle="Utilization by site"/>
        <div class="analytics-grid">
            {SITES
                .iter()
                .map(|site| {
                    let pct = utilization_pct(site);
                    view! {
                        <a class="analytics-tile" href=format!("/admin/analytics/{}", site.id)>
                            <span class="analytics-tile__name">{site.name}</span>
                            <span class="analytics-tile__bar" style=format!("width: {pct:.0}%")></span>
                            <span class="analytics-tile__value">{format!("{}%", format_number(pct, 0))}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// `/admin/analytics/:id` drill-down.
#[component]
pub fn AdminSiteAnalytics() -> impl IntoView {
    let params = use_params_map();
    let site = move || params.with(|p| p.get("id")).and_then(|id| sites::find(&id));

    move || match site() {
        Some(site) => view! {
            <PageHeader title=site.name subtitle=site.location/>
            <div class="stat-row">
                <StatCard label="Output" value=site.output_kw decimals=1 suffix=" kW"/>
                <StatCard label="Capacity" value=site.capacity_kw suffix=" kW"/>
                <StatCard label="Utilization" value=utilization_pct(site) suffix="%"/>
            </div>
            <Card title="Status">
                <Badge label=site.status.label()/>
            </Card>
            <a href="/admin/analytics">"Back to analytics"</a>
        }
        .into_any(),
        None => view! {
            <PageHeader title="Unknown site"/>
            <a href="/admin/analytics">"Back to analytics"</a>
        }
        .into_any(),
    }
}

#[component]
pub fn AdminAlerts() -> impl IntoView {
    view! {
        <PageHeader title="Alerts"/>
        <Card>
            <DataTable columns=alert_columns() rows=alert_rows(ALERTS) searchable=true empty_text="No alerts."/>
        </Card>
    }
}

#[component]
pub fn AdminSettings() -> impl IntoView {
    let email_alerts = RwSignal::new(true);
    let sms_alerts = RwSignal::new(false);

    view! {
        <PageHeader title="Settings"/>
        <Card title="Notifications">
            <label class="settings-toggle">
                <input type="checkbox" prop:checked=move || email_alerts.get() on:change=move |_| email_alerts.update(|v| *v = !*v)/>
                "Email critical alerts to on-call"
            </label>
            <label class="settings-toggle">
                <input type="checkbox" prop:checked=move || sms_alerts.get() on:change=move |_| sms_alerts.update(|v| *v = !*v)/>
                "SMS critical alerts"
            </label>
        </Card>
    }
}
