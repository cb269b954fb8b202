use super::*;

fn active_hrefs(role: Option<Role>, path: &str) -> Vec<&'static str> {
    compose(role, path)
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.entry.href)
        .collect()
}

// =============================================================
// entries_for
// =============================================================

#[test]
fn entries_for_selects_table_by_role() {
    assert_eq!(entries_for(Some(Role::Admin)), ADMIN_NAV);
    assert_eq!(entries_for(Some(Role::Customer)), CUSTOMER_NAV);
    assert!(entries_for(None).is_empty());
}

#[test]
fn tables_start_with_their_dashboard_root() {
    assert_eq!(ADMIN_NAV[0].href, Role::Admin.dashboard_root());
    assert_eq!(CUSTOMER_NAV[0].href, Role::Customer.dashboard_root());
}

#[test]
fn table_hrefs_are_unique() {
    for table in [ADMIN_NAV, CUSTOMER_NAV] {
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.href, b.href);
            }
        }
    }
}

// =============================================================
// Rule 1: site root
// =============================================================

#[test]
fn root_entry_matches_only_root() {
    assert!(is_active("/", "/", Some(Role::Admin)));
    assert!(!is_active("/about", "/", Some(Role::Admin)));
    assert!(!is_active("/admin/dashboard", "/", None));
}

// =============================================================
// Rule 2: dashboard roots
// =============================================================

#[test]
fn admin_dashboard_active_on_exact_and_trailing_slash() {
    assert!(is_active("/admin/dashboard", "/admin/dashboard", Some(Role::Admin)));
    assert!(is_active("/admin/dashboard/", "/admin/dashboard", Some(Role::Admin)));
}

#[test]
fn admin_dashboard_not_active_on_subpage() {
    assert!(!is_active("/admin/dashboard/widgets", "/admin/dashboard", Some(Role::Admin)));
}

#[test]
fn customer_root_not_active_on_subpages() {
    assert!(is_active("/customer", "/customer", Some(Role::Customer)));
    assert!(is_active("/customer/", "/customer", Some(Role::Customer)));
    assert!(!is_active("/customer/energy", "/customer", Some(Role::Customer)));
    assert!(!is_active("/customer/billing/2024", "/customer", Some(Role::Customer)));
}

// =============================================================
// Rule 3: segment prefix
// =============================================================

#[test]
fn entry_active_on_exact_path() {
    assert!(is_active("/admin/sites", "/admin/sites", Some(Role::Admin)));
}

#[test]
fn entry_active_on_descendant_path() {
    assert!(is_active("/admin/analytics/detail", "/admin/analytics", Some(Role::Admin)));
}

#[test]
fn entry_prefix_requires_segment_boundary() {
    assert!(!is_active("/admin/sitesmap", "/admin/sites", Some(Role::Admin)));
    assert!(!is_active("/admin/site", "/admin/sites", Some(Role::Admin)));
}

#[test]
fn dashboard_root_of_other_role_is_prefix_matched() {
    assert!(is_active("/customer/energy", "/customer", Some(Role::Admin)));
}

// =============================================================
// compose
// =============================================================

#[test]
fn compose_admin_analytics_detail() {
    let items = compose(Some(Role::Admin), "/admin/analytics/detail");
    let analytics = items.iter().find(|i| i.entry.href == "/admin/analytics").unwrap();
    let dashboard = items.iter().find(|i| i.entry.href == "/admin/dashboard").unwrap();
    assert!(analytics.active);
    assert!(!dashboard.active);
}

#[test]
fn compose_admin_dashboard_trailing_slash() {
    assert_eq!(active_hrefs(Some(Role::Admin), "/admin/dashboard/"), vec!["/admin/dashboard"]);
}

#[test]
fn compose_customer_subpage_highlights_only_that_entry() {
    assert_eq!(active_hrefs(Some(Role::Customer), "/customer/billing"), vec!["/customer/billing"]);
}

#[test]
fn compose_preserves_table_order() {
    let labels: Vec<_> = compose(Some(Role::Customer), "/customer")
        .iter()
        .map(|i| i.entry.label)
        .collect();
    assert_eq!(labels, ["Overview", "Energy", "Sites", "Billing", "Support", "Settings"]);
}

#[test]
fn compose_without_role_is_empty() {
    assert!(compose(None, "/admin/dashboard").is_empty());
}

#[test]
fn compose_unknown_path_has_no_active_entry() {
    assert!(active_hrefs(Some(Role::Admin), "/pricing").is_empty());
}

#[test]
fn nav_icons_have_glyphs() {
    for entry in ADMIN_NAV.iter().chain(CUSTOMER_NAV).chain([&SITE_HOME]) {
        assert!(!entry.icon.glyph().is_empty());
    }
}
