use super::*;

// =============================================================
// utilization_pct
// =============================================================

#[test]
fn utilization_is_output_over_capacity() {
    let site = sites::find("rw-002").unwrap();
    assert!((utilization_pct(site) - 547.9 / 600.0 * 100.0).abs() < 1e-9);
}

#[test]
fn utilization_of_zero_capacity_is_zero() {
    let mut site = *sites::find("rw-001").unwrap();
    site.capacity_kw = 0.0;
    assert!(utilization_pct(&site).abs() < f64::EPSILON);
}

// =============================================================
// row builders
// =============================================================

#[test]
fn site_rows_match_columns() {
    let rows = site_rows(SITES);
    assert_eq!(rows.len(), SITES.len());
    assert!(rows.iter().all(|r| r.len() == site_columns().len()));
    assert_eq!(rows[0], ["rw-001", "Cedar Rapids Weir", "Cedar River, IA", "212.4 kW", "250 kW", "85%", "Online"]);
}

#[test]
fn customer_rows_group_generation() {
    let rows = customer_rows(CUSTOMERS);
    assert_eq!(rows[1][4], "394,488 kWh");
    assert_eq!(rows[3][5], "Suspended");
}

#[test]
fn alert_rows_put_critical_first_and_name_sites() {
    let rows = alert_rows(ALERTS);
    assert_eq!(rows.len(), ALERTS.len());
    assert_eq!(rows[0][0], "Critical");
    assert_eq!(rows[0][1], "Roosevelt Island Strait");
    assert!(rows.iter().all(|r| r.len() == alert_columns().len()));
}

#[test]
fn alert_rows_fall_back_to_site_id() {
    let orphan = Alert { id: "al-x", site_id: "rw-999", severity: Severity::Info, message: "m", raised_at: "t" };
    assert_eq!(alert_rows(&[orphan])[0][1], "rw-999");
}

#[test]
fn alert_rows_keep_feed_order_within_severity() {
    let a = Alert { id: "a", site_id: "rw-001", severity: Severity::Warning, message: "first", raised_at: "t" };
    let b = Alert { id: "b", site_id: "rw-001", severity: Severity::Warning, message: "second", raised_at: "t" };
    let rows = alert_rows(&[a, b]);
    assert_eq!(rows[0][2], "first");
    assert_eq!(rows[1][2], "second");
}

#[test]
fn open_critical_counts_only_critical() {
    assert_eq!(open_critical(ALERTS), 1);
    assert_eq!(open_critical(&[]), 0);
}
