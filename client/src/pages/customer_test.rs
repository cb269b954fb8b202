use super::*;

#[test]
fn tallest_month_is_full_height() {
    let bars = generation_bars(&[("Jan", 50.0), ("Feb", 200.0), ("Mar", 100.0)]);
    assert_eq!(bars.iter().map(|b| b.percent).collect::<Vec<_>>(), [25.0, 100.0, 50.0]);
    assert_eq!(bars[1].label, "Feb");
}

#[test]
fn all_zero_months_render_flat() {
    let bars = generation_bars(&[("Jan", 0.0), ("Feb", 0.0)]);
    assert!(bars.iter().all(|b| b.percent == 0.0));
    assert!(generation_bars(&[]).is_empty());
}

#[test]
fn invoice_rows_format_amounts() {
    let rows = invoice_rows(INVOICES);
    assert_eq!(rows[0], ["inv-2405", "May 2024", "$1,849.00", "Due"]);
}

#[test]
fn outstanding_ignores_paid_invoices() {
    assert_eq!(outstanding_cents(INVOICES), 184_900);
    assert_eq!(outstanding_cents(&[]), 0);
}

#[test]
fn ticket_requires_subject_and_detail() {
    assert!(validate_ticket("  ", "the turbine is stuck").is_err());
    assert!(validate_ticket("Stuck rotor", "help").is_err());
    assert_eq!(validate_ticket("Stuck rotor", "the rotor stopped at noon"), Ok(()));
}

#[test]
fn demo_account_resolves() {
    assert_eq!(account_name(), "Heartland Municipal Power");
}
