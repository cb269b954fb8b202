use super::*;

// =============================================================
// ease_out_cubic
// =============================================================

#[test]
fn ease_endpoints() {
    assert!(ease_out_cubic(0.0).abs() < f64::EPSILON);
    assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn ease_clamps_out_of_range() {
    assert!(ease_out_cubic(-1.0).abs() < f64::EPSILON);
    assert!((ease_out_cubic(2.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn ease_front_loads_progress() {
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn ease_is_monotonic() {
    let mut last = 0.0;
    for i in 1..=100 {
        let v = ease_out_cubic(f64::from(i) / 100.0);
        assert!(v >= last);
        last = v;
    }
}

// =============================================================
// counter_value
// =============================================================

#[test]
fn counter_starts_at_zero() {
    assert!(counter_value(500.0, 0.0, 1000.0).abs() < f64::EPSILON);
}

#[test]
fn counter_lands_exactly_on_target() {
    assert!((counter_value(547.9, 1000.0, 1000.0) - 547.9).abs() < f64::EPSILON);
    assert!((counter_value(547.9, 5000.0, 1000.0) - 547.9).abs() < f64::EPSILON);
}

#[test]
fn counter_zero_duration_jumps_to_target() {
    assert!((counter_value(42.0, 0.0, 0.0) - 42.0).abs() < f64::EPSILON);
}

#[test]
fn counter_midpoint_uses_easing() {
    assert!((counter_value(100.0, 500.0, 1000.0) - 87.5).abs() < 1e-9);
}

// =============================================================
// format_number
// =============================================================

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    assert_eq!(format_number(999.0, 0), "999");
    assert_eq!(format_number(1000.0, 0), "1,000");
}

#[test]
fn format_number_keeps_decimals() {
    assert_eq!(format_number(821.5, 1), "821.5");
    assert_eq!(format_number(12_345.678, 2), "12,345.68");
}

#[test]
fn format_number_negative_values() {
    assert_eq!(format_number(-1500.0, 0), "-1,500");
    assert_eq!(format_number(-0.001, 1), "0.0");
}
