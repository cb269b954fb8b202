//! Easing for animated stat counters.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Default animation length for stat cards.
pub const COUNTER_DURATION_MS: f64 = 1200.0;

/// Frame interval used by the counter loop (about 60 fps).
pub const COUNTER_FRAME_MS: u32 = 16;

/// Ease-out-cubic progress for `t` in `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Displayed value `elapsed_ms` into an animation that ends at `target`.
///
/// Starts at zero and lands exactly on `target` once `elapsed_ms` reaches
/// `duration_ms`. A non-positive duration jumps straight to `target`.
pub fn counter_value(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    target * ease_out_cubic(elapsed_ms / duration_ms)
}

/// Render `value` with `decimals` places and thousands separators.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_owned(), Some(f.to_owned())),
        None => (formatted.clone(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
