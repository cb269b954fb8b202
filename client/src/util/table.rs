//! Filtering and sorting for text data tables.
//!
//! Rows are plain display strings. Sorting compares numerically when both
//! cells read as numbers (`"1,250 kW"`, `"$49.00"`, `"87%"`) and falls back
//! to case-insensitive text order otherwise. In a mixed column every numeric
//! cell sorts ahead of every text cell.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

pub type Row = Vec<String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "\u{25B2}",
            Self::Descending => "\u{25BC}",
        }
    }
}

/// Current sort column, if any, and its direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: same column flips direction, a new column starts
    /// ascending.
    pub fn toggle(self, column: usize) -> Self {
        if self.column == Some(column) {
            Self { column: Some(column), direction: self.direction.flipped() }
        } else {
            Self { column: Some(column), direction: SortDirection::Ascending }
        }
    }
}

/// Rows with at least one cell containing `query`, ignoring case and
/// surrounding whitespace. An empty query keeps everything.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
        .cloned()
        .collect()
}

/// Stable in-place sort by `state`. No column means original order.
pub fn sort_rows(rows: &mut [Row], state: SortState) {
    let Some(column) = state.column else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = compare_cells(cell(a, column), cell(b, column));
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn cell(row: &Row, column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}

/// Numeric cells order before text cells so mixed columns stay a total order.
fn compare_cells(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Numeric reading of a display cell: first whitespace-separated token with
/// currency, percent, and thousands separators stripped.
pub fn numeric_value(cell: &str) -> Option<f64> {
    let token = cell.split_whitespace().next()?;
    let cleaned: String = token.chars().filter(|c| !matches!(c, '$' | ',' | '%')).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
