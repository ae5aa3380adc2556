//! Cell formatting and selection summaries for the campaign table screen.

use indexmap::IndexMap;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::core::primitives::f64_to_decimal;

/// Formats a numeric cell with at most two decimals and `,` thousands
/// separators. Non-finite values render as `-`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    let Some(decimal) = f64_to_decimal(value) else {
        // Outside the decimal range; the fraction is irrelevant at that size.
        return group_thousands(&format!("{value:.0}"));
    };
    let rounded = decimal
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_owned();
    }
    group_thousands(&rounded.to_string())
}

fn group_thousands(plain: &str) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Time-of-day part of a `YYYY-MM-DD HH:MM` category key, used for axis and
/// zoom-slider labels. Keys without a space are returned unchanged.
#[must_use]
pub fn time_of_day_label(key: &str) -> &str {
    key.split_once(' ').map_or(key, |(_, time)| time)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u64,
    pub name: String,
    pub unit_name: String,
    pub cost: f64,
    #[serde(default)]
    pub metrics: IndexMap<String, f64>,
}

/// Which rows may join a batch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSelectionPolicy {
    pub min_cost: f64,
    pub disabled_reason: String,
}

impl Default for RowSelectionPolicy {
    fn default() -> Self {
        Self {
            min_cost: 20_000.0,
            disabled_reason: "Cost below 20k, batch operations are not allowed".to_owned(),
        }
    }
}

impl RowSelectionPolicy {
    #[must_use]
    pub fn is_selectable(&self, row: &TableRow) -> bool {
        row.cost >= self.min_cost
    }

    /// Tooltip shown on a disabled selection checkbox.
    #[must_use]
    pub fn disabled_reason(&self, row: &TableRow) -> Option<&str> {
        (!self.is_selectable(row)).then_some(self.disabled_reason.as_str())
    }

    #[must_use]
    pub fn retain_selectable<'a>(&self, rows: impl IntoIterator<Item = &'a TableRow>) -> Vec<&'a TableRow> {
        rows.into_iter().filter(|row| self.is_selectable(row)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub count: usize,
    pub total_cost: f64,
}

impl SelectionSummary {
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a TableRow>) -> Self {
        rows.into_iter().fold(
            Self {
                count: 0,
                total_cost: 0.0,
            },
            |acc, row| Self {
                count: acc.count + 1,
                total_cost: acc.total_cost + row.cost,
            },
        )
    }

    /// Full-width footer text; `None` when nothing is selected.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        (self.count > 0).then(|| {
            format!(
                "{} rows selected for batch operation, total cost {}",
                self.count,
                format_number(self.total_cost)
            )
        })
    }
}

/// Totals row pinned under the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub cost: f64,
    pub metrics: IndexMap<String, f64>,
}

/// Sums cost and every metric column; columns keep first-seen order.
#[must_use]
pub fn summary_row(rows: &[TableRow]) -> SummaryRow {
    let mut metrics = IndexMap::<String, f64>::new();
    let mut cost = 0.0;
    for row in rows {
        cost += row.cost;
        for (key, value) in &row.metrics {
            *metrics.entry(key.clone()).or_insert(0.0) += value;
        }
    }
    SummaryRow {
        label: format!("{} rows", rows.len()),
        cost,
        metrics,
    }
}
