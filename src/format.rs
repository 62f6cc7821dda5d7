//! Presentation-boundary formatting for totals and chart axis labels.
//!
//! Aggregation keeps raw sums; rounding happens here and only here.

use serde::{Deserialize, Serialize};

use crate::domain::MonthKey;

/// Pure formatting preferences handed in by the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Fraction digits shown for totals.
    pub precision: u8,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            precision: 2,
        }
    }
}

/// Formats an aggregated total for display.
///
/// Amounts are non-negative magnitudes, so there is no sign handling.
pub fn format_amount(value: f64, options: &FormatOptions) -> String {
    let mut body = format!("{:.*}", options.precision as usize, value);
    if options.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &options.decimal_separator.to_string());
        }
    }
    match body.find(options.decimal_separator) {
        Some(pos) => {
            let grouped = group_digits(&body[..pos], options.grouping_separator);
            format!("{}{}", grouped, &body[pos..])
        }
        None => group_digits(&body, options.grouping_separator),
    }
}

/// Short chart-axis label for a month, e.g. `Jan 2025`.
pub fn axis_label(month: MonthKey) -> String {
    format!("{} {}", month_label(month.month), month.year)
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
