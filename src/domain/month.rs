use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical calendar-month label used as an aggregation bucket key.
///
/// `month` is 1 through 12. The derived ordering is chronological (year,
/// then month), which is the order aggregation output sorts by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Buckets a date into its calendar month, using the date verbatim.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month; the representative date data points carry.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// `YYYY-MM` label; sorts the same way the key does.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn from_date_keeps_year_and_month() {
        let key = MonthKey::from_date(date(2025, 1, 17));
        assert_eq!(key, MonthKey { year: 2025, month: 1 });
    }

    #[test]
    fn ordering_is_chronological_across_year_boundary() {
        let december = MonthKey::from_date(date(2024, 12, 31));
        let january = MonthKey::from_date(date(2025, 1, 1));
        assert!(december < january);
    }

    #[test]
    fn first_day_anchors_the_month() {
        let key = MonthKey { year: 2025, month: 2 };
        assert_eq!(key.first_day(), date(2025, 2, 1));
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(MonthKey { year: 2025, month: 3 }.label(), "2025-03");
        assert_eq!(MonthKey { year: 987, month: 12 }.to_string(), "0987-12");
    }
}
