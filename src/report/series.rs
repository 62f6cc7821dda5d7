//! Pivots monthly data points into axis-aligned series for chart rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, MonthKey};
use crate::report::aggregation::MonthlyDataPoint;

/// Per-category totals aligned to a shared month axis.
///
/// `values` has one entry per axis month; `None` marks a month where the
/// category has no data point. Gaps stay gaps, they are not zeros.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySeries {
    pub category: Category,
    pub values: Vec<Option<f64>>,
}

/// Month axis plus one series per observed category, in fixed category order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartModel {
    pub months: Vec<MonthKey>,
    pub series: Vec<CategorySeries>,
}

impl ChartModel {
    /// Builds the chart model from aggregation output.
    ///
    /// Accepts points in any order; the axis is the sorted set of distinct
    /// months present. Categories with no points get no series.
    pub fn from_points(points: &[MonthlyDataPoint]) -> Self {
        let mut months: Vec<MonthKey> = points.iter().map(|point| point.month).collect();
        months.sort();
        months.dedup();

        let totals: BTreeMap<(MonthKey, Category), f64> = points
            .iter()
            .map(|point| ((point.month, point.category), point.total))
            .collect();

        let series = Category::ALL
            .into_iter()
            .filter(|category| points.iter().any(|point| point.category == *category))
            .map(|category| CategorySeries {
                category,
                values: months
                    .iter()
                    .map(|month| totals.get(&(*month, category)).copied())
                    .collect(),
            })
            .collect();

        Self { months, series }
    }

    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionRecord;
    use crate::report::aggregation::MonthlyAggregator;
    use chrono::NaiveDate;

    fn record(
        year: i32,
        month: u32,
        day: u32,
        amount: f64,
        category: Category,
    ) -> TransactionRecord {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        TransactionRecord::new(date, amount, category).expect("valid amount")
    }

    #[test]
    fn axis_is_sorted_and_distinct() {
        let points = MonthlyAggregator::aggregate(&[
            record(2025, 2, 1, 20.0, Category::Expense),
            record(2025, 1, 3, 10.0, Category::Income),
            record(2025, 1, 9, 15.0, Category::Expense),
        ]);
        let chart = ChartModel::from_points(&points);
        assert_eq!(
            chart.months,
            vec![
                MonthKey { year: 2025, month: 1 },
                MonthKey { year: 2025, month: 2 },
            ]
        );
    }

    #[test]
    fn missing_months_stay_gaps() {
        let points = MonthlyAggregator::aggregate(&[
            record(2025, 1, 3, 10.0, Category::Income),
            record(2025, 2, 1, 20.0, Category::Expense),
        ]);
        let chart = ChartModel::from_points(&points);

        let income = &chart.series[0];
        assert_eq!(income.category, Category::Income);
        assert_eq!(income.values, vec![Some(10.0), None]);

        let expense = &chart.series[1];
        assert_eq!(expense.category, Category::Expense);
        assert_eq!(expense.values, vec![None, Some(20.0)]);
    }

    #[test]
    fn unobserved_category_has_no_series() {
        let points = MonthlyAggregator::aggregate(&[record(2025, 1, 3, 10.0, Category::Income)]);
        let chart = ChartModel::from_points(&points);
        assert_eq!(chart.series.len(), 1);
        assert!(chart.series.iter().all(|s| s.category != Category::Savings));
    }

    #[test]
    fn empty_points_build_an_empty_model() {
        let chart = ChartModel::from_points(&[]);
        assert!(chart.is_empty());
        assert!(chart.series.is_empty());
    }
}
