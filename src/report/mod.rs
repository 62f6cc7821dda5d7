//! Derived, chart-ready views over transaction records.

pub mod aggregation;
pub mod series;

pub use aggregation::{MonthlyAggregator, MonthlyDataPoint};
pub use series::{CategorySeries, ChartModel};
