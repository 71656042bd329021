//! Derived views over farm records
//!
//! `temporal` classifies dates relative to today; `aggregator` and `chart`
//! turn expenses into sums and chart series. All of it is pure: callers pass
//! in snapshots and the store is never touched.

pub mod aggregator;
pub mod chart;
pub mod filter;
pub mod sanitize;
pub mod temporal;

pub use aggregator::{
    pie_values, pie_values_raw, CategorySeries, CategorySummary, ExpenseAggregator, ExpenseStats,
    PieSlice,
};
pub use chart::{ChartConfig, ChartData, ChartPeriod, ChartType};
pub use filter::ExpenseFilter;
pub use sanitize::{sanitize, sanitize_value, SanitizedExpense};
pub use temporal::{GrowthProgress, GrowthStage};
