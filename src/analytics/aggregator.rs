//! Expense aggregation
//!
//! Groups sanitised expenses by calendar month, calendar year and category.
//! Buckets are zero-seeded and rebuilt on every call; nothing is cached, so
//! the same input always produces the same output.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::sanitize::{sanitize, sanitize_value, SanitizedExpense};
use crate::models::{Expense, ExpenseCategory, Money};

/// Number of calendar years in the yearly view, current year included
pub const YEAR_WINDOW: i32 = 5;

/// Bucket labels of the monthly view
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CATEGORY_COUNT: usize = ExpenseCategory::ALL.len();

/// Total spent per category; categories without records are absent
pub type CategorySummary = BTreeMap<ExpenseCategory, Money>;

/// Scalar expense statistics relative to a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub this_month: Money,
    pub last_month: Money,
    pub this_year: Money,
    pub total: Money,
    pub category_summary: CategorySummary,
}

/// One category's values across an ordered run of buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySeries {
    pub category: ExpenseCategory,
    pub name: String,
    pub data: Vec<Money>,
}

impl CategorySeries {
    pub fn total(&self) -> Money {
        self.data.iter().sum()
    }
}

/// A labelled pie chart value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub category: ExpenseCategory,
    pub label: String,
    pub value: Money,
}

/// Aggregates over a set of expenses that passed sanitising
#[derive(Debug, Clone, Default)]
pub struct ExpenseAggregator {
    records: Vec<SanitizedExpense>,
    rejected: usize,
}

impl ExpenseAggregator {
    /// Build from typed expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self::collect(expenses.iter().map(sanitize))
    }

    /// Build from untyped JSON records
    pub fn from_values(values: &[Value]) -> Self {
        Self::collect(values.iter().map(sanitize_value))
    }

    fn collect(candidates: impl Iterator<Item = Option<SanitizedExpense>>) -> Self {
        let mut records = Vec::new();
        let mut rejected = 0;
        for candidate in candidates {
            match candidate {
                Some(record) => records.push(record),
                None => rejected += 1,
            }
        }
        if rejected > 0 {
            debug!(kept = records.len(), rejected, "excluded malformed expenses from aggregation");
        }
        Self { records, rejected }
    }

    pub fn records(&self) -> &[SanitizedExpense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many input records were dropped by sanitising
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn sum_where<F>(&self, predicate: F) -> Money
    where
        F: Fn(&SanitizedExpense) -> bool,
    {
        self.records
            .iter()
            .filter(|r| predicate(r))
            .map(|r| r.amount)
            .sum()
    }

    /// Grand total of every record
    pub fn total(&self) -> Money {
        self.sum_where(|_| true)
    }

    pub fn category_summary(&self) -> CategorySummary {
        let mut summary = CategorySummary::new();
        for record in &self.records {
            *summary.entry(record.category).or_insert_with(Money::zero) += record.amount;
        }
        summary
    }

    /// This month, last month, this year and all-time totals
    pub fn summary_stats(&self, now: NaiveDate) -> ExpenseStats {
        let (last_year, last_month) = previous_month(now.year(), now.month());
        let in_month =
            |r: &SanitizedExpense, y: i32, m: u32| r.date.year() == y && r.date.month() == m;

        ExpenseStats {
            this_month: self.sum_where(|r| in_month(r, now.year(), now.month())),
            last_month: self.sum_where(|r| in_month(r, last_year, last_month)),
            this_year: self.sum_where(|r| r.date.year() == now.year()),
            total: self.total(),
            category_summary: self.category_summary(),
        }
    }

    /// Twelve monthly buckets of `year`, one series per requested category
    pub fn monthly_series(&self, year: i32, categories: &[ExpenseCategory]) -> Vec<CategorySeries> {
        self.series(MONTH_LABELS.len(), categories, |r| {
            (r.date.year() == year).then(|| r.date.month0() as usize)
        })
    }

    /// Yearly buckets for the window ending at `current_year`, oldest first
    pub fn yearly_series(
        &self,
        current_year: i32,
        categories: &[ExpenseCategory],
    ) -> Vec<CategorySeries> {
        let first = first_window_year(current_year);
        self.series(YEAR_WINDOW as usize, categories, |r| {
            let offset = r.date.year() - first;
            (0..YEAR_WINDOW).contains(&offset).then_some(offset as usize)
        })
    }

    fn series<F>(
        &self,
        bucket_count: usize,
        categories: &[ExpenseCategory],
        bucket_of: F,
    ) -> Vec<CategorySeries>
    where
        F: Fn(&SanitizedExpense) -> Option<usize>,
    {
        let mut grid = vec![[Money::zero(); CATEGORY_COUNT]; bucket_count];
        for record in &self.records {
            if let Some(bucket) = bucket_of(record) {
                grid[bucket][record.category.index()] += record.amount;
            }
        }

        ExpenseCategory::ALL
            .into_iter()
            .filter(|c| categories.contains(c))
            .map(|category| CategorySeries {
                category,
                name: category.label().to_string(),
                data: grid.iter().map(|row| row[category.index()]).collect(),
            })
            .collect()
    }
}

/// Month labels in calendar order
pub fn month_labels() -> Vec<String> {
    MONTH_LABELS.iter().map(|m| m.to_string()).collect()
}

/// Year labels of the window ending at `current_year`, oldest first
pub fn year_labels(current_year: i32) -> Vec<String> {
    let first = first_window_year(current_year);
    (first..=current_year).map(|y| y.to_string()).collect()
}

fn first_window_year(current_year: i32) -> i32 {
    current_year - (YEAR_WINDOW - 1)
}

/// The month before `(year, month)`; January rolls back to December
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Positive category sums in canonical order, paired with their labels
pub fn pie_values(summary: &CategorySummary) -> Vec<PieSlice> {
    ExpenseCategory::ALL
        .into_iter()
        .filter_map(|category| {
            summary
                .get(&category)
                .filter(|value| value.is_positive())
                .map(|&value| PieSlice {
                    category,
                    label: category.label().to_string(),
                    value,
                })
        })
        .collect()
}

/// The bare values of [`pie_values`]
pub fn pie_values_raw(summary: &CategorySummary) -> Vec<Money> {
    pie_values(summary).into_iter().map(|s| s.value).collect()
}
