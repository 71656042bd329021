//! Expense list filtering

use chrono::NaiveDate;

use crate::models::{Expense, ExpenseCategory, FarmId};

/// Criteria for narrowing an expense list; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub farm_id: Option<FarmId>,
    /// Inclusive lower bound
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_farm(mut self, farm_id: FarmId) -> Self {
        self.farm_id = Some(farm_id);
        self
    }

    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Check if an expense matches this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(farm_id) = self.farm_id {
            if expense.farm_id != farm_id {
                return false;
            }
        }
        if let Some(start) = self.start {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if expense.date > end {
                return false;
            }
        }
        true
    }

    /// Matching expenses, newest first; ties keep the higher id first
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let mut matched: Vec<Expense> = expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expenses() -> Vec<Expense> {
        let e = |id: u32, farm: u32, cat, date| {
            Expense::new(ExpenseId::new(id), FarmId::new(farm), cat, Money::from_units(10), date)
        };
        vec![
            e(1, 1, ExpenseCategory::Seeds, ymd(2024, 3, 1)),
            e(2, 1, ExpenseCategory::Fuel, ymd(2024, 3, 31)),
            e(3, 2, ExpenseCategory::Fuel, ymd(2024, 4, 1)),
            e(4, 2, ExpenseCategory::Seeds, ymd(2024, 2, 29)),
        ]
    }

    fn ids(list: &[Expense]) -> Vec<u32> {
        list.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn test_empty_filter_sorts_newest_first() {
        let result = ExpenseFilter::new().apply(&expenses());
        assert_eq!(ids(&result), [3, 2, 1, 4]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let filter = ExpenseFilter::new().with_range(Some(ymd(2024, 3, 1)), Some(ymd(2024, 3, 31)));
        assert_eq!(ids(&filter.apply(&expenses())), [2, 1]);
    }

    #[test]
    fn test_category_and_farm() {
        let filter = ExpenseFilter::new()
            .with_category(ExpenseCategory::Fuel)
            .with_farm(FarmId::new(2));
        assert_eq!(ids(&filter.apply(&expenses())), [3]);
    }

    #[test]
    fn test_open_ended_range() {
        let filter = ExpenseFilter::new().with_range(None, Some(ymd(2024, 3, 1)));
        assert_eq!(ids(&filter.apply(&expenses())), [1, 4]);
    }
}
