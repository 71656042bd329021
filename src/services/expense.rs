//! Expense service
//!
//! CRUD over the expense collection plus the entry points into aggregation.

use chrono::Utc;
use tracing::debug;

use super::ensure_farm_exists;
use crate::analytics::{ExpenseAggregator, ExpenseFilter};
use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{Expense, ExpenseId, FarmId, NewExpense};
use crate::storage::Store;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all expenses, ordered by id
    pub fn list(&self) -> FarmdeskResult<Vec<Expense>> {
        self.store.expenses.get_all()
    }

    pub fn list_by_farm(&self, farm_id: FarmId) -> FarmdeskResult<Vec<Expense>> {
        self.store.expenses.filter(|e| e.farm_id == farm_id)
    }

    /// Expenses matching `filter`, newest first
    pub fn search(&self, filter: &ExpenseFilter) -> FarmdeskResult<Vec<Expense>> {
        Ok(filter.apply(&self.list()?))
    }

    pub fn get(&self, id: ExpenseId) -> FarmdeskResult<Expense> {
        self.store.expenses.get_by_id(id)
    }

    pub fn create(&self, fields: NewExpense) -> FarmdeskResult<Expense> {
        ensure_farm_exists(self.store, fields.farm_id)?;
        Self::validate(&fields.clone().into_expense(ExpenseId::new(1)))?;

        let expense = self
            .store
            .expenses
            .insert_new(|id| fields.into_expense(id))?;
        debug!(id = %expense.id, amount = %expense.amount, "expense created");
        Ok(expense)
    }

    /// Replace the editable fields of an expense
    pub fn update(&self, id: ExpenseId, fields: NewExpense) -> FarmdeskResult<Expense> {
        let existing = self.get(id)?;
        ensure_farm_exists(self.store, fields.farm_id)?;

        let mut expense = fields.into_expense(id);
        expense.created_at = existing.created_at;
        expense.updated_at = Some(Utc::now());
        Self::validate(&expense)?;

        self.store.expenses.upsert(expense.clone())?;
        debug!(id = %id, "expense updated");
        Ok(expense)
    }

    pub fn delete(&self, id: ExpenseId) -> FarmdeskResult<bool> {
        let deleted = self.store.expenses.delete(id)?;
        debug!(id = %id, "expense deleted");
        Ok(deleted)
    }

    /// Aggregator over the expenses matching `filter`
    pub fn aggregator(&self, filter: &ExpenseFilter) -> FarmdeskResult<ExpenseAggregator> {
        Ok(ExpenseAggregator::from_expenses(&self.search(filter)?))
    }

    fn validate(expense: &Expense) -> FarmdeskResult<()> {
        expense
            .validate()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Farm, Money};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_farms() -> Store {
        let store = Store::new();
        store.farms.upsert(Farm::new(FarmId::new(1), "Home")).unwrap();
        store.farms.upsert(Farm::new(FarmId::new(2), "Away")).unwrap();
        store
    }

    fn fields(farm: u32, category: ExpenseCategory, units: i64, date: NaiveDate) -> NewExpense {
        NewExpense::new(FarmId::new(farm), category, Money::from_units(units), date)
    }

    #[test]
    fn test_create_and_get() {
        let store = store_with_farms();
        let service = ExpenseService::new(&store);

        let expense = service
            .create(fields(1, ExpenseCategory::Seeds, 100, ymd(2024, 3, 1)).with_description(" Corn "))
            .unwrap();
        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.description.as_deref(), Some("Corn"));
        assert_eq!(service.get(expense.id).unwrap(), expense);
        assert!(service.get(ExpenseId::new(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_validation() {
        let store = store_with_farms();
        let service = ExpenseService::new(&store);

        let negative = NewExpense::new(
            FarmId::new(1),
            ExpenseCategory::Fuel,
            Money::from_cents(-1),
            ymd(2024, 3, 1),
        );
        assert!(service.create(negative).unwrap_err().is_validation());

        let orphan = fields(9, ExpenseCategory::Fuel, 5, ymd(2024, 3, 1));
        assert!(service.create(orphan).unwrap_err().is_not_found());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let store = store_with_farms();
        let service = ExpenseService::new(&store);
        let expense = service
            .create(fields(1, ExpenseCategory::Labor, 80, ymd(2024, 5, 2)))
            .unwrap();

        let updated = service
            .update(expense.id, fields(2, ExpenseCategory::Labor, 95, ymd(2024, 5, 3)))
            .unwrap();
        assert_eq!(updated.farm_id, FarmId::new(2));
        assert_eq!(updated.created_at, expense.created_at);
        assert!(updated.updated_at.is_some());

        assert!(service.delete(expense.id).unwrap());
        assert!(service.delete(expense.id).unwrap_err().is_not_found());
        assert!(service
            .update(expense.id, fields(1, ExpenseCategory::Labor, 1, ymd(2024, 5, 3)))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_ids_after_delete() {
        let store = store_with_farms();
        let service = ExpenseService::new(&store);
        for units in [1, 2, 3] {
            service
                .create(fields(1, ExpenseCategory::Fuel, units, ymd(2024, 1, 1)))
                .unwrap();
        }
        service.delete(ExpenseId::new(2)).unwrap();
        let next = service
            .create(fields(1, ExpenseCategory::Fuel, 4, ymd(2024, 1, 1)))
            .unwrap();
        assert_eq!(next.id, ExpenseId::new(4));
    }

    #[test]
    fn test_search_and_aggregate() {
        let store = store_with_farms();
        let service = ExpenseService::new(&store);
        service.create(fields(1, ExpenseCategory::Seeds, 100, ymd(2024, 3, 1))).unwrap();
        service.create(fields(1, ExpenseCategory::Seeds, 50, ymd(2024, 3, 15))).unwrap();
        service.create(fields(2, ExpenseCategory::Fuel, 30, ymd(2024, 4, 1))).unwrap();

        assert_eq!(service.list_by_farm(FarmId::new(1)).unwrap().len(), 2);

        let filter = ExpenseFilter::new().with_farm(FarmId::new(1));
        let found = service.search(&filter).unwrap();
        assert_eq!(found[0].date, ymd(2024, 3, 15));

        let agg = service.aggregator(&ExpenseFilter::new()).unwrap();
        assert_eq!(agg.total(), Money::from_units(180));
        assert_eq!(agg.rejected(), 0);
    }
}
