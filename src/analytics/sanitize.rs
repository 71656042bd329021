//! Single validation step in front of expense aggregation
//!
//! Only records that survive this step are ever bucketed. Dirty records are
//! dropped, never zero-filled.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::error::FarmdeskResult;
use crate::models::{Expense, ExpenseCategory, FarmId, Money, RawExpense};

/// The fields of an expense that aggregation needs, already validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizedExpense {
    /// Missing for ad hoc records that were never attached to a farm
    pub farm_id: Option<FarmId>,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub date: NaiveDate,
}

/// Project a typed expense; negative amounts are rejected
pub fn sanitize(expense: &Expense) -> Option<SanitizedExpense> {
    if expense.amount.is_negative() {
        debug!(id = %expense.id, amount = %expense.amount, "dropping expense with negative amount");
        return None;
    }
    Some(SanitizedExpense {
        farm_id: Some(expense.farm_id),
        category: expense.category,
        amount: expense.amount,
        date: expense.date,
    })
}

/// Project an untyped JSON record
///
/// Rejects non-objects, missing or unparseable dates, non-string or unknown
/// categories, and amounts that are missing, non-numeric, non-finite or
/// negative. An unusable `farmId` only clears the farm reference.
pub fn sanitize_value(value: &Value) -> Option<SanitizedExpense> {
    match try_sanitize_value(value) {
        Ok(sanitized) => Some(sanitized),
        Err(e) => {
            debug!(error = %e, "dropping malformed expense record");
            None
        }
    }
}

fn try_sanitize_value(value: &Value) -> FarmdeskResult<SanitizedExpense> {
    let raw = RawExpense::from_value(value)?;
    Ok(SanitizedExpense {
        category: raw.category()?,
        amount: raw.amount()?,
        date: raw.date()?,
        farm_id: raw.farm_id().ok(),
    })
}
