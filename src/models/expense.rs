//! Expense model
//!
//! Expenses are recorded per farm against a fixed set of categories. Besides
//! the typed [`Expense`] this module holds [`RawExpense`], the lenient form
//! used for seed files and other untrusted input. `RawExpense` is the only
//! place where loosely-typed fields are checked and converted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::dates::{self, parse_calendar_date};
use super::ids::{ExpenseId, FarmId};
use super::money::Money;
use crate::error::{FarmdeskError, FarmdeskResult};

/// Expense category
///
/// The declaration order is the canonical order used for every chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Seeds,
    Fertilizer,
    Equipment,
    Labor,
    Fuel,
    Maintenance,
}

impl ExpenseCategory {
    /// The canonical category list, in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Seeds,
        Self::Fertilizer,
        Self::Equipment,
        Self::Labor,
        Self::Fuel,
        Self::Maintenance,
    ];

    /// Machine key, as stored in records
    pub fn key(&self) -> &'static str {
        match self {
            Self::Seeds => "seeds",
            Self::Fertilizer => "fertilizer",
            Self::Equipment => "equipment",
            Self::Labor => "labor",
            Self::Fuel => "fuel",
            Self::Maintenance => "maintenance",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seeds => "Seeds",
            Self::Fertilizer => "Fertilizer",
            Self::Equipment => "Equipment",
            Self::Labor => "Labor",
            Self::Fuel => "Fuel",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Position in the canonical list
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown expense category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A recorded farm expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(alias = "Id")]
    pub id: ExpenseId,

    /// The farm this expense was charged to
    pub farm_id: FarmId,

    pub category: ExpenseCategory,

    /// Amount spent; never negative
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Day the expense was incurred
    #[serde(with = "dates::lenient")]
    pub date: NaiveDate,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        farm_id: FarmId,
        category: ExpenseCategory,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            farm_id,
            category,
            amount,
            description: None,
            date,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if let Some(desc) = &self.description {
            if desc.len() > MAX_DESCRIPTION_LEN {
                return Err(ExpenseValidationError::DescriptionTooLong(desc.len()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

const MAX_DESCRIPTION_LEN: usize = 500;

/// The user-editable fields of an expense, used for create and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub farm_id: FarmId,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(farm_id: FarmId, category: ExpenseCategory, amount: Money, date: NaiveDate) -> Self {
        Self {
            farm_id,
            category,
            amount,
            description: None,
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Materialize into a record with the given id
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        let mut expense = Expense::new(id, self.farm_id, self.category, self.amount, self.date);
        expense.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        expense
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative ({})", amount)
            }
            Self::DescriptionTooLong(len) => write!(
                f,
                "Expense description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Untrusted expense record as it appears in seed files or client payloads
///
/// Every field is optional and loosely typed so that deserializing any JSON
/// object succeeds; the accessors decide whether a field is usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawExpense {
    #[serde(alias = "Id")]
    pub id: Option<Value>,
    pub farm_id: Option<Value>,
    pub category: Option<Value>,
    pub amount: Option<Value>,
    pub description: Option<Value>,
    pub date: Option<Value>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
}

impl RawExpense {
    /// Read a raw record out of an arbitrary JSON value
    ///
    /// Fails only when the value is not a JSON object.
    pub fn from_value(value: &Value) -> FarmdeskResult<Self> {
        if !value.is_object() {
            return Err(malformed("record is not an object"));
        }
        serde_json::from_value(value.clone()).map_err(|e| malformed(e.to_string()))
    }

    pub fn id(&self) -> FarmdeskResult<ExpenseId> {
        positive_int(self.id.as_ref(), "id").map(ExpenseId::new)
    }

    pub fn farm_id(&self) -> FarmdeskResult<FarmId> {
        positive_int(self.farm_id.as_ref(), "farmId").map(FarmId::new)
    }

    /// The category; must be a string naming a known category
    pub fn category(&self) -> FarmdeskResult<ExpenseCategory> {
        match &self.category {
            Some(Value::String(s)) => s
                .parse::<ExpenseCategory>()
                .map_err(|e| malformed(e.to_string())),
            Some(other) => Err(malformed(format!("category is not a string: {}", other))),
            None => Err(malformed("missing category")),
        }
    }

    /// The amount; must be a finite, non-negative number or numeric string
    pub fn amount(&self) -> FarmdeskResult<Money> {
        let value = match &self.amount {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| malformed(format!("amount out of range: {}", n)))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed(format!("amount is not numeric: {:?}", s)))?,
            Some(other) => return Err(malformed(format!("amount is not a number: {}", other))),
            None => return Err(malformed("missing amount")),
        };
        let amount = Money::from_decimal(value)
            .ok_or_else(|| malformed(format!("amount is not finite: {}", value)))?;
        if amount.is_negative() {
            return Err(malformed(format!("amount is negative: {}", amount)));
        }
        Ok(amount)
    }

    /// The calendar date; accepts plain dates and ISO timestamps
    pub fn date(&self) -> FarmdeskResult<NaiveDate> {
        match &self.date {
            Some(Value::String(s)) => {
                parse_calendar_date(s).ok_or_else(|| malformed(format!("unparseable date: {}", s)))
            }
            Some(other) => Err(malformed(format!("date is not a string: {}", other))),
            None => Err(malformed("missing date")),
        }
    }

    pub fn description(&self) -> Option<String> {
        match &self.description {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// Convert into a typed expense, failing on the first unusable field
    pub fn into_expense(self) -> FarmdeskResult<Expense> {
        let mut expense = Expense::new(
            self.id()?,
            self.farm_id()?,
            self.category()?,
            self.amount()?,
            self.date()?,
        );
        expense.description = self.description();
        if let Some(ts) = timestamp(self.created_at.as_ref()) {
            expense.created_at = ts;
        }
        expense.updated_at = timestamp(self.updated_at.as_ref());
        Ok(expense)
    }
}

fn malformed(reason: impl Into<String>) -> FarmdeskError {
    FarmdeskError::MalformedRecord(reason.into())
}

/// Integers may arrive as numbers or numeric strings
fn positive_int(value: Option<&Value>, field: &str) -> FarmdeskResult<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
        None => return Err(malformed(format!("missing {}", field))),
    };
    parsed
        .filter(|&v| v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| malformed(format!("invalid {}", field)))
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        _ => None,
    }
}
