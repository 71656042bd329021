//! Display formatting for terminal output
//!
//! Provides utilities for formatting farm records as tables and detail views.

pub mod category;
pub mod crop;
pub mod expense;
pub mod farm;
pub mod report;
pub mod task;

pub use category::{category_badge, category_style, CategoryStyle};
pub use crop::format_crop_list;
pub use expense::{format_expense_details, format_expense_list};
pub use farm::format_farm_list;
pub use task::format_task_list;

use chrono::NaiveDate;

use crate::analytics::temporal;
use crate::config::Settings;
use crate::models::Money;

/// Presentation preferences shared by every formatter
#[derive(Debug, Clone)]
pub struct DisplayContext {
    /// Reference day for relative labels and urgency markers
    pub today: NaiveDate,
    pub date_format: String,
    pub currency_symbol: String,
    pub due_soon_days: i64,
}

impl DisplayContext {
    pub fn new(today: NaiveDate) -> Self {
        Self::from_settings(&Settings::default(), today)
    }

    pub fn from_settings(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            today,
            date_format: settings.date_format.clone(),
            currency_symbol: settings.currency_symbol.clone(),
            due_soon_days: settings.due_soon_days,
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        temporal::format_date(date, &self.date_format)
    }

    /// Formatted date, or "-" when missing
    pub fn optional_date(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| self.date(d)).unwrap_or_else(|| "-".to_string())
    }
}
