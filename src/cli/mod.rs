//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod crop;
pub mod expense;
pub mod farm;
pub mod report;
pub mod task;

pub use crop::{handle_crop_command, CropCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use farm::{handle_farm_command, FarmCommands};
pub use report::{handle_report_command, ReportCommands};
pub use task::{handle_task_command, TaskCommands};

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::FarmId;
use crate::services::FarmService;
use crate::storage::{SeedData, Store};

/// Build the store from a seed file, or from the sample data when the file
/// does not exist
pub fn load_store(seed_path: &Path, today: NaiveDate) -> FarmdeskResult<Store> {
    let seed = if seed_path.exists() {
        SeedData::load(seed_path)?
    } else {
        info!(path = %seed_path.display(), "seed file not found, using sample data");
        SeedData::sample(today)
    };
    Store::with_seed(seed)
}

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date_arg(value: &str, what: &str) -> FarmdeskResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FarmdeskError::Validation(format!(
            "Invalid {} date: {}. Use YYYY-MM-DD",
            what, value
        ))
    })
}

/// Resolve a farm given by id or name
pub(crate) fn resolve_farm_arg(store: &Store, identifier: &str) -> FarmdeskResult<FarmId> {
    FarmService::new(store)
        .find(identifier)?
        .map(|farm| farm.id)
        .ok_or_else(|| FarmdeskError::farm_not_found(identifier))
}
