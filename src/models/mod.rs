//! Core data models for farmdesk
//!
//! This module contains the data structures of the farm domain: farms, crops,
//! tasks and expenses, plus the id and money types they share.

pub mod crop;
pub mod dates;
pub mod expense;
pub mod farm;
pub mod ids;
pub mod money;
pub mod task;

pub use crop::{Crop, CropStatus};
pub use expense::{Expense, ExpenseCategory, NewExpense, RawExpense};
pub use farm::{Farm, NewFarm};
pub use ids::{CropId, ExpenseId, FarmId, TaskId};
pub use money::Money;
pub use task::{Task, TaskPriority};
