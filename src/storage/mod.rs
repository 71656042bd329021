//! Storage layer for farmdesk
//!
//! An explicit in-memory store: constructed empty, seeded once, then queried
//! and mutated through the services. Nothing is written back to disk.

pub mod file_io;
pub mod repository;
pub mod seed;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use repository::{Record, Repository};
pub use seed::SeedData;

use tracing::{debug, info, warn};

use crate::error::FarmdeskResult;
use crate::models::{Crop, Expense, Farm, RawExpense, Task};

/// What a seeding pass loaded and skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub farms: usize,
    pub crops: usize,
    pub tasks: usize,
    pub expenses: usize,
    /// Expense rows that were malformed and left out
    pub skipped_expenses: usize,
}

/// Store coordinator that owns one repository per entity
#[derive(Default)]
pub struct Store {
    pub farms: Repository<Farm>,
    pub crops: Repository<Crop>,
    pub tasks: Repository<Task>,
    pub expenses: Repository<Expense>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store and seed it in one step
    pub fn with_seed(seed: SeedData) -> FarmdeskResult<Self> {
        let store = Self::new();
        store.seed(seed)?;
        Ok(store)
    }

    /// Load seed records into the store
    ///
    /// Records replace any existing record with the same id. Expense rows
    /// that fail conversion or validation are skipped and logged.
    pub fn seed(&self, seed: SeedData) -> FarmdeskResult<SeedSummary> {
        let mut summary = SeedSummary {
            farms: seed.farms.len(),
            crops: seed.crops.len(),
            tasks: seed.tasks.len(),
            ..SeedSummary::default()
        };

        for farm in seed.farms {
            self.farms.upsert(farm)?;
        }
        for crop in seed.crops {
            self.crops.upsert(crop)?;
        }
        for task in seed.tasks {
            self.tasks.upsert(task)?;
        }

        for (index, value) in seed.expenses.iter().enumerate() {
            let parsed = RawExpense::from_value(value).and_then(RawExpense::into_expense);
            match parsed {
                Ok(expense) if expense.validate().is_ok() => {
                    self.expenses.upsert(expense)?;
                    summary.expenses += 1;
                }
                Ok(expense) => {
                    warn!(row = index, id = %expense.id, "skipping invalid seed expense");
                    summary.skipped_expenses += 1;
                }
                Err(e) => {
                    warn!(row = index, error = %e, "skipping malformed seed expense");
                    summary.skipped_expenses += 1;
                }
            }
        }

        info!(
            farms = summary.farms,
            crops = summary.crops,
            tasks = summary.tasks,
            expenses = summary.expenses,
            skipped = summary.skipped_expenses,
            "store seeded"
        );
        Ok(summary)
    }

    /// Drop every record
    pub fn clear(&self) -> FarmdeskResult<()> {
        self.farms.clear()?;
        self.crops.clear()?;
        self.tasks.clear()?;
        self.expenses.clear()?;
        debug!("store cleared");
        Ok(())
    }
}
