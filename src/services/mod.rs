//! Service layer for farmdesk
//!
//! Services wrap the injected [`Store`] with validation and the
//! entity-specific queries the dashboard needs.

pub mod crop;
pub mod expense;
pub mod farm;
pub mod task;

pub use crop::CropService;
pub use expense::ExpenseService;
pub use farm::FarmService;
pub use task::TaskService;

use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::FarmId;
use crate::storage::Store;

/// Fail unless the referenced farm is in the store
pub(crate) fn ensure_farm_exists(store: &Store, farm_id: FarmId) -> FarmdeskResult<()> {
    if store.farms.exists(farm_id)? {
        Ok(())
    } else {
        Err(FarmdeskError::farm_not_found(farm_id.to_string()))
    }
}
