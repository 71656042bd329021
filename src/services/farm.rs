//! Farm service

use tracing::debug;

use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{Farm, FarmId, NewFarm};
use crate::storage::Store;

/// Service for farm management
pub struct FarmService<'a> {
    store: &'a Store,
}

impl<'a> FarmService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all farms, ordered by id
    pub fn list(&self) -> FarmdeskResult<Vec<Farm>> {
        self.store.farms.get_all()
    }

    pub fn get(&self, id: FarmId) -> FarmdeskResult<Farm> {
        self.store.farms.get_by_id(id)
    }

    /// Find a farm by id ("3" or "farm-3") or by name (case-insensitive)
    pub fn find(&self, identifier: &str) -> FarmdeskResult<Option<Farm>> {
        if let Ok(id) = identifier.parse::<FarmId>() {
            if let Some(farm) = self.store.farms.get(id)? {
                return Ok(Some(farm));
            }
        }
        let wanted = identifier.trim();
        Ok(self
            .store
            .farms
            .filter(|f| f.name.eq_ignore_ascii_case(wanted))?
            .into_iter()
            .next())
    }

    pub fn create(&self, fields: NewFarm) -> FarmdeskResult<Farm> {
        fields
            .clone()
            .into_farm(FarmId::new(1))
            .validate()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))?;

        let farm = self.store.farms.insert_new(|id| fields.into_farm(id))?;
        debug!(id = %farm.id, name = %farm.name, "farm created");
        Ok(farm)
    }

    /// Replace the editable fields of a farm
    pub fn update(&self, id: FarmId, fields: NewFarm) -> FarmdeskResult<Farm> {
        let existing = self.get(id)?;
        let mut farm = fields.into_farm(id);
        farm.created_at = existing.created_at;
        farm.validate()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))?;

        self.store.farms.upsert(farm.clone())?;
        debug!(id = %farm.id, "farm updated");
        Ok(farm)
    }

    pub fn delete(&self, id: FarmId) -> FarmdeskResult<bool> {
        let deleted = self.store.farms.delete(id)?;
        debug!(id = %id, "farm deleted");
        Ok(deleted)
    }

    pub fn count(&self) -> FarmdeskResult<usize> {
        self.store.farms.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_ids() {
        let store = Store::new();
        let service = FarmService::new(&store);

        let a = service.create(NewFarm::new("  North  ", "Iowa", 120.0)).unwrap();
        let b = service.create(NewFarm::new("South", "", 0.0)).unwrap();

        assert_eq!(a.id, FarmId::new(1));
        assert_eq!(a.name, "North");
        assert_eq!(b.id, FarmId::new(2));
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_create_validation() {
        let store = Store::new();
        let service = FarmService::new(&store);

        let err = service.create(NewFarm::new("   ", "", 1.0)).unwrap_err();
        assert!(err.is_validation());
        let err = service.create(NewFarm::new("Ok", "", -4.0)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_update_keeps_created_at() {
        let store = Store::new();
        let service = FarmService::new(&store);
        let farm = service.create(NewFarm::new("Old", "", 10.0)).unwrap();

        let updated = service
            .update(farm.id, NewFarm::new("New", "Ohio", 12.5))
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.created_at, farm.created_at);

        let err = service
            .update(FarmId::new(99), NewFarm::new("x", "", 1.0))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_by_id_or_name() {
        let store = Store::new();
        let service = FarmService::new(&store);
        service.create(NewFarm::new("Willow Creek", "", 1.0)).unwrap();

        assert!(service.find("1").unwrap().is_some());
        assert!(service.find("farm-1").unwrap().is_some());
        assert!(service.find("willow creek").unwrap().is_some());
        assert!(service.find("Elsewhere").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let store = Store::new();
        let service = FarmService::new(&store);
        let farm = service.create(NewFarm::new("Temp", "", 1.0)).unwrap();

        assert!(service.delete(farm.id).unwrap());
        assert!(service.delete(farm.id).unwrap_err().is_not_found());
    }
}
