//! Crop service

use tracing::debug;

use super::ensure_farm_exists;
use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{Crop, CropId, FarmId};
use crate::storage::Store;

/// Service for crop management
pub struct CropService<'a> {
    store: &'a Store,
}

impl<'a> CropService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> FarmdeskResult<Vec<Crop>> {
        self.store.crops.get_all()
    }

    pub fn list_by_farm(&self, farm_id: FarmId) -> FarmdeskResult<Vec<Crop>> {
        self.store.crops.filter(|c| c.farm_id == farm_id)
    }

    /// Crops that have not been harvested yet
    pub fn list_active(&self) -> FarmdeskResult<Vec<Crop>> {
        self.store.crops.filter(Crop::is_active)
    }

    pub fn get(&self, id: CropId) -> FarmdeskResult<Crop> {
        self.store.crops.get_by_id(id)
    }

    /// Store a new crop; the id on `crop` is replaced by a fresh one
    pub fn create(&self, crop: Crop) -> FarmdeskResult<Crop> {
        Self::validate(&crop)?;
        ensure_farm_exists(self.store, crop.farm_id)?;

        let crop = self
            .store
            .crops
            .insert_new(|id| Crop { id, ..crop })?;
        debug!(id = %crop.id, farm = %crop.farm_id, "crop created");
        Ok(crop)
    }

    /// Apply a change to a crop, rejecting it if the result is invalid
    pub fn update<F>(&self, id: CropId, change: F) -> FarmdeskResult<Crop>
    where
        F: FnOnce(&mut Crop),
    {
        let mut crop = self.get(id)?;
        change(&mut crop);
        crop.id = id;
        Self::validate(&crop)?;
        ensure_farm_exists(self.store, crop.farm_id)?;

        self.store.crops.upsert(crop.clone())?;
        debug!(id = %id, "crop updated");
        Ok(crop)
    }

    pub fn delete(&self, id: CropId) -> FarmdeskResult<bool> {
        let deleted = self.store.crops.delete(id)?;
        debug!(id = %id, "crop deleted");
        Ok(deleted)
    }

    fn validate(crop: &Crop) -> FarmdeskResult<()> {
        crop.validate()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropStatus, Farm};

    fn store_with_farm() -> Store {
        let store = Store::new();
        store.farms.upsert(Farm::new(FarmId::new(1), "Home")).unwrap();
        store
    }

    #[test]
    fn test_create_and_list_by_farm() {
        let store = store_with_farm();
        store.farms.upsert(Farm::new(FarmId::new(2), "Other")).unwrap();
        let service = CropService::new(&store);

        let corn = service
            .create(Crop::new(CropId::new(50), FarmId::new(1), "Corn"))
            .unwrap();
        service
            .create(Crop::new(CropId::new(0), FarmId::new(2), "Oats"))
            .unwrap();

        assert_eq!(corn.id, CropId::new(1));
        let home = service.list_by_farm(FarmId::new(1)).unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].name, "Corn");
    }

    #[test]
    fn test_create_requires_existing_farm() {
        let store = store_with_farm();
        let service = CropService::new(&store);

        let err = service
            .create(Crop::new(CropId::new(1), FarmId::new(7), "Rye"))
            .unwrap_err();
        assert!(err.is_not_found());

        let err = service
            .create(Crop::new(CropId::new(1), FarmId::new(1), " "))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_and_active() {
        let store = store_with_farm();
        let service = CropService::new(&store);
        let crop = service
            .create(Crop::new(CropId::new(1), FarmId::new(1), "Barley"))
            .unwrap();
        assert_eq!(service.list_active().unwrap().len(), 1);

        service
            .update(crop.id, |c| c.status = CropStatus::Harvested)
            .unwrap();
        assert!(service.list_active().unwrap().is_empty());

        // invalid change is not stored
        assert!(service.update(crop.id, |c| c.name.clear()).is_err());
        assert_eq!(service.get(crop.id).unwrap().name, "Barley");
    }
}
