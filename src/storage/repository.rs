//! Generic in-memory repository
//!
//! Every entity collection is an integer-keyed map behind an `RwLock`. Reads
//! hand out clones, so callers always work on a snapshot and never hold the
//! lock while computing.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{Crop, CropId, Expense, ExpenseId, Farm, FarmId, Task, TaskId};

/// A record that can live in a [`Repository`]
pub trait Record: Clone {
    type Id: Copy + fmt::Display + From<u32> + Into<u32>;

    /// Entity name used in "not found" errors
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
}

impl Record for Farm {
    type Id = FarmId;
    const ENTITY: &'static str = "Farm";

    fn id(&self) -> FarmId {
        self.id
    }
}

impl Record for Crop {
    type Id = CropId;
    const ENTITY: &'static str = "Crop";

    fn id(&self) -> CropId {
        self.id
    }
}

impl Record for Task {
    type Id = TaskId;
    const ENTITY: &'static str = "Task";

    fn id(&self) -> TaskId {
        self.id
    }
}

impl Record for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }
}

/// Integer-keyed collection of one entity type
pub struct Repository<T: Record> {
    data: RwLock<BTreeMap<u32, T>>,
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> FarmdeskResult<RwLockReadGuard<'_, BTreeMap<u32, T>>> {
        self.data
            .read()
            .map_err(|e| FarmdeskError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FarmdeskResult<RwLockWriteGuard<'_, BTreeMap<u32, T>>> {
        self.data
            .write()
            .map_err(|e| FarmdeskError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn key(id: T::Id) -> u32 {
        id.into()
    }

    fn not_found(id: T::Id) -> FarmdeskError {
        FarmdeskError::not_found(T::ENTITY, id.to_string())
    }

    /// Snapshot of every record, ordered by id
    pub fn get_all(&self) -> FarmdeskResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Snapshot of the records matching a predicate, ordered by id
    pub fn filter<F>(&self, predicate: F) -> FarmdeskResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect())
    }

    pub fn get(&self, id: T::Id) -> FarmdeskResult<Option<T>> {
        Ok(self.read()?.get(&Self::key(id)).cloned())
    }

    /// Like [`Repository::get`], but a missing id is an error
    pub fn get_by_id(&self, id: T::Id) -> FarmdeskResult<T> {
        self.get(id)?.ok_or_else(|| Self::not_found(id))
    }

    pub fn exists(&self, id: T::Id) -> FarmdeskResult<bool> {
        Ok(self.read()?.contains_key(&Self::key(id)))
    }

    /// The id the next inserted record will get: max existing id + 1, or 1
    pub fn next_id(&self) -> FarmdeskResult<T::Id> {
        Ok(Self::next_key(&*self.read()?)?.into())
    }

    fn next_key(data: &BTreeMap<u32, T>) -> FarmdeskResult<u32> {
        match data.keys().next_back() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                FarmdeskError::Storage(format!("{} id space exhausted", T::ENTITY))
            }),
        }
    }

    /// Insert a new record built around a freshly assigned id
    ///
    /// Id assignment and insertion happen under one write lock.
    pub fn insert_new<F>(&self, build: F) -> FarmdeskResult<T>
    where
        F: FnOnce(T::Id) -> T,
    {
        let mut data = self.write()?;
        let key = Self::next_key(&data)?;
        let record = build(key.into());
        data.insert(key, record.clone());
        Ok(record)
    }

    /// Insert or replace a record under its own id
    pub fn upsert(&self, record: T) -> FarmdeskResult<()> {
        self.write()?.insert(Self::key(record.id()), record);
        Ok(())
    }

    /// Apply a change to an existing record and return the updated copy
    pub fn update<F>(&self, id: T::Id, change: F) -> FarmdeskResult<T>
    where
        F: FnOnce(&mut T),
    {
        let mut data = self.write()?;
        let record = data.get_mut(&Self::key(id)).ok_or_else(|| Self::not_found(id))?;
        change(record);
        Ok(record.clone())
    }

    /// Remove a record; a missing id is an error
    pub fn delete(&self, id: T::Id) -> FarmdeskResult<bool> {
        match self.write()?.remove(&Self::key(id)) {
            Some(_) => Ok(true),
            None => Err(Self::not_found(id)),
        }
    }

    pub fn count(&self) -> FarmdeskResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn clear(&self) -> FarmdeskResult<()> {
        self.write()?.clear();
        Ok(())
    }
}
