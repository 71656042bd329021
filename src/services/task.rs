//! Task service

use chrono::NaiveDate;
use tracing::debug;

use super::ensure_farm_exists;
use crate::analytics::temporal;
use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{FarmId, Task, TaskId};
use crate::storage::Store;

/// Service for task management
pub struct TaskService<'a> {
    store: &'a Store,
}

impl<'a> TaskService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> FarmdeskResult<Vec<Task>> {
        self.store.tasks.get_all()
    }

    pub fn list_by_farm(&self, farm_id: FarmId) -> FarmdeskResult<Vec<Task>> {
        self.store.tasks.filter(|t| t.farm_id == farm_id)
    }

    pub fn list_pending(&self) -> FarmdeskResult<Vec<Task>> {
        self.store.tasks.filter(|t| !t.completed)
    }

    /// Open tasks that are overdue or due within `threshold_days` of `today`,
    /// earliest due date first
    pub fn list_urgent_on(&self, threshold_days: i64, today: NaiveDate) -> FarmdeskResult<Vec<Task>> {
        let mut urgent = self
            .store
            .tasks
            .filter(|t| temporal::is_urgent_on(t, threshold_days, today))?;
        urgent.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
        Ok(urgent)
    }

    pub fn get(&self, id: TaskId) -> FarmdeskResult<Task> {
        self.store.tasks.get_by_id(id)
    }

    /// Store a new task; the id on `task` is replaced by a fresh one
    pub fn create(&self, task: Task) -> FarmdeskResult<Task> {
        Self::validate(&task)?;
        ensure_farm_exists(self.store, task.farm_id)?;
        if let Some(crop_id) = task.crop_id {
            self.store.crops.get_by_id(crop_id)?;
        }

        let task = self.store.tasks.insert_new(|id| Task { id, ..task })?;
        debug!(id = %task.id, farm = %task.farm_id, "task created");
        Ok(task)
    }

    /// Apply a change to a task, rejecting it if the result is invalid
    pub fn update<F>(&self, id: TaskId, change: F) -> FarmdeskResult<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut task = self.get(id)?;
        change(&mut task);
        task.id = id;
        Self::validate(&task)?;
        ensure_farm_exists(self.store, task.farm_id)?;

        self.store.tasks.upsert(task.clone())?;
        debug!(id = %id, "task updated");
        Ok(task)
    }

    /// Mark a task completed, stamping the completion time
    ///
    /// Completing an already completed task keeps the first timestamp.
    pub fn complete(&self, id: TaskId) -> FarmdeskResult<Task> {
        let task = self.store.tasks.update(id, |t| {
            if !t.completed {
                t.complete();
            }
        })?;
        debug!(id = %id, "task completed");
        Ok(task)
    }

    pub fn delete(&self, id: TaskId) -> FarmdeskResult<bool> {
        let deleted = self.store.tasks.delete(id)?;
        debug!(id = %id, "task deleted");
        Ok(deleted)
    }

    fn validate(task: &Task) -> FarmdeskResult<()> {
        task.validate()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropId, Farm};
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_farm() -> Store {
        let store = Store::new();
        store.farms.upsert(Farm::new(FarmId::new(1), "Home")).unwrap();
        store
    }

    fn new_task(title: &str) -> Task {
        Task::new(TaskId::new(0), FarmId::new(1), title)
    }

    #[test]
    fn test_create_validation() {
        let store = store_with_farm();
        let service = TaskService::new(&store);

        assert!(service.create(new_task("")).unwrap_err().is_validation());

        let mut orphan = new_task("Fix fence");
        orphan.farm_id = FarmId::new(3);
        assert!(service.create(orphan).unwrap_err().is_not_found());

        let mut with_crop = new_task("Thin seedlings");
        with_crop.crop_id = Some(CropId::new(8));
        assert!(service.create(with_crop).unwrap_err().is_not_found());

        let task = service.create(new_task("Fix fence")).unwrap();
        assert_eq!(task.id, TaskId::new(1));
    }

    #[test]
    fn test_complete() {
        let store = store_with_farm();
        let service = TaskService::new(&store);
        let task = service.create(new_task("Mow")).unwrap();

        let done = service.complete(task.id).unwrap();
        assert!(done.completed);
        let stamp = done.completed_at.unwrap();

        let again = service.complete(task.id).unwrap();
        assert_eq!(again.completed_at, Some(stamp));
        assert!(service.list_pending().unwrap().is_empty());

        assert!(service.complete(TaskId::new(42)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_urgent() {
        let store = store_with_farm();
        let service = TaskService::new(&store);
        let today = ymd(2024, 6, 15);
        let due = |d: i64| today + Duration::days(d);

        service.create(new_task("later").with_due_date(due(10))).unwrap();
        service.create(new_task("tomorrow").with_due_date(due(1))).unwrap();
        service.create(new_task("late").with_due_date(due(-4))).unwrap();
        service.create(new_task("undated")).unwrap();
        let done = service.create(new_task("done").with_due_date(due(0))).unwrap();
        service.complete(done.id).unwrap();

        let titles: Vec<_> = service
            .list_urgent_on(2, today)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["late", "tomorrow"]);
    }

    #[test]
    fn test_update() {
        let store = store_with_farm();
        let service = TaskService::new(&store);
        let task = service.create(new_task("Order seed")).unwrap();

        let updated = service
            .update(task.id, |t| t.due_date = Some(ymd(2024, 7, 1)))
            .unwrap();
        assert_eq!(updated.due_date, Some(ymd(2024, 7, 1)));
        assert!(service.update(task.id, |t| t.title.clear()).is_err());
        assert_eq!(service.list_by_farm(FarmId::new(1)).unwrap().len(), 1);
    }
}
