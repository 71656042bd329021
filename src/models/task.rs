//! Task model
//!
//! Farm work items with an optional due date. Urgency is derived from the due
//! date alone, see `analytics::temporal`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates;
use super::ids::{CropId, FarmId, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "Id")]
    pub id: TaskId,

    pub farm_id: FarmId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<CropId>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, with = "dates::lenient_option")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: TaskId, farm_id: FarmId, title: impl Into<String>) -> Self {
        Self {
            id,
            farm_id,
            crop_id: None,
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: TaskPriority::Medium,
            completed: false,
            completed_at: None,
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Mark the task done, stamping the completion time
    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title cannot be empty"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_sets_timestamp() {
        let mut task = Task::new(TaskId::new(1), FarmId::new(1), "Irrigate north field");
        assert!(!task.completed);
        task.complete();
        assert!(task.completed);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_validation() {
        let task = Task::new(TaskId::new(1), FarmId::new(1), "   ");
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyTitle));
    }

    #[test]
    fn test_deserialize_without_due_date() {
        let task: Task =
            serde_json::from_str(r#"{"Id": 5, "farmId": 2, "title": "Fix fence"}"#).unwrap();
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, TaskPriority::Medium);
    }
}
