//! Task entity and the inputs that create or change it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

use super::TaskId;
use super::validation::{TaskContext, validate_description, validate_due_date, validate_title};

/// Task status.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// The status a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// Task priority levels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A stored task.
///
/// `id` and `created_at` are assigned by the repository and never change.
/// Title and description are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Input for creating a task.
///
/// `due_date` is the raw form value (`YYYY-MM-DD`). An empty string means
/// "no due date". Validate with `validate_with_args(&TaskContext)`; the
/// context carries the date a due date may not precede.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(context = TaskContext)]
pub struct NewTask {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    #[validate(custom(function = "validate_due_date", use_context))]
    pub due_date: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Partial update. `None` leaves the field as it is.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<String>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldMessages;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use validator::ValidateArgs;

    #[test]
    fn defaults_match_new_form() {
        let input = NewTask::new("Buy milk", "Get milk from the store");
        assert_eq!(input.status, TaskStatus::Pending);
        assert_eq!(input.priority, TaskPriority::Medium);
        assert_eq!(input.due_date, None);
    }

    #[test]
    fn toggled_is_an_involution() {
        for status in TaskStatus::iter() {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn enums_use_lowercase_names() {
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
        assert_eq!(TaskPriority::from_str("high").unwrap(), TaskPriority::High);
        assert_eq!(
            serde_json::to_string(&TaskPriority::Low).unwrap(),
            "\"low\""
        );
    }

    #[test]
    fn validation_collects_every_rejected_field() {
        let context = TaskContext::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let input = NewTask::new("ab", "   ").with_due_date("2024-05-31");

        let errors = input.validate_with_args(&context).unwrap_err();

        assert_eq!(
            errors.messages(),
            vec![
                ("title", "Title must be at least 3 characters long"),
                ("description", "Description is required"),
                ("due_date", "Due date cannot be in the past"),
            ]
        );
    }

    #[test]
    fn blank_due_date_passes_validation() {
        let context = TaskContext::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let input = NewTask::new("Buy milk", "Get milk from the store").with_due_date("  ");

        assert!(input.validate_with_args(&context).is_ok());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::status(TaskStatus::Completed).is_empty());
    }

    #[test]
    fn task_serializes_with_camel_case_fields() {
        let task = Task {
            id: TaskId::from_u128(1),
            title: "Review code".to_string(),
            description: "Review the PR carefully".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2024-01-15");
        assert_eq!(json["createdAt"], "2024-01-10");
        assert_eq!(json["status"], "pending");
    }
}
