//! Filter key + free-text search used by the task list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskPriority, TaskStatus};

/// Which subset of tasks a query returns.
///
/// Parses from the list page's dropdown values:
/// `all`, `pending`, `completed`, `high`, `medium`, `low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
    Priority(TaskPriority),
}

impl TaskFilter {
    /// Every filter key, in dropdown order.
    pub const KEYS: [TaskFilter; 6] = [
        TaskFilter::All,
        TaskFilter::Status(TaskStatus::Pending),
        TaskFilter::Status(TaskStatus::Completed),
        TaskFilter::Priority(TaskPriority::High),
        TaskFilter::Priority(TaskPriority::Medium),
        TaskFilter::Priority(TaskPriority::Low),
    ];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status == *status,
            TaskFilter::Priority(priority) => task.priority == *priority,
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFilter::All => f.write_str("all"),
            TaskFilter::Status(status) => write!(f, "{status}"),
            TaskFilter::Priority(priority) => write!(f, "{priority}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}' (expected one of: all, pending, completed, high, medium, low)")]
pub struct ParseFilterError(String);

impl FromStr for TaskFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "all" {
            return Ok(TaskFilter::All);
        }
        if let Ok(status) = key.parse::<TaskStatus>() {
            return Ok(TaskFilter::Status(status));
        }
        if let Ok(priority) = key.parse::<TaskPriority>() {
            return Ok(TaskFilter::Priority(priority));
        }
        Err(ParseFilterError(s.to_string()))
    }
}

impl TryFrom<String> for TaskFilter {
    type Error = ParseFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskFilter> for String {
    fn from(filter: TaskFilter) -> Self {
        filter.to_string()
    }
}

/// Case-insensitive substring search over title and description.
///
/// The needle is trimmed once at construction; an empty needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty()
            || task.title.to_lowercase().contains(&self.0)
            || task.description.to_lowercase().contains(&self.0)
    }
}

/// Both predicates of a list query.
pub fn matches(task: &Task, filter: TaskFilter, search: &SearchText) -> bool {
    filter.matches(task) && search.matches(task)
}
