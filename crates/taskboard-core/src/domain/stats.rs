//! Dashboard statistics derived from the task list.

use serde::{Deserialize, Serialize};

use super::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percent of completed tasks, rounded half up. 0 for an empty list.
    pub completion_rate: u8,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate: completion_rate(completed, total),
        }
    }
}

fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer form of round(completed / total * 100) with halves rounding up.
    let percent = (completed * 200 + total) / (total * 2);
    percent.min(100) as u8
}
