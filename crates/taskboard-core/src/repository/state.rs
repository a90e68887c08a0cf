//! Task collection state: the single source of truth behind the repository lock.
//!
//! Every method here runs to completion on `&mut self`, so a caller holding the
//! lock never observes a half-applied change.

use chrono::NaiveDate;
use validator::ValidateArgs;

use crate::domain::filter::matches;
use crate::domain::validation::parse_due_date;
use crate::domain::{
    NewTask, SearchText, Task, TaskContext, TaskError, TaskFilter, TaskId, TaskPatch, TaskResult,
};

/// Tasks, newest-created first.
#[derive(Debug, Clone, Default)]
pub(super) struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Seed as given: the first element becomes the front of the list.
    pub(super) fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub(super) fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub(super) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(super) fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub(super) fn get(&self, id: TaskId) -> TaskResult<Task> {
        self.position(id)
            .map(|i| self.tasks[i].clone())
            .ok_or(TaskError::NotFound(id))
    }

    /// Validate, then prepend. `id` must not already be present.
    pub(super) fn create(
        &mut self,
        id: TaskId,
        input: NewTask,
        today: NaiveDate,
    ) -> TaskResult<Task> {
        input.validate_with_args(&TaskContext::on(today))?;

        debug_assert!(!self.contains(id), "id generator produced a duplicate id");
        let task = Task {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            status: input.status,
            priority: input.priority,
            due_date: parse_due_date(input.due_date.as_deref()),
            created_at: today,
        };
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Merge `patch` over the stored task, validate the result, then replace it.
    ///
    /// The due-date rule only applies to a date supplied by this patch; a stored
    /// date that has since passed is kept as is.
    pub(super) fn update(
        &mut self,
        id: TaskId,
        patch: TaskPatch,
        today: NaiveDate,
    ) -> TaskResult<Task> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        let current = &self.tasks[index];

        let merged = NewTask {
            title: patch.title.unwrap_or_else(|| current.title.clone()),
            description: patch
                .description
                .unwrap_or_else(|| current.description.clone()),
            status: patch.status.unwrap_or(current.status),
            priority: patch.priority.unwrap_or(current.priority),
            due_date: patch.due_date.clone().flatten(),
        };
        merged.validate_with_args(&TaskContext::on(today))?;

        let due_date = match patch.due_date {
            None => current.due_date,
            Some(_) => parse_due_date(merged.due_date.as_deref()),
        };
        let updated = Task {
            id: current.id,
            title: merged.title.trim().to_string(),
            description: merged.description.trim().to_string(),
            status: merged.status,
            priority: merged.priority,
            due_date,
            created_at: current.created_at,
        };
        self.tasks[index] = updated.clone();
        Ok(updated)
    }

    /// Same as an update that only sets the opposite status.
    pub(super) fn toggle_status(&mut self, id: TaskId, today: NaiveDate) -> TaskResult<Task> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        let status = self.tasks[index].status.toggled();
        self.update(id, TaskPatch::status(status), today)
    }

    pub(super) fn delete(&mut self, id: TaskId) -> TaskResult<()> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    pub(super) fn query(&self, filter: TaskFilter, search: &str) -> Vec<Task> {
        let search = SearchText::new(search);
        self.tasks
            .iter()
            .filter(|t| matches(t, filter, &search))
            .cloned()
            .collect()
    }
}
