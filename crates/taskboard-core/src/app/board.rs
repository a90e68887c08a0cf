//! TaskBoard - 表示層が呼び出す app 層
//!
//! リポジトリの操作に、表示層が持つ hook（削除確認・成功通知）を組み合わせます。
//! リポジトリのエラーは握りつぶさず、そのまま呼び出し側に返します。

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::domain::filter::matches;
use crate::domain::{
    NewTask, SearchText, Task, TaskFilter, TaskId, TaskPatch, TaskResult, TaskStats,
};
use crate::ports::{AlwaysConfirm, Confirmation, NoopNotifier, Notice, Notifier};
use crate::repository::TaskRepository;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// The confirmation hook declined; the repository was not called.
    Cancelled,
}

/// One filtered view of the list plus the unfiltered size
/// ("Showing 2 of 4 tasks").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub total: usize,
}

#[derive(Clone)]
pub struct TaskBoard {
    repository: Arc<dyn TaskRepository>,
    confirmation: Arc<dyn Confirmation>,
    notifier: Arc<dyn Notifier>,
}

impl TaskBoard {
    /// Board that confirms every delete and sends no notices.
    pub fn new(repository: impl TaskRepository + 'static) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            repository,
            confirmation: Arc::new(AlwaysConfirm),
            notifier: Arc::new(NoopNotifier),
        }
    }

    pub fn with_confirmation(mut self, confirmation: impl Confirmation + 'static) -> Self {
        self.confirmation = Arc::new(confirmation);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn repository(&self) -> &Arc<dyn TaskRepository> {
        &self.repository
    }

    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: NewTask) -> TaskResult<Task> {
        let task = self.repository.create(input).await?;
        self.notifier.notify(Notice::Created(task.id));
        Ok(task)
    }

    #[instrument(skip(self, patch), fields(task_id = %id))]
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskResult<Task> {
        let task = self.repository.update(id, patch).await?;
        self.notifier.notify(Notice::Updated(id));
        Ok(task)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn toggle_task(&self, id: TaskId) -> TaskResult<Task> {
        let task = self.repository.toggle_status(id).await?;
        self.notifier.notify(Notice::Updated(id));
        Ok(task)
    }

    /// Ask the confirmation hook first; only a confirmed delete reaches the repository.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: TaskId) -> TaskResult<DeleteOutcome> {
        if !self.confirmation.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.repository.delete(id).await?;
        self.notifier.notify(Notice::Deleted(id));
        Ok(DeleteOutcome::Deleted)
    }

    /// Filtered view and total, both taken from one snapshot of the list.
    pub async fn tasks(&self, filter: TaskFilter, search: &str) -> TaskPage {
        let all = self.repository.list().await;
        let total = all.len();
        let search = SearchText::new(search);
        let tasks = all
            .into_iter()
            .filter(|task| matches(task, filter, &search))
            .collect();
        TaskPage { tasks, total }
    }

    pub async fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.repository.list().await)
    }
}
