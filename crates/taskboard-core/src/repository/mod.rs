//! Task repository: the only gateway that may change the task collection.

mod memory;
mod state;

pub use memory::InMemoryTaskRepository;

use async_trait::async_trait;

use crate::domain::{NewTask, Task, TaskFilter, TaskId, TaskPatch, TaskResult};

/// Repository port (interface).
///
/// The in-memory store is the only implementation today; this trait is the seam
/// for swapping in a networked backend without touching callers. Any backend
/// must keep the same success/failure semantics:
///
/// - `list` returns newest-created first and never fails.
/// - `create`/`update` validate before mutating; on failure nothing changes.
/// - `update`/`toggle_status`/`delete` return `TaskError::NotFound` for unknown ids.
/// - `query` is a pure projection over `list`, keeping its order.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn list(&self) -> Vec<Task>;

    async fn get(&self, id: TaskId) -> TaskResult<Task>;

    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskResult<Task>;

    /// Flip pending <-> completed.
    async fn toggle_status(&self, id: TaskId) -> TaskResult<Task>;

    async fn delete(&self, id: TaskId) -> TaskResult<()>;

    /// Tasks matching `filter` whose title or description contains `search`
    /// (trimmed, case-insensitive).
    async fn query(&self, filter: TaskFilter, search: &str) -> Vec<Task>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
