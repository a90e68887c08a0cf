//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::TaskRepository;
use super::state::TaskCollection;
use crate::domain::{NewTask, Task, TaskFilter, TaskId, TaskPatch, TaskResult};
use crate::ports::{Clock, IdGenerator, UlidGenerator};

/// Draws from the injected generator before falling back to random ULIDs.
const MAX_ID_DRAWS: usize = 8;

/// In-memory task repository.
///
/// State lives behind one async mutex; each operation takes it exactly once.
/// Ids and `created_at` come from the injected generator and clock.
pub struct InMemoryTaskRepository {
    state: Mutex<TaskCollection>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryTaskRepository {
    /// Empty repository. Use `RepositoryBuilder` to seed tasks.
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_tasks(clock, ids, Vec::new())
    }

    /// Seed as given. Callers guarantee the ids are unique.
    pub(crate) fn with_tasks(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            state: Mutex::new(TaskCollection::from_tasks(tasks)),
            clock,
            ids,
        }
    }

    /// Pull a fresh id, skipping any that are already stored.
    ///
    /// A generator that keeps repeating taken ids is abandoned after
    /// `MAX_ID_DRAWS` attempts in favour of a clock-based ULID.
    fn fresh_id(&self, tasks: &TaskCollection) -> TaskId {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.generate_task_id();
            if !tasks.contains(id) {
                return id;
            }
            debug!(task_id = %id, "generated id already taken, drawing another");
        }

        warn!(
            attempts = MAX_ID_DRAWS,
            "id generator keeps returning taken ids, falling back to ULIDs"
        );
        let fallback = UlidGenerator::new(Arc::clone(&self.clock));
        loop {
            let id = fallback.generate_task_id();
            if !tasks.contains(id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> Vec<Task> {
        self.state.lock().await.list()
    }

    async fn get(&self, id: TaskId) -> TaskResult<Task> {
        self.state.lock().await.get(id)
    }

    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let today = self.clock.today();
        let mut state = self.state.lock().await;
        let id = self.fresh_id(&state);
        let task = state.create(id, input, today)?;
        debug!(task_id = %task.id, total = state.len(), "task created");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskResult<Task> {
        let today = self.clock.today();
        let task = self.state.lock().await.update(id, patch, today)?;
        debug!(task_id = %id, "task updated");
        Ok(task)
    }

    async fn toggle_status(&self, id: TaskId) -> TaskResult<Task> {
        let today = self.clock.today();
        let task = self.state.lock().await.toggle_status(id, today)?;
        debug!(task_id = %id, status = %task.status, "task status toggled");
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> TaskResult<()> {
        let mut state = self.state.lock().await;
        state.delete(id)?;
        debug!(task_id = %id, total = state.len(), "task deleted");
        Ok(())
    }

    async fn query(&self, filter: TaskFilter, search: &str) -> Vec<Task> {
        self.state.lock().await.query(filter, search)
    }

    async fn len(&self) -> usize {
        self.state.lock().await.len()
    }
}
