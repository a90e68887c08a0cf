//! RepositoryBuilder - リポジトリの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - seed の id 重複は build() 時に BuildError
//! - seed のタイトル・説明が規則に合わなければ BuildError
//!   （期限日は seed 時点では検査しない。過去日付のデモデータを許すため）

use std::collections::HashSet;
use std::sync::Arc;

use validator::ValidateArgs;

use crate::domain::{FieldMessages, NewTask, Task, TaskContext, TaskId, ValidationErrors};
use crate::ports::{Clock, IdGenerator, SystemClock, UlidGenerator};
use crate::repository::InMemoryTaskRepository;

/// RepositoryBuilder は InMemoryTaskRepository を構築
///
/// ```ignore
/// let repo = RepositoryBuilder::new()
///     .clock(FixedClock::on(today))
///     .id_generator(SequentialIdGenerator::starting_at(5))
///     .seed(demo_tasks())
///     .build()?;
/// ```
#[derive(Default)]
pub struct RepositoryBuilder {
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    seed: Vec<Task>,
}

/// BuildError はリポジトリ構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("seed contains task id {0} more than once")]
    DuplicateTaskId(TaskId),

    #[error("seed task {id} is invalid: {}", .errors.describe())]
    InvalidSeed { id: TaskId, errors: ValidationErrors },
}

impl RepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既定は SystemClock
    pub fn clock(self, clock: impl Clock + 'static) -> Self {
        self.shared_clock(Arc::new(clock))
    }

    /// 他のコンポーネントと同じ Clock を共有する
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// 既定は Clock を共有する UlidGenerator
    pub fn id_generator(self, ids: impl IdGenerator + 'static) -> Self {
        self.shared_id_generator(Arc::new(ids))
    }

    pub fn shared_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// 初期データを追加（先頭が一覧の先頭になる）
    pub fn seed(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.seed.extend(tasks);
        self
    }

    pub fn build(self) -> Result<InMemoryTaskRepository, BuildError> {
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        // seed の期限日は検査しない（due_date は None として検証）
        let context = TaskContext::on(clock.today());
        let mut seen = HashSet::new();
        for task in &self.seed {
            if !seen.insert(task.id) {
                return Err(BuildError::DuplicateTaskId(task.id));
            }
            NewTask::new(task.title.as_str(), task.description.as_str())
                .validate_with_args(&context)
                .map_err(|errors| BuildError::InvalidSeed {
                    id: task.id,
                    errors,
                })?;
        }

        let ids = self.ids.unwrap_or_else(|| {
            Arc::new(UlidGenerator::new(Arc::clone(&clock))) as Arc<dyn IdGenerator>
        });

        tracing::debug!(seeded = self.seed.len(), "task repository built");
        Ok(InMemoryTaskRepository::with_tasks(clock, ids, self.seed))
    }
}
