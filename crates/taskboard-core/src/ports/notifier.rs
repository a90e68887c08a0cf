//! Notifier port - 操作成功の通知
//!
//! - NoopNotifier: 何もしない
//! - LogNotifier: tracing に info で出す

use std::fmt;

use serde::Serialize;

use crate::domain::TaskId;

/// 成功した変更の通知
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Notice {
    Created(TaskId),
    Updated(TaskId),
    Deleted(TaskId),
}

impl Notice {
    pub fn task_id(&self) -> TaskId {
        match self {
            Notice::Created(id) | Notice::Updated(id) | Notice::Deleted(id) => *id,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Created(_) => f.write_str("Task created successfully!"),
            Notice::Updated(_) => f.write_str("Task updated successfully!"),
            Notice::Deleted(_) => f.write_str("Task deleted successfully!"),
        }
    }
}

/// Notifier は Notice を受け取る
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: Notice) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(task_id = %notice.task_id(), "{notice}");
    }
}
