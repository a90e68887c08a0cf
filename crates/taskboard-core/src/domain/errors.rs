//! Errors - タスク操作のエラー型
//!
//! リポジトリは失敗をログに出して握りつぶさず、必ず型付きで返します。
//! 表示（インラインのフィールドエラー、バナー）は呼び出し側の責務です。

use thiserror::Error;

use super::TaskId;
use super::validation::{FieldMessages, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// Input rejected before any mutation happened.
    #[error("invalid task: {}", .0.describe())]
    Validation(ValidationErrors),

    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskError {
    /// Field errors, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            TaskError::Validation(errors) => Some(errors),
            TaskError::NotFound(_) => None,
        }
    }
}

impl From<ValidationErrors> for TaskError {
    fn from(errors: ValidationErrors) -> Self {
        TaskError::Validation(errors)
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
