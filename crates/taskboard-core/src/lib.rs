//! taskboard-core
//!
//! Core building blocks for the task board.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, task, filter, validation, stats, contact, errors）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, Confirmation, Notifier）
//! - **repository**: TaskRepository trait + in-memory 実装
//! - **app**: アプリケーション層（RepositoryBuilder, TaskBoard, ContactInbox）

pub mod app;
pub mod domain;
pub mod ports;
pub mod repository;

pub use app::{ContactInbox, RepositoryBuilder, TaskBoard};
pub use domain::{NewTask, Task, TaskError, TaskFilter, TaskId, TaskPatch, TaskStats};
pub use repository::{InMemoryTaskRepository, TaskRepository};
