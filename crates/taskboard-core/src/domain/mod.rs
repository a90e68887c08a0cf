//! Domain model (IDs, tasks, filters, validation, statistics, contact messages).

pub mod contact;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod stats;
pub mod task;
pub mod validation;

pub use contact::{ContactError, ContactMessage, ReceivedMessage};
pub use errors::{TaskError, TaskResult};
pub use filter::{ParseFilterError, SearchText, TaskFilter};
pub use ids::{MessageId, ParseIdError, TaskId};
pub use stats::TaskStats;
pub use task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use validation::{FieldMessages, TaskContext, ValidationErrors};
