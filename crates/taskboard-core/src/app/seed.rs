//! Demo data shown by the task list and dashboard on first load.

use chrono::NaiveDate;

use crate::domain::{Task, TaskId, TaskPriority, TaskStatus};

/// Highest id used by [`demo_tasks`]. Start a sequential generator above it.
pub const DEMO_LAST_ID: u64 = 4;

/// The four sample tasks the list page starts with, in display order.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        demo(
            1,
            "Complete React Router implementation",
            "Implement routing for all pages with proper navigation",
            TaskStatus::Completed,
            TaskPriority::High,
            (2024, 1, 15),
            (2024, 1, 10),
        ),
        demo(
            2,
            "Add Bootstrap styling",
            "Style all components with React Bootstrap",
            TaskStatus::Pending,
            TaskPriority::Medium,
            (2024, 1, 20),
            (2024, 1, 12),
        ),
        demo(
            3,
            "Implement CRUD operations",
            "Add Create, Read, Update, Delete functionality",
            TaskStatus::Pending,
            TaskPriority::High,
            (2024, 1, 18),
            (2024, 1, 14),
        ),
        demo(
            4,
            "Create video demonstration",
            "Record 5-minute video showcasing the application",
            TaskStatus::Pending,
            TaskPriority::Low,
            (2024, 1, 25),
            (2024, 1, 16),
        ),
    ]
}

fn demo(
    id: u128,
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    due: (i32, u32, u32),
    created: (i32, u32, u32),
) -> Task {
    Task {
        id: TaskId::from_u128(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        priority,
        due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2),
        created_at: NaiveDate::from_ymd_opt(created.0, created.1, created.2)
            .unwrap_or_default(),
    }
}
