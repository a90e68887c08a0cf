//! Text and JSON rendering of board results.

use std::fmt::Write as _;

use serde::Serialize;
use taskboard_core::app::TaskPage;
use taskboard_core::domain::{
    FieldMessages, ReceivedMessage, Task, TaskStats, TaskStatus, ValidationErrors,
};

use crate::config::OutputFormat;

pub fn task_line(task: &Task) -> String {
    let mark = match task.status {
        TaskStatus::Completed => "[x]",
        TaskStatus::Pending => "[ ]",
    };
    let due = task
        .due_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "No date set".to_string());
    let mut out = String::new();
    let _ = writeln!(out, "{mark} {}  ({}, {})", task.title, task.priority, task.status);
    let _ = writeln!(out, "    id: {}", task.id);
    let _ = writeln!(out, "    {}", task.description);
    let _ = write!(out, "    Due: {due}  Created: {}", task.created_at);
    out
}

pub fn page_text(page: &TaskPage) -> String {
    let mut out = String::new();
    if page.tasks.is_empty() {
        out.push_str("No tasks found. Try adjusting your filters or create a new task.\n");
    }
    for task in &page.tasks {
        let _ = writeln!(out, "{}", task_line(task));
    }
    let _ = write!(out, "Showing {} of {} tasks", page.tasks.len(), page.total);
    out
}

pub fn stats_text(stats: &TaskStats) -> String {
    format!(
        "Total: {}  Completed: {}  Pending: {}  Completion rate: {}%",
        stats.total, stats.completed, stats.pending, stats.completion_rate
    )
}

pub fn message_text(received: &ReceivedMessage) -> String {
    format!(
        "Thanks {}, your message \"{}\" was received ({}).",
        received.message.name, received.message.subject, received.id
    )
}

pub fn field_errors(errors: &ValidationErrors) -> String {
    errors
        .messages()
        .into_iter()
        .map(|(field, message)| format!("  {field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render as text with `text` or as pretty JSON of `value`.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => println!("{}", text(value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
