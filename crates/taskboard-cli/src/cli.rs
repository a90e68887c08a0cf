use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use taskboard_core::domain::{
    ContactMessage, NewTask, ParseIdError, TaskFilter, TaskId, TaskPatch, TaskPriority, TaskStatus,
};

/// Task board in the terminal. State lives for one invocation; the sample
/// tasks are loaded at start unless `--no-seed` is given.
#[derive(Parser, Debug)]
#[command(name = "taskboard", version)]
pub struct Cli {
    /// Pretend today is this date (YYYY-MM-DD).
    #[arg(long, global = true, env = "TASKBOARD_TODAY")]
    pub today: Option<NaiveDate>,

    /// Start with an empty board.
    #[arg(long, global = true, env = "TASKBOARD_NO_SEED")]
    pub no_seed: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not ask before deleting.
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show tasks, optionally filtered and searched.
    List {
        /// all, pending, completed, high, medium or low.
        #[arg(long, short, default_value = "all")]
        filter: TaskFilter,
        #[arg(long, short, default_value = "")]
        search: String,
    },
    /// Totals and completion rate.
    Stats,
    /// Create a task.
    Add(AddArgs),
    /// Change fields of a task.
    Edit(EditArgs),
    /// Flip a task between pending and completed.
    Toggle {
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
    },
    /// Delete a task.
    Remove {
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
    },
    /// Send a message through the contact form.
    Contact(ContactArgs),
    /// Walk through create, edit, toggle and delete on the sample board.
    Demo,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long, short)]
    pub title: String,
    #[arg(long, short)]
    pub description: String,
    #[arg(long, short, default_value_t = TaskPriority::Medium)]
    pub priority: TaskPriority,
    #[arg(long, default_value_t = TaskStatus::Pending)]
    pub status: TaskStatus,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        NewTask {
            title: args.title,
            description: args.description,
            status: args.status,
            priority: args.priority,
            due_date: args.due,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    #[arg(value_parser = parse_task_id)]
    pub id: TaskId,
    #[arg(long, short)]
    pub title: Option<String>,
    #[arg(long, short)]
    pub description: Option<String>,
    #[arg(long, short)]
    pub priority: Option<TaskPriority>,
    #[arg(long)]
    pub status: Option<TaskStatus>,
    /// YYYY-MM-DD
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    /// Remove the due date.
    #[arg(long)]
    pub clear_due: bool,
}

impl EditArgs {
    pub fn patch(&self) -> TaskPatch {
        let due_date = match (&self.due, self.clear_due) {
            (_, true) => Some(None),
            (Some(due), false) => Some(Some(due.clone())),
            (None, false) => None,
        };
        TaskPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}

impl From<ContactArgs> for ContactMessage {
    fn from(args: ContactArgs) -> Self {
        ContactMessage {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        }
    }
}

/// Length of a ULID in its text form.
const ULID_LEN: usize = 26;

/// Accepts a full id (`task-…` or bare ULID) or the plain number shown for
/// sequentially numbered boards.
///
/// A 26-character input is always read as a ULID, even when it is all digits.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ParseIdError> {
    let raw = raw.trim();
    if raw.len() < ULID_LEN {
        if let Ok(n) = raw.parse::<u128>() {
            return Ok(TaskId::from_u128(n));
        }
    }
    raw.parse()
}
