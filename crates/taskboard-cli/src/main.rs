mod cli;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use taskboard_core::InMemoryTaskRepository;
use taskboard_core::app::{BuildError, ContactInbox, DeleteOutcome, TaskBoard};
use taskboard_core::domain::{ContactError, NewTask, TaskError, TaskFilter, TaskPatch, TaskPriority};
use taskboard_core::ports::{Confirmation, LogNotifier, Notice, Notifier};
use thiserror::Error;
use tracing::debug;

use cli::{Cli, Commands};
use config::{BoardConfig, OutputFormat, init_tracing};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Task(#[from] TaskError),

    #[error("{0}")]
    Contact(#[from] ContactError),

    #[error("cannot render output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Asks on stderr and reads the answer from stdin; anything but y/yes declines.
struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Prints success notices the way the list page showed its alerts.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("{notice}");
    }
}

fn board_for(config: &BoardConfig, repository: InMemoryTaskRepository) -> TaskBoard {
    let board = TaskBoard::new(repository);
    let board = match config.output {
        OutputFormat::Text => board.with_notifier(ConsoleNotifier),
        OutputFormat::Json => board.with_notifier(LogNotifier),
    };
    if config.assume_yes {
        board
    } else {
        board.with_confirmation(StdinConfirmation)
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = BoardConfig::from_cli(&cli);
    debug!(?config, "starting board");

    let clock = config.clock();
    let ids = config.id_generator();
    let repository = config.repository(Arc::clone(&clock), Arc::clone(&ids))?;
    let board = board_for(&config, repository);
    let out = config.output;

    match cli.command {
        Commands::List { filter, search } => {
            let page = board.tasks(filter, &search).await;
            render::emit(out, &page, render::page_text)?;
        }
        Commands::Stats => {
            let stats = board.stats().await;
            render::emit(out, &stats, render::stats_text)?;
        }
        Commands::Add(args) => {
            let task = board.create_task(NewTask::from(args)).await?;
            render::emit(out, &task, render::task_line)?;
        }
        Commands::Edit(args) => {
            let task = board.update_task(args.id, args.patch()).await?;
            render::emit(out, &task, render::task_line)?;
        }
        Commands::Toggle { id } => {
            let task = board.toggle_task(id).await?;
            render::emit(out, &task, render::task_line)?;
        }
        Commands::Remove { id } => {
            let outcome = board.delete_task(id).await?;
            render::emit(out, &outcome, |o| match o {
                DeleteOutcome::Deleted => format!("Removed {id}"),
                DeleteOutcome::Cancelled => "Delete cancelled".to_string(),
            })?;
        }
        Commands::Contact(args) => {
            let inbox = ContactInbox::new(clock, ids);
            let received = inbox.submit(args.into()).await?;
            render::emit(out, &received, render::message_text)?;
        }
        Commands::Demo => demo(&board, out).await?,
    }
    Ok(())
}

/// Create, edit, toggle and delete one task, showing the board after each step.
async fn demo(board: &TaskBoard, out: OutputFormat) -> Result<(), CliError> {
    let task = board
        .create_task(
            NewTask::new("Deploy application", "Ship the task board to production")
                .with_priority(TaskPriority::High),
        )
        .await?;
    render::emit(out, &task, render::task_line)?;

    let patch = TaskPatch {
        description: Some("Ship the task board to production and smoke test it".to_string()),
        ..Default::default()
    };
    let task = board.update_task(task.id, patch).await?;
    render::emit(out, &task, render::task_line)?;

    let task = board.toggle_task(task.id).await?;
    render::emit(out, &task, render::task_line)?;

    let page = board.tasks(TaskFilter::All, "deploy").await;
    render::emit(out, &page, render::page_text)?;

    let stats = board.stats().await;
    render::emit(out, &stats, render::stats_text)?;

    board.delete_task(task.id).await?;
    let stats = board.stats().await;
    render::emit(out, &stats, render::stats_text)?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            match &e {
                CliError::Task(TaskError::Validation(errors)) => {
                    eprintln!("{}", render::field_errors(errors));
                }
                CliError::Contact(ContactError::Validation(errors)) => {
                    eprintln!("{}", render::field_errors(errors));
                }
                _ => {}
            }
            ExitCode::FAILURE
        }
    }
}
