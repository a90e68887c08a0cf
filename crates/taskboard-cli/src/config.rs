//! Board configuration resolved from flags and environment.

use std::sync::Arc;

use chrono::NaiveDate;
use taskboard_core::app::{BuildError, DEMO_LAST_ID, demo_tasks};
use taskboard_core::ports::{Clock, FixedClock, IdGenerator, SequentialIdGenerator, SystemClock};
use taskboard_core::{InMemoryTaskRepository, RepositoryBuilder};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Pin "today" instead of reading the system clock.
    pub today: Option<NaiveDate>,
    /// Start from the sample tasks.
    pub seed: bool,
    pub output: OutputFormat,
    /// Skip the delete confirmation prompt.
    pub assume_yes: bool,
}

impl BoardConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            today: cli.today,
            seed: !cli.no_seed,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            assume_yes: cli.yes,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(day) => Arc::new(FixedClock::on(day)),
            None => Arc::new(SystemClock),
        }
    }

    /// Sequential ids keep the sample tasks addressable by number across runs.
    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        let first = if self.seed { DEMO_LAST_ID + 1 } else { 1 };
        Arc::new(SequentialIdGenerator::starting_at(first))
    }

    pub fn repository(
        &self,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<InMemoryTaskRepository, BuildError> {
        let builder = RepositoryBuilder::new()
            .shared_clock(clock)
            .shared_id_generator(ids);
        let builder = if self.seed {
            builder.seed(demo_tasks())
        } else {
            builder
        };
        builder.build()
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use taskboard_core::TaskRepository;
    use taskboard_core::domain::TaskId;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "taskboard",
            "--json",
            "--no-seed",
            "--today",
            "2024-01-17",
            "stats",
        ]);
        let config = BoardConfig::from_cli(&cli);

        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.seed);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 1, 17));
    }

    #[tokio::test]
    async fn seeded_board_continues_numbering_after_samples() {
        let cli = Cli::parse_from(["taskboard", "--today", "2024-01-17", "stats"]);
        let config = BoardConfig::from_cli(&cli);
        let ids = config.id_generator();
        let repo = config.repository(config.clock(), Arc::clone(&ids)).unwrap();

        assert_eq!(repo.len().await, 4);
        assert_eq!(ids.generate_task_id(), TaskId::from_u128(DEMO_LAST_ID as u128 + 1));
    }
}
