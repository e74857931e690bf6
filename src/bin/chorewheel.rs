//! Shows and updates the chore board stored in a JSON snapshot.
//!
//! Usage:
//!
//! ```text
//! chorewheel [--snapshot <path>] [--output text|json] [--pretty] [show]
//! chorewheel done <id> [--stash]
//! chorewheel advance <YYYY-MM-DD>
//! ```
//!
//! Logs go to stderr so stdout carries only the board.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use chorewheel::config::{ChorewheelConfig, CliArgs, Command, ConfigError, OutputFormat};
use chorewheel::task::{
    adapters::{
        json::JsonViewPublisher,
        snapshot::{SnapshotFile, SnapshotFileError},
        terminal::TerminalViewPublisher,
    },
    domain::{DayFormat, TaskDomainError, TaskStore},
    ports::ViewPublisher,
    services::{CompleteTaskRequest, TaskBoardError, TaskBoardService},
};
use clap::Parser;
use mockable::{Clock, DefaultClock};
use thiserror::Error;

/// Errors that end a `chorewheel` run.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotFileError),
    #[error("snapshot is not a valid board: {0}")]
    InvalidBoard(#[from] TaskDomainError),
    #[error(transparent)]
    Board(#[from] TaskBoardError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "chorewheel failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &CliArgs) -> Result<(), CliError> {
    let config = ChorewheelConfig::load(cli)?;
    let command = cli.command.clone().unwrap_or(Command::Show);
    let clock = Arc::new(DefaultClock);

    let file = SnapshotFile::open(&config.snapshot_path)?;
    let store = if let Some(snapshot) = file.load()? {
        TaskStore::from_snapshot(snapshot)?
    } else {
        tracing::info!(path = %file.path(), "no snapshot found, starting an empty board");
        TaskStore::new(clock.local().date_naive())
    };

    match config.output {
        OutputFormat::Text => {
            let publisher = TerminalViewPublisher::new(io::stdout());
            execute(store, publisher, clock, config.day_format, &command, &file).await
        }
        OutputFormat::Json => {
            let publisher = if config.pretty_json {
                JsonViewPublisher::new(io::stdout()).pretty()
            } else {
                JsonViewPublisher::new(io::stdout())
            };
            execute(store, publisher, clock, config.day_format, &command, &file).await
        }
    }
}

async fn execute<P>(
    store: TaskStore,
    publisher: P,
    clock: Arc<DefaultClock>,
    day_format: DayFormat,
    command: &Command,
    file: &SnapshotFile,
) -> Result<(), CliError>
where
    P: ViewPublisher,
{
    let service =
        TaskBoardService::new(store, Arc::new(publisher), clock).with_day_format(day_format);

    let outcome = match *command {
        Command::Show => service.sync_with_clock().await.map(drop),
        Command::Done { id, stash } => {
            let request = CompleteTaskRequest::from_return_flag(id, !stash);
            match service.complete_task(request).await {
                Err(err) if err.is_not_found() => {
                    tracing::warn!(task_id = id, "task is not pending, board unchanged");
                    Ok(())
                }
                other => other.map(drop),
            }
        }
        Command::Advance { day } => service.advance_day(day).await.map(drop),
    };

    // A committed move is persisted even when presenting the board failed.
    file.save(&service.snapshot()?)?;
    tracing::debug!(path = %file.path(), "snapshot saved");
    outcome.map_err(CliError::from)
}
