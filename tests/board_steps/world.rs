//! Shared world state for chore board BDD scenarios.

use std::sync::Arc;

use chorewheel::task::{
    adapters::memory::InMemoryViewPublisher,
    domain::{BoardSnapshot, BoardView, Completion, TaskStore},
    services::{TaskBoardError, TaskBoardService},
};
use chrono::NaiveDate;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryViewPublisher, DefaultClock>;

/// Scenario world for chore board behaviour tests.
pub struct BoardWorld {
    pub snapshot: Option<BoardSnapshot>,
    pub service: Option<TestBoardService>,
    pub publisher: Arc<InMemoryViewPublisher>,
    pub snapshot_before: Option<BoardSnapshot>,
    pub last_completion: Option<Result<Completion, TaskBoardError>>,
    pub last_view: Option<BoardView>,
}

impl BoardWorld {
    /// Creates a world with no board loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: None,
            service: None,
            publisher: Arc::new(InMemoryViewPublisher::new()),
            snapshot_before: None,
            last_completion: None,
            last_view: None,
        }
    }

    /// Returns the snapshot being assembled by given steps.
    pub fn snapshot_mut(&mut self) -> Result<&mut BoardSnapshot, eyre::Report> {
        if self.service.is_some() {
            return Err(eyre::eyre!("board already loaded; add tasks before acting"));
        }
        self.snapshot
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing current day in scenario world"))
    }

    /// Returns the board service, loading it from the snapshot on first use.
    pub fn board(&mut self) -> Result<&TestBoardService, eyre::Report> {
        if self.service.is_none() {
            let snapshot = self
                .snapshot
                .clone()
                .ok_or_else(|| eyre::eyre!("missing current day in scenario world"))?;
            let store = TaskStore::from_snapshot(snapshot).wrap_err("load scenario board")?;
            self.service = Some(TaskBoardService::new(
                store,
                Arc::clone(&self.publisher),
                Arc::new(DefaultClock),
            ));
        }
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board service not loaded"))
    }

    /// Returns the view captured by the last when step, or a fresh projection.
    pub fn current_view(&mut self) -> Result<BoardView, eyre::Report> {
        if let Some(view) = &self.last_view {
            return Ok(view.clone());
        }
        self.board()?.view().wrap_err("project scenario board")
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an ISO-8601 day captured from a step.
pub fn parse_day(value: &str) -> Result<NaiveDate, eyre::Report> {
    value
        .parse()
        .wrap_err_with(|| format!("invalid day '{value}' in scenario"))
}
