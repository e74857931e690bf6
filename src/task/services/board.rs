//! Service layer coordinating the store, the clock and the presentation port.

use crate::task::{
    domain::{
        BoardSnapshot, BoardView, Completion, CompletionSignal, DayAdvance, DayFormat, Disposition,
        ParseDispositionError, TaskId, TaskStore, TaskStoreError,
    },
    ports::{ViewPublisher, ViewPublisherError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Request payload for marking a pending task done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    task_id: TaskId,
    disposition: String,
}

impl CompleteTaskRequest {
    /// Creates a request from a task identifier and a disposition string
    /// such as `"return"` or `"stash"`.
    #[must_use]
    pub fn new(task_id: impl Into<TaskId>, disposition: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            disposition: disposition.into(),
        }
    }

    /// Creates a request from the `return_task` flag used by form posts.
    #[must_use]
    pub fn from_return_flag(task_id: impl Into<TaskId>, return_task: bool) -> Self {
        Self::new(task_id, Disposition::from_return_flag(return_task).as_str())
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The disposition string is not recognised.
    #[error(transparent)]
    InvalidDisposition(#[from] ParseDispositionError),
    /// The presentation layer could not be notified.
    #[error(transparent)]
    Publisher(#[from] ViewPublisherError),
    /// A previous holder of the store lock panicked.
    #[error("task store lock poisoned")]
    LockPoisoned,
}

impl TaskBoardError {
    /// Returns `true` for the non-fatal "task not in expected pool" case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_not_found())
    }
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board orchestration service.
///
/// All mutations go through one write lock; projections take the read lock,
/// so a render never sees a half-applied move.
#[derive(Clone)]
pub struct TaskBoardService<P, C>
where
    P: ViewPublisher,
    C: Clock + Send + Sync,
{
    store: Arc<RwLock<TaskStore>>,
    publisher: Arc<P>,
    clock: Arc<C>,
    day_format: DayFormat,
}

impl<P, C> TaskBoardService<P, C>
where
    P: ViewPublisher,
    C: Clock + Send + Sync,
{
    /// Creates a board service over an already validated store.
    #[must_use]
    pub fn new(store: TaskStore, publisher: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            publisher,
            clock,
            day_format: DayFormat::default(),
        }
    }

    /// Sets the format used for the current-day label.
    #[must_use]
    pub fn with_day_format(mut self, day_format: DayFormat) -> Self {
        self.day_format = day_format;
        self
    }

    /// Projects the current store without notifying anyone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::LockPoisoned`] when the store lock is
    /// poisoned.
    pub fn view(&self) -> TaskBoardResult<BoardView> {
        let store = self.read()?;
        Ok(BoardView::project(&store, &self.day_format))
    }

    /// Exports the store in its persisted shape.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::LockPoisoned`] when the store lock is
    /// poisoned.
    pub fn snapshot(&self) -> TaskBoardResult<BoardSnapshot> {
        Ok(self.read()?.to_snapshot())
    }

    /// Re-derives the board and publishes it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the lock is poisoned or the publisher
    /// fails.
    pub async fn refresh(&self) -> TaskBoardResult<BoardView> {
        let view = self.view()?;
        self.publisher.publish(&view).await?;
        Ok(view)
    }

    /// Marks a pending task done and moves it according to the disposition.
    ///
    /// The move is committed before the refreshed board is published; a
    /// publisher failure is reported but does not undo the move.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::InvalidDisposition`] for an unknown
    /// disposition, [`TaskBoardError::Store`] wrapping
    /// [`TaskStoreError::NotFound`] when the task is not pending (pools are
    /// left unchanged), or [`TaskBoardError::Publisher`] when notification
    /// fails.
    pub async fn complete_task(&self, request: CompleteTaskRequest) -> TaskBoardResult<Completion> {
        let disposition = Disposition::try_from(request.disposition.as_str())?;
        let signal = CompletionSignal::new(request.task_id, disposition);

        let outcome = {
            let mut store = self.write()?;
            store.complete(&signal)
        };
        let completion = match outcome {
            Ok(completion) => completion,
            Err(err) => {
                tracing::info!(
                    task_id = %signal.task_id(),
                    %disposition,
                    error = %err,
                    "completion not applied"
                );
                return Err(err.into());
            }
        };

        tracing::info!(
            task_id = %completion.task().id(),
            pool = %completion.pool(),
            "task completed"
        );
        self.refresh().await?;
        Ok(completion)
    }

    /// Moves the day cursor forward and publishes the re-derived board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] wrapping
    /// [`TaskStoreError::DayRegression`] when `day` precedes the cursor, or
    /// [`TaskBoardError::Publisher`] when notification fails.
    pub async fn advance_day(&self, day: NaiveDate) -> TaskBoardResult<DayAdvance> {
        let advance = {
            let mut store = self.write()?;
            store.advance_day(day)?
        };

        if advance.moved() {
            tracing::info!(from = %advance.previous, to = %advance.current, "day cursor advanced");
        } else {
            tracing::debug!(day = %day, "day cursor unchanged");
        }
        if !advance.restocked.is_empty() {
            tracing::info!(
                count = advance.restocked.len(),
                "stashed tasks returned to available for the new month"
            );
        }

        self.refresh().await?;
        Ok(advance)
    }

    /// Advances the cursor to the clock's local date when that date is
    /// later, then publishes the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the lock is poisoned or the publisher
    /// fails.
    pub async fn sync_with_clock(&self) -> TaskBoardResult<DayAdvance> {
        let today = self.clock.local().date_naive();
        let advance = {
            let mut store = self.write()?;
            store.catch_up(today)
        };

        if advance.moved() {
            tracing::info!(
                from = %advance.previous,
                to = %advance.current,
                "day cursor caught up with clock"
            );
        } else {
            tracing::debug!(
                clock = %today,
                cursor = %advance.current,
                "clock is not ahead of the day cursor"
            );
        }
        if !advance.restocked.is_empty() {
            tracing::info!(
                count = advance.restocked.len(),
                "stashed tasks returned to available for the new month"
            );
        }

        self.refresh().await?;
        Ok(advance)
    }

    fn read(&self) -> TaskBoardResult<RwLockReadGuard<'_, TaskStore>> {
        self.store.read().map_err(|_| TaskBoardError::LockPoisoned)
    }

    fn write(&self) -> TaskBoardResult<RwLockWriteGuard<'_, TaskStore>> {
        self.store.write().map_err(|_| TaskBoardError::LockPoisoned)
    }
}
