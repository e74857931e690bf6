//! Error types for task domain validation and parsing.

use super::{Pool, TaskId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The same task identifier appears more than once across all pools.
    #[error("duplicate task identifier {0} across pools")]
    DuplicateTaskId(TaskId),

    /// A non-weekly task has no due day.
    #[error("task {0} is not weekly and has no due day")]
    MissingDueDay(TaskId),

    /// The day format pattern contains an unsupported specifier.
    #[error("invalid day format pattern '{0}'")]
    InvalidDayFormat(String),
}

/// Errors returned by [`TaskStore`](super::TaskStore) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The task is not a member of the pool it was expected in.
    #[error("task {id} not found in {pool} pool")]
    NotFound {
        /// Requested task identifier.
        id: TaskId,
        /// Pool that was searched.
        pool: Pool,
    },

    /// The requested day lies before the current day cursor.
    #[error("day cursor cannot move back from {current} to {requested}")]
    DayRegression {
        /// Day cursor before the request.
        current: NaiveDate,
        /// Rejected day.
        requested: NaiveDate,
    },
}

impl TaskStoreError {
    /// Returns `true` when the error is the non-fatal `NotFound` case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Error returned while parsing pool names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task pool: {0}")]
pub struct ParsePoolError(pub String);

/// Error returned while parsing completion dispositions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown completion disposition: {0}")]
pub struct ParseDispositionError(pub String);
