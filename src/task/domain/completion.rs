//! Completion signal and the "mark done" transition result.

use super::{ParseDispositionError, Pool, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user chose to do with a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Put the task back in the available pool so it can come up again.
    ReturnToPool,
    /// Stash the task until the next restock.
    Stash,
}

impl Disposition {
    /// Maps the boundary `return_task` flag to a disposition.
    #[must_use]
    pub const fn from_return_flag(return_task: bool) -> Self {
        if return_task {
            Self::ReturnToPool
        } else {
            Self::Stash
        }
    }

    /// Pool a completed task is moved into.
    #[must_use]
    pub const fn target_pool(self) -> Pool {
        match self {
            Self::ReturnToPool => Pool::Available,
            Self::Stash => Pool::Stashed,
        }
    }

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReturnToPool => "return_to_pool",
            Self::Stash => "stash",
        }
    }
}

impl TryFrom<&str> for Disposition {
    type Error = ParseDispositionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "return" | "return_to_pool" | "true" => Ok(Self::ReturnToPool),
            "stash" | "false" => Ok(Self::Stash),
            _ => Err(ParseDispositionError(value.to_owned())),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External request to mark a pending task done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSignal {
    task_id: TaskId,
    disposition: Disposition,
}

impl CompletionSignal {
    /// Creates a completion signal.
    #[must_use]
    pub const fn new(task_id: TaskId, disposition: Disposition) -> Self {
        Self {
            task_id,
            disposition,
        }
    }

    /// Returns the task to complete.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }
}

/// Outcome of an applied completion: the moved task and where it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    task: Task,
    disposition: Disposition,
}

impl Completion {
    pub(crate) const fn new(task: Task, disposition: Disposition) -> Self {
        Self { task, disposition }
    }

    /// Returns the task as it now sits in its new pool.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the applied disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Returns the pool the task was moved into.
    #[must_use]
    pub const fn pool(&self) -> Pool {
        self.disposition.target_pool()
    }
}
