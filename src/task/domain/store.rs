//! Task store: the three pools, their membership index and the day cursor.

use super::{Completion, CompletionSignal, Pool, Task, TaskDomainError, TaskId, TaskStoreError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Assignment input and persisted shape of a store.
///
/// [`TaskStore::to_snapshot`] emits exactly the shape accepted by
/// [`TaskStore::from_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Day cursor, ISO-8601 date.
    pub current_day: NaiveDate,
    /// Tasks not currently assigned.
    #[serde(default)]
    pub available: Vec<Task>,
    /// Tasks awaiting completion.
    #[serde(default)]
    pub pending: Vec<Task>,
    /// Deferred tasks.
    #[serde(default)]
    pub stashed: Vec<Task>,
}

impl BoardSnapshot {
    /// Creates an empty snapshot for `current_day`.
    #[must_use]
    pub const fn new(current_day: NaiveDate) -> Self {
        Self {
            current_day,
            available: Vec::new(),
            pending: Vec::new(),
            stashed: Vec::new(),
        }
    }
}

/// Read-only view of the three pools in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pools<'a> {
    /// Tasks not currently assigned.
    pub available: &'a [Task],
    /// Tasks awaiting completion.
    pub pending: &'a [Task],
    /// Deferred tasks.
    pub stashed: &'a [Task],
}

/// Result of moving the day cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAdvance {
    /// Cursor before the move.
    pub previous: NaiveDate,
    /// Cursor after the move.
    pub current: NaiveDate,
    /// Stashed tasks returned to `available` by a month rollover.
    pub restocked: Vec<TaskId>,
}

impl DayAdvance {
    /// Returns `true` when the cursor actually moved.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.previous != self.current
    }
}

/// Single source of truth for pool membership and the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    available: Vec<Task>,
    pending: Vec<Task>,
    stashed: Vec<Task>,
    index: HashMap<TaskId, Pool>,
    current_day: NaiveDate,
}

impl TaskStore {
    /// Creates a store with empty pools.
    #[must_use]
    pub fn new(current_day: NaiveDate) -> Self {
        Self {
            available: Vec::new(),
            pending: Vec::new(),
            stashed: Vec::new(),
            index: HashMap::new(),
            current_day,
        }
    }

    /// Builds a store from assignment input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTaskId`] when an identifier
    /// appears more than once across all pools, or
    /// [`TaskDomainError::MissingDueDay`] when a non-weekly task has no day.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, TaskDomainError> {
        let BoardSnapshot {
            current_day,
            available,
            pending,
            stashed,
        } = snapshot;

        let mut index = HashMap::with_capacity(available.len() + pending.len() + stashed.len());
        for (pool, tasks) in [
            (Pool::Available, &available),
            (Pool::Pending, &pending),
            (Pool::Stashed, &stashed),
        ] {
            for task in tasks {
                if !task.is_weekly() && task.raw_day().is_none() {
                    return Err(TaskDomainError::MissingDueDay(task.id()));
                }
                if index.insert(task.id(), pool).is_some() {
                    return Err(TaskDomainError::DuplicateTaskId(task.id()));
                }
            }
        }

        Ok(Self {
            available,
            pending,
            stashed,
            index,
            current_day,
        })
    }

    /// Exports the store in the assignment-input shape.
    #[must_use]
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            current_day: self.current_day,
            available: self.available.clone(),
            pending: self.pending.clone(),
            stashed: self.stashed.clone(),
        }
    }

    /// Returns read-only access to all pools.
    #[must_use]
    pub fn pools(&self) -> Pools<'_> {
        Pools {
            available: &self.available,
            pending: &self.pending,
            stashed: &self.stashed,
        }
    }

    /// Returns the tasks of one pool in insertion order.
    #[must_use]
    pub fn pool(&self, pool: Pool) -> &[Task] {
        match pool {
            Pool::Available => &self.available,
            Pool::Pending => &self.pending,
            Pool::Stashed => &self.stashed,
        }
    }

    /// Returns the day cursor.
    #[must_use]
    pub const fn current_day(&self) -> NaiveDate {
        self.current_day
    }

    /// Returns the pool currently holding `id`.
    #[must_use]
    pub fn pool_of(&self, id: TaskId) -> Option<Pool> {
        self.index.get(&id).copied()
    }

    /// Finds a task and the pool holding it.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<(Pool, &Task)> {
        let pool = self.pool_of(id)?;
        self.pool(pool)
            .iter()
            .find(|task| task.id() == id)
            .map(|task| (pool, task))
    }

    /// Total number of tasks across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when every pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes `id` from `from` and appends it to the end of `to`.
    ///
    /// Both halves happen under one `&mut` borrow, so no reader can observe
    /// the task in neither or both pools.
    /// Repeating a successful move fails because the task has left `from`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when `id` is not in `from`.
    pub fn move_task(&mut self, id: TaskId, from: Pool, to: Pool) -> Result<&Task, TaskStoreError> {
        if self.pool_of(id) != Some(from) {
            return Err(TaskStoreError::NotFound { id, pool: from });
        }
        let source = self.pool_mut(from);
        let position = source
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound { id, pool: from })?;
        let task = source.remove(position);

        let target = self.pool_mut(to);
        target.push(task);
        self.index.insert(id, to);

        self.pool(to)
            .last()
            .ok_or(TaskStoreError::NotFound { id, pool: to })
    }

    /// Applies the "mark done" transition for a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task is not pending,
    /// whether it was already processed or never existed.
    pub fn complete(&mut self, signal: &CompletionSignal) -> Result<Completion, TaskStoreError> {
        let disposition = signal.disposition();
        let task = self
            .move_task(signal.task_id(), Pool::Pending, disposition.target_pool())?
            .clone();
        Ok(Completion::new(task, disposition))
    }

    /// Moves the day cursor forward to `day`.
    ///
    /// Crossing into a different calendar month returns every stashed task
    /// to the available pool.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DayRegression`] when `day` precedes the
    /// current cursor.
    pub fn advance_day(&mut self, day: NaiveDate) -> Result<DayAdvance, TaskStoreError> {
        let previous = self.current_day;
        if day < previous {
            return Err(TaskStoreError::DayRegression {
                current: previous,
                requested: day,
            });
        }

        Ok(self.move_cursor(day))
    }

    /// Moves the day cursor forward to `day` when it is later than the
    /// cursor; an earlier or equal day leaves the store untouched.
    ///
    /// The comparison and the move happen under the same `&mut` borrow.
    pub fn catch_up(&mut self, day: NaiveDate) -> DayAdvance {
        if day <= self.current_day {
            return DayAdvance {
                previous: self.current_day,
                current: self.current_day,
                restocked: Vec::new(),
            };
        }
        self.move_cursor(day)
    }

    /// Returns every stashed task to the available pool, in stash order.
    ///
    /// Returns the identifiers that were moved.
    pub fn restock_stashed(&mut self) -> Vec<TaskId> {
        let stashed: Vec<TaskId> = self.stashed.iter().map(Task::id).collect();
        stashed
            .into_iter()
            .filter(|id| self.move_task(*id, Pool::Stashed, Pool::Available).is_ok())
            .collect()
    }

    /// Checks that every task sits in exactly one pool and the index agrees.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let total = self.available.len() + self.pending.len() + self.stashed.len();
        total == self.index.len()
            && Pool::ALL.into_iter().all(|pool| {
                self.pool(pool)
                    .iter()
                    .all(|task| self.index.get(&task.id()) == Some(&pool))
            })
    }

    fn move_cursor(&mut self, day: NaiveDate) -> DayAdvance {
        let previous = self.current_day;
        self.current_day = day;
        let month_changed = (day.year(), day.month()) != (previous.year(), previous.month());
        let restocked = if month_changed {
            self.restock_stashed()
        } else {
            Vec::new()
        };

        DayAdvance {
            previous,
            current: day,
            restocked,
        }
    }

    fn pool_mut(&mut self, pool: Pool) -> &mut Vec<Task> {
        match pool {
            Pool::Available => &mut self.available,
            Pool::Pending => &mut self.pending,
            Pool::Stashed => &mut self.stashed,
        }
    }
}
