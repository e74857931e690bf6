//! Task record.

use super::{TaskId, TaskName};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recurring or one-off chore.
///
/// The identifier never changes; the task is relocated between pools but
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day: Option<NaiveDate>,
    #[serde(default)]
    weekly: bool,
}

impl Task {
    /// Creates a one-off task due on `day`.
    #[must_use]
    pub fn dated(id: TaskId, name: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            id,
            name: TaskName::new(name),
            day: Some(day),
            weekly: false,
        }
    }

    /// Creates a task that recurs every week.
    #[must_use]
    pub fn weekly(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: TaskName::new(name),
            day: None,
            weekly: true,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns `true` for tasks recurring every week.
    #[must_use]
    pub const fn is_weekly(&self) -> bool {
        self.weekly
    }

    /// Returns the stored day exactly as received.
    ///
    /// Weekly tasks may carry one; it is kept for round-tripping only.
    #[must_use]
    pub const fn raw_day(&self) -> Option<NaiveDate> {
        self.day
    }

    /// Returns the day this task falls due, or `None` for weekly tasks.
    ///
    /// All day-based derivations go through this accessor.
    #[must_use]
    pub const fn due_day(&self) -> Option<NaiveDate> {
        if self.weekly { None } else { self.day }
    }
}
