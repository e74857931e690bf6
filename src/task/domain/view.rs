//! Render-ready projection of a store for the presentation layer.

use super::{Categorization, Placeholder, Task, TaskDomainError, TaskId, TaskStore, Today};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Validated strftime pattern used to label the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFormat(String);

impl DayFormat {
    /// Long form used when nothing else is configured: `Friday, January 12`.
    pub const DEFAULT_PATTERN: &'static str = "%A, %B %-d";

    /// Creates a day format from a strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDayFormat`] when the pattern
    /// contains a specifier chrono cannot render.
    pub fn new(pattern: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = pattern.into();
        if StrftimeItems::new(&raw).any(|item| matches!(item, Item::Error)) {
            return Err(TaskDomainError::InvalidDayFormat(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats `day` with this pattern.
    #[must_use]
    pub fn format(&self, day: NaiveDate) -> String {
        let mut label = String::new();
        if write!(label, "{}", day.format(&self.0)).is_err() {
            // Time-of-day specifiers cannot render a bare date.
            return day.to_string();
        }
        label
    }
}

impl Default for DayFormat {
    fn default() -> Self {
        Self(Self::DEFAULT_PATTERN.to_owned())
    }
}

/// One rendered row: a task, or a placeholder without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,
    name: String,
}

impl ViewEntry {
    /// Entry for a real task.
    #[must_use]
    pub fn task(task: &Task) -> Self {
        Self {
            id: Some(task.id()),
            name: task.name().as_str().to_owned(),
        }
    }

    /// Entry for a placeholder.
    #[must_use]
    pub fn placeholder(placeholder: Placeholder) -> Self {
        Self {
            id: None,
            name: placeholder.to_string(),
        }
    }

    /// Returns the task identifier, absent for placeholders.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` when the entry may be offered as a completion target.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.id.is_some()
    }
}

/// Ordered buckets plus the formatted day, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Day cursor.
    pub current_day: NaiveDate,
    /// Day cursor formatted for display.
    pub current_day_label: String,
    /// Available pool.
    pub available: Vec<ViewEntry>,
    /// Pending pool.
    pub pending: Vec<ViewEntry>,
    /// Stashed pool.
    pub stashed: Vec<ViewEntry>,
    /// Overdue bucket.
    pub overdue: Vec<ViewEntry>,
    /// Today bucket; a single placeholder when nothing is due.
    pub today: Vec<ViewEntry>,
    /// Weekly bucket.
    pub this_week: Vec<ViewEntry>,
}

impl BoardView {
    /// Projects the store and its derived buckets.
    #[must_use]
    pub fn project(store: &TaskStore, format: &DayFormat) -> Self {
        let pools = store.pools();
        let day = store.current_day();
        let buckets = Categorization::derive(pools.pending, day);

        let today = match buckets.today {
            Today::Due(tasks) => entries(tasks),
            Today::Placeholder(placeholder) => vec![ViewEntry::placeholder(placeholder)],
        };

        Self {
            current_day: day,
            current_day_label: format.format(day),
            available: entries(pools.available),
            pending: entries(pools.pending),
            stashed: entries(pools.stashed),
            overdue: entries(buckets.overdue),
            today,
            this_week: entries(buckets.this_week),
        }
    }

    /// Identifiers of every task that can be completed from this view.
    #[must_use]
    pub fn actionable_ids(&self) -> Vec<TaskId> {
        self.pending.iter().filter_map(ViewEntry::id).collect()
    }
}

fn entries<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<ViewEntry> {
    tasks.into_iter().map(ViewEntry::task).collect()
}
