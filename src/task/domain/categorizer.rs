//! Derived due-date buckets over the pending pool.
//!
//! Every function here is pure and total: it reads the pending tasks in
//! insertion order and the day cursor, and never mutates either.

use super::Task;
use chrono::NaiveDate;
use std::fmt;

/// Display-only stand-in for an empty "today" bucket.
///
/// Placeholders carry no task identifier and are never completion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Nothing is due today but this many tasks are pending.
    Pending(usize),
    /// The pending pool is empty.
    NothingToDo,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(count) => write!(f, "{count} pending!"),
            Self::NothingToDo => f.write_str("Nothing to do!"),
        }
    }
}

/// Contents of the "today" bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Today<'a> {
    /// Non-weekly tasks due exactly on the current day.
    Due(Vec<&'a Task>),
    /// No task is due today.
    Placeholder(Placeholder),
}

impl Today<'_> {
    /// Returns the due tasks, or an empty slice for a placeholder.
    #[must_use]
    pub fn tasks(&self) -> &[&Task] {
        match self {
            Self::Due(tasks) => tasks,
            Self::Placeholder(_) => &[],
        }
    }
}

/// Non-weekly pending tasks whose day lies strictly before `day`.
#[must_use]
pub fn overdue(pending: &[Task], day: NaiveDate) -> Vec<&Task> {
    pending
        .iter()
        .filter(|task| task.due_day().is_some_and(|due| due < day))
        .collect()
}

/// Non-weekly pending tasks due exactly on `day`, with the placeholder
/// fallback when there are none.
#[must_use]
pub fn due_today(pending: &[Task], day: NaiveDate) -> Today<'_> {
    let due: Vec<&Task> = pending
        .iter()
        .filter(|task| task.due_day() == Some(day))
        .collect();

    if !due.is_empty() {
        return Today::Due(due);
    }
    if pending.is_empty() {
        Today::Placeholder(Placeholder::NothingToDo)
    } else {
        Today::Placeholder(Placeholder::Pending(pending.len()))
    }
}

/// Weekly pending tasks.
///
/// A weekly task stays in this bucket for as long as it is pending.
#[must_use]
pub fn this_week(pending: &[Task]) -> Vec<&Task> {
    pending.iter().filter(|task| task.is_weekly()).collect()
}

/// All three buckets derived in one pass over the same inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorization<'a> {
    /// Overdue tasks.
    pub overdue: Vec<&'a Task>,
    /// Today's tasks or placeholder.
    pub today: Today<'a>,
    /// Weekly tasks.
    pub this_week: Vec<&'a Task>,
}

impl<'a> Categorization<'a> {
    /// Derives every bucket for `pending` as of `day`.
    #[must_use]
    pub fn derive(pending: &'a [Task], day: NaiveDate) -> Self {
        Self {
            overdue: overdue(pending, day),
            today: due_today(pending, day),
            this_week: this_week(pending),
        }
    }
}
