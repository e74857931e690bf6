//! Domain model for the chore board.
//!
//! The domain covers task records, the three-pool store with its day
//! cursor, the due-date buckets derived from the pending pool, the "mark
//! done" transition and the render-ready projection. Nothing here performs
//! I/O.

mod categorizer;
mod completion;
mod error;
mod ids;
mod pool;
mod store;
mod task;
mod view;

pub use categorizer::{Categorization, Placeholder, Today, due_today, overdue, this_week};
pub use completion::{Completion, CompletionSignal, Disposition};
pub use error::{ParseDispositionError, ParsePoolError, TaskDomainError, TaskStoreError};
pub use ids::{TaskId, TaskName};
pub use pool::Pool;
pub use store::{BoardSnapshot, DayAdvance, Pools, TaskStore};
pub use task::Task;
pub use view::{BoardView, DayFormat, ViewEntry};
