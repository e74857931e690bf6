//! Application services for the chore board.

mod board;

pub use board::{CompleteTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService};
