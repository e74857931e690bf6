//! Adapter implementations for the board's ports and its persisted state.

pub mod json;
pub mod memory;
pub mod snapshot;
pub mod terminal;
