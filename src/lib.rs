//! Chorewheel: a household chore board.
//!
//! The crate keeps every chore in exactly one of three pools (available,
//! pending, stashed), derives the overdue, today and this-week buckets from
//! the pending pool and a day cursor, and applies the "mark done" transition
//! that returns a chore to rotation or stashes it until the next month.
//!
//! # Architecture
//!
//! Chorewheel follows hexagonal architecture principles:
//!
//! - **Domain**: Pools, categorisation and projection with no I/O
//! - **Ports**: Abstract trait interfaces for presenting the board
//! - **Adapters**: Terminal, JSON and in-memory presenters plus the snapshot file
//!
//! # Modules
//!
//! - [`task`]: Board state, lifecycle transitions and presentation
//! - [`config`]: Layered command-line and file configuration

pub mod config;
pub mod task;
