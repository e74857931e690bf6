//! Chore board engine.
//!
//! Tracks recurring and one-off chores across three disjoint pools
//! (available, pending, stashed), derives the overdue, today and
//! this-week buckets from a day cursor, and applies the "mark done"
//! transition. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
