//! Port contracts for the chore board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod publisher;

pub use publisher::{ViewPublisher, ViewPublisherError, ViewPublisherResult};
