//! In-memory adapters.

mod publisher;

pub use publisher::InMemoryViewPublisher;
