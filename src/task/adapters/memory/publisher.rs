//! In-memory view publisher for board tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::BoardView,
    ports::{ViewPublisher, ViewPublisherError, ViewPublisherResult},
};

/// Thread-safe publisher that keeps every view it receives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryViewPublisher {
    views: Arc<RwLock<Vec<BoardView>>>,
}

impl InMemoryViewPublisher {
    /// Creates an empty publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every published view in publication order.
    ///
    /// A poisoned lock yields an empty list.
    #[must_use]
    pub fn published(&self) -> Vec<BoardView> {
        self.views
            .read()
            .map(|views| views.clone())
            .unwrap_or_default()
    }

    /// Returns the most recently published view.
    #[must_use]
    pub fn latest(&self) -> Option<BoardView> {
        self.views
            .read()
            .ok()
            .and_then(|views| views.last().cloned())
    }
}

#[async_trait]
impl ViewPublisher for InMemoryViewPublisher {
    async fn publish(&self, view: &BoardView) -> ViewPublisherResult<()> {
        let mut views = self.views.write().map_err(|err| {
            ViewPublisherError::delivery(std::io::Error::other(err.to_string()))
        })?;
        views.push(view.clone());
        Ok(())
    }
}
