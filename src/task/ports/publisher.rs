//! Presentation port notified after every re-derivation of the board.

use crate::task::domain::BoardView;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for view publisher operations.
pub type ViewPublisherResult<T> = Result<T, ViewPublisherError>;

/// Contract for handing a freshly projected board to the presentation layer.
#[async_trait]
pub trait ViewPublisher: Send + Sync {
    /// Publishes a board view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewPublisherError`] when the view cannot be rendered or
    /// delivered.
    async fn publish(&self, view: &BoardView) -> ViewPublisherResult<()>;
}

/// Errors returned by view publisher implementations.
#[derive(Debug, Clone, Error)]
pub enum ViewPublisherError {
    /// The view could not be rendered.
    #[error("failed to render board view: {0}")]
    Render(String),

    /// The rendered view could not be delivered.
    #[error("failed to deliver board view: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl ViewPublisherError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
