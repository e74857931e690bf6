//! JSON rendering of the board.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

use crate::task::{
    domain::BoardView,
    ports::{ViewPublisher, ViewPublisherError, ViewPublisherResult},
};

/// Publisher writing one JSON document per view, newline terminated.
#[derive(Debug)]
pub struct JsonViewPublisher<W> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W> JsonViewPublisher<W>
where
    W: Write + Send,
{
    /// Creates a compact publisher over `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Switches to indented output.
    #[must_use]
    pub const fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Consumes the publisher and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewPublisherError::Delivery`] when the writer lock was
    /// poisoned.
    pub fn into_writer(self) -> ViewPublisherResult<W> {
        self.writer
            .into_inner()
            .map_err(|err| ViewPublisherError::delivery(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<W> ViewPublisher for JsonViewPublisher<W>
where
    W: Write + Send,
{
    async fn publish(&self, view: &BoardView) -> ViewPublisherResult<()> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(view)
        } else {
            serde_json::to_string(view)
        }
        .map_err(|err| ViewPublisherError::Render(err.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|err| ViewPublisherError::delivery(std::io::Error::other(err.to_string())))?;
        writeln!(writer, "{encoded}").map_err(ViewPublisherError::delivery)?;
        writer.flush().map_err(ViewPublisherError::delivery)
    }
}
