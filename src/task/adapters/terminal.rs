//! Text rendering of the board for terminals.

use async_trait::async_trait;
use minijinja::{Environment, context};
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

use crate::task::{
    domain::{BoardView, ViewEntry},
    ports::{ViewPublisher, ViewPublisherError, ViewPublisherResult},
};

const BOARD_TEMPLATE: &str = "\
{{ current_day_label }}
{%- for section in sections %}

{{ section.title }}:
{%- for entry in section.entries %}
  {% if entry.id is defined %}[{{ entry.id }}] {% else %}- {% endif %}{{ entry.name }}
{%- else %}
  (none)
{%- endfor %}
{%- endfor %}";

#[derive(Debug, Serialize)]
struct Section<'a> {
    title: &'static str,
    entries: &'a [ViewEntry],
}

/// Renders a board view as plain text.
///
/// Overdue and weekly sections are omitted while empty. Placeholders are
/// printed with a dash instead of an identifier.
///
/// # Errors
///
/// Returns [`ViewPublisherError::Render`] when template rendering fails.
pub fn render_board(view: &BoardView) -> ViewPublisherResult<String> {
    let mut sections = Vec::with_capacity(6);
    if !view.overdue.is_empty() {
        sections.push(Section {
            title: "Overdue",
            entries: &view.overdue,
        });
    }
    sections.push(Section {
        title: "Today",
        entries: &view.today,
    });
    if !view.this_week.is_empty() {
        sections.push(Section {
            title: "This week",
            entries: &view.this_week,
        });
    }
    sections.extend([
        Section {
            title: "Pending",
            entries: &view.pending,
        },
        Section {
            title: "Available",
            entries: &view.available,
        },
        Section {
            title: "Stashed",
            entries: &view.stashed,
        },
    ]);

    let environment = Environment::new();
    environment
        .render_str(
            BOARD_TEMPLATE,
            context! {
                current_day_label => &view.current_day_label,
                sections => sections,
            },
        )
        .map_err(|error| ViewPublisherError::Render(error.to_string()))
}

/// Publisher writing a text board to any writer.
#[derive(Debug)]
pub struct TerminalViewPublisher<W> {
    writer: Mutex<W>,
}

impl<W> TerminalViewPublisher<W>
where
    W: Write + Send,
{
    /// Creates a publisher over `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
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
impl<W> ViewPublisher for TerminalViewPublisher<W>
where
    W: Write + Send,
{
    async fn publish(&self, view: &BoardView) -> ViewPublisherResult<()> {
        let rendered = render_board(view)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|err| ViewPublisherError::delivery(std::io::Error::other(err.to_string())))?;
        writeln!(writer, "{rendered}").map_err(ViewPublisherError::delivery)?;
        writer.flush().map_err(ViewPublisherError::delivery)
    }
}
