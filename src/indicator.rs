use std::io::{self, Write};

use crate::MessagePosition;
use crate::writer::LineWriter;

/// Shared state behind every single-line indicator: the line writer,
/// visibility, final-message policy and the one-way finished flag.
///
/// Owned by the concrete indicator types and surfaced through
/// [`Indicator::core`](crate::Indicator::core); not constructible directly.
pub struct IndicatorCore<W: Write> {
    pub(crate) writer: LineWriter<W>,
    pub(crate) visible: bool,
    pub(crate) final_message: Option<String>,
    pub(crate) position: MessagePosition,
    pub(crate) finished: bool,
}

impl<W: Write> IndicatorCore<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self {
            writer: LineWriter::new(sink),
            visible: true,
            final_message: None,
            position: MessagePosition::default(),
            finished: false,
        }
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.writer.set_enabled(visible);
    }

    /// Clears the indicator line, then writes the final message on its own
    /// line when one is set and non-empty.
    pub(crate) fn finish_cleared(&mut self) -> io::Result<()> {
        self.writer.clear()?;

        if let Some(message) = self.final_message.as_deref().filter(|m| !m.is_empty()) {
            self.writer.write_line(message)?;
            self.writer.newline()?;
        }
        Ok(())
    }

    /// Writes the final message straight to the sink, bypassing line
    /// bookkeeping. Used when no line was ever rendered.
    pub(crate) fn write_final_message_plain(&mut self) -> io::Result<()> {
        if let Some(message) = self.final_message.as_deref().filter(|m| !m.is_empty()) {
            let sink = self.writer.sink_mut();
            writeln!(sink, "{message}")?;
            sink.flush()?;
        }
        Ok(())
    }
}
