use std::io::{self, Write};

use crate::MessagePosition;
use crate::width::visible_width;

/// Stateful writer for one terminal line that is redrawn in place.
///
/// Tracks the visible width of the last write so the next one can pad out
/// leftover characters from a longer previous frame. A disabled writer
/// turns every operation into a no-op. All writes flush immediately, so
/// frames stay visible even on buffered sinks.
///
/// ```rust,ignore
/// let mut writer = LineWriter::new(std::io::stderr());
/// writer.write_line("downloading 10 of 10")?;
/// writer.write_line("done")?; // pads over the stale tail
/// writer.newline()?;
/// ```
pub struct LineWriter<W: Write> {
    sink: W,
    enabled: bool,
    last_visible_width: usize,
}

impl<W: Write> LineWriter<W> {
    /// Creates an enabled writer over `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            enabled: true,
            last_visible_width: 0,
        }
    }

    /// Enables or disables output entirely.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Erases the current line and returns the cursor to column 0.
    pub fn clear(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        write!(self.sink, "\r{}\r", " ".repeat(self.last_visible_width))?;
        self.sink.flush()?;
        self.last_visible_width = 0;
        Ok(())
    }

    /// Terminates the line, leaving its content as-is.
    pub fn newline(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        self.last_visible_width = 0;
        Ok(())
    }

    /// Overwrites the current line with `text`, no trailing newline.
    ///
    /// Pads with spaces up to the previous frame's visible width so a
    /// shorter frame fully covers a longer one.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let width = visible_width(text);
        let pad = self.last_visible_width.saturating_sub(width);

        write!(self.sink, "\r{text}{}", " ".repeat(pad))?;
        self.sink.flush()?;
        self.last_visible_width = width;
        Ok(())
    }

    /// Writes an indicator line with an optional message on the configured
    /// side. An empty message is treated as no message.
    pub fn write_composed(
        &mut self, indicator: &str, message: Option<&str>, position: MessagePosition,
    ) -> io::Result<()> {
        self.write_line(&compose_line(indicator, message, position))
    }

    pub(crate) fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }
}

fn compose_line(indicator: &str, message: Option<&str>, position: MessagePosition) -> String {
    match message {
        Some(message) if !message.is_empty() => match position {
            MessagePosition::Left => format!("{message} {indicator}"),
            MessagePosition::Right => format!("{indicator} {message}"),
        },
        _ => indicator.to_string(),
    }
}
