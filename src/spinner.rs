use std::io::{self, Write};

use crate::indicator::IndicatorCore;
use crate::{Indicator, MessagePosition};

/// Default glyphs cycled when no custom sequence is configured.
pub const DEFAULT_FRAMES: &[&str] = &["-", "\\", "|", "/"];

/// Braille dot frames.
pub const DOT_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Arrow frames.
pub const ARROW_FRAMES: &[&str] = &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];

/// Terminal spinner for work with an unknown total.
///
/// Each [`advance`](Spinner::advance) cycles to the next glyph and redraws
/// the line. Finalization always clears the glyph; only the final message,
/// when set, is left behind. Dropping the spinner finalizes it.
///
/// ```rust,ignore
/// let mut spin = Spinner::new(std::io::stderr()).final_message("Found 12 files.");
/// spin.advance(Some("Finding files"))?;
/// // => - Finding files
/// ```
pub struct Spinner<W: Write> {
    core: IndicatorCore<W>,
    frames: &'static [&'static str],
    index: usize,
}

impl<W: Write> Spinner<W> {
    /// Creates a spinner over `sink` with the default frames.
    pub fn new(sink: W) -> Self {
        Self {
            core: IndicatorCore::new(sink),
            frames: DEFAULT_FRAMES,
            index: 0,
        }
    }

    /// Glyph sequence cycled on each advance. An empty slice resets to
    /// [`DEFAULT_FRAMES`].
    pub fn frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = if frames.is_empty() {
            DEFAULT_FRAMES
        } else {
            frames
        };
        self
    }

    /// Whether redraws are emitted at all. A hidden spinner still writes
    /// its final message on finalization.
    pub fn visible(mut self, visible: bool) -> Self {
        self.core.set_visible(visible);
        self
    }

    /// Message written once on finalization. Empty means no message.
    pub fn final_message(mut self, message: impl Into<String>) -> Self {
        self.core.final_message = Some(message.into());
        self
    }

    /// Side of the glyph the per-advance message appears on.
    pub fn message_position(mut self, position: MessagePosition) -> Self {
        self.core.position = position;
        self
    }

    /// Advances one frame and redraws the line.
    pub fn advance(&mut self, message: Option<&str>) -> io::Result<()> {
        if self.core.finished {
            return Ok(());
        }

        let glyph = self.frames[self.index % self.frames.len()];
        self.core
            .writer
            .write_composed(glyph, message, self.core.position)?;
        self.index += 1;
        Ok(())
    }
}

impl<W: Write> Indicator for Spinner<W> {
    type Sink = W;

    fn core(&mut self) -> &mut IndicatorCore<W> {
        &mut self.core
    }

    fn render_final(&mut self) -> io::Result<()> {
        self.core.finish_cleared()
    }
}

impl<W: Write> Drop for Spinner<W> {
    fn drop(&mut self) {
        let _ = self.finalize();
    }
}
