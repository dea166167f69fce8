use std::io::{self, Write};

use crate::indicator::IndicatorCore;
use crate::{Indicator, MessagePosition};

const DEFAULT_WIDTH: usize = 20;

/// Rendering layout for a progress bar body.
///
/// ```rust,ignore
/// let layout = BarLayout::new().width(30).glyphs('█', '░');
/// // => [██████████████░░░░░░░░░░░░░░░░]  45%
/// ```
#[derive(Debug, Clone)]
pub struct BarLayout {
    width: usize,
    fill: char,
    empty: char,
    left: String,
    right: String,
    show_percent: bool,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            fill: '·',
            empty: ' ',
            left: "[".to_string(),
            right: "]".to_string(),
            show_percent: true,
        }
    }
}

impl BarLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of character cells in the bar body. Zero resets to the
    /// default of 20.
    pub fn width(mut self, width: usize) -> Self {
        self.width = if width > 0 { width } else { DEFAULT_WIDTH };
        self
    }

    /// Glyphs for completed and remaining cells.
    pub fn glyphs(mut self, fill: char, empty: char) -> Self {
        self.fill = fill;
        self.empty = empty;
        self
    }

    /// Delimiters placed around the bar body.
    pub fn delimiters(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left = left.into();
        self.right = right.into();
        self
    }

    /// Whether to append a percentage suffix.
    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Renders the bar for a completion fraction in `[0, 1]`.
    fn render(&self, fraction: f64) -> String {
        let filled = (fraction * self.width as f64) as usize;
        let empty = self.width - filled;
        let bar = format!(
            "{}{}{}{}",
            self.left,
            std::iter::repeat_n(self.fill, filled).collect::<String>(),
            std::iter::repeat_n(self.empty, empty).collect::<String>(),
            self.right,
        );

        if !self.show_percent {
            return bar;
        }

        format!("{bar} {:>3}%", (fraction * 100.0) as u32)
    }
}

/// Terminal progress bar for work with a known total.
///
/// Progress is clamped to `[0, total]`; a non-positive total renders as
/// permanently 100%. Finalization leaves the last frame standing and
/// newline-terminated, unless configured to clear; either way the final
/// message, when set, is written exactly once. Dropping the bar finalizes
/// it.
///
/// ```rust,ignore
/// let mut bar = ProgressBar::new(std::io::stderr(), 8).final_message("Done.");
/// bar.start(Some("Downloading..."))?;
/// bar.advance(1, Some("Downloaded 1 of 8"))?;
/// // => [··                  ]  12% Downloaded 1 of 8
/// ```
pub struct ProgressBar<W: Write> {
    core: IndicatorCore<W>,
    total: i64,
    layout: BarLayout,
    clear_on_finish: bool,
    completed: i64,
}

impl<W: Write> ProgressBar<W> {
    /// Creates a bar over `sink`, where `total` units represent 100%.
    pub fn new(sink: W, total: i64) -> Self {
        Self {
            core: IndicatorCore::new(sink),
            total,
            layout: BarLayout::default(),
            clear_on_finish: false,
            completed: 0,
        }
    }

    /// Rendering layout for the bar body.
    pub fn layout(mut self, layout: BarLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Whether to erase the bar on finalization instead of leaving the last
    /// frame standing. Final-message behavior is unchanged.
    pub fn clear_on_finish(mut self, clear: bool) -> Self {
        self.clear_on_finish = clear;
        self
    }

    /// Whether redraws are emitted at all. A hidden bar still writes its
    /// final message on finalization.
    pub fn visible(mut self, visible: bool) -> Self {
        self.core.set_visible(visible);
        self
    }

    /// Message written once on finalization. Empty means no message.
    pub fn final_message(mut self, message: impl Into<String>) -> Self {
        self.core.final_message = Some(message.into());
        self
    }

    /// Side of the bar the per-update message appears on.
    pub fn message_position(mut self, position: MessagePosition) -> Self {
        self.core.position = position;
        self
    }

    /// Fraction of work completed, or `1.0` when `total <= 0`.
    fn fraction(&self, completed: i64) -> f64 {
        if self.total <= 0 {
            return 1.0;
        }

        completed as f64 / self.total as f64
    }

    /// Redraws the bar for `completed` units, clamped to `[0, total]`.
    pub fn update(&mut self, completed: i64, message: Option<&str>) -> io::Result<()> {
        if self.core.finished {
            return Ok(());
        }

        let clamped = completed.min(self.total).max(0);
        let bar = self.layout.render(self.fraction(clamped));

        self.core
            .writer
            .write_composed(&bar, message, self.core.position)?;
        self.completed = clamped;
        Ok(())
    }

    /// Increments progress by `step` units and redraws.
    pub fn advance(&mut self, step: i64, message: Option<&str>) -> io::Result<()> {
        self.update(self.completed + step, message)
    }

    /// Marks all units completed and redraws.
    pub fn complete(&mut self) -> io::Result<()> {
        self.update(self.total, None)
    }

    /// Renders the initial 0% frame with an optional message.
    pub fn start(&mut self, message: Option<&str>) -> io::Result<()> {
        self.update(0, message)
    }
}

impl<W: Write> Indicator for ProgressBar<W> {
    type Sink = W;

    fn core(&mut self) -> &mut IndicatorCore<W> {
        &mut self.core
    }

    fn render_final(&mut self) -> io::Result<()> {
        if self.clear_on_finish {
            return self.core.finish_cleared();
        }

        let bar = self.layout.render(self.fraction(self.completed));
        let IndicatorCore {
            writer,
            final_message,
            position,
            ..
        } = &mut self.core;

        writer.write_composed(&bar, final_message.as_deref(), *position)?;
        writer.newline()
    }
}

impl<W: Write> Drop for ProgressBar<W> {
    fn drop(&mut self) {
        // Errors in drop have nowhere to go.
        let _ = self.finalize();
    }
}
