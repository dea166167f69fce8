#![doc = include_str!("../README.md")]

pub(crate) mod bar;
pub(crate) mod indicator;
pub(crate) mod spinner;
#[cfg(feature = "tracing")]
pub(crate) mod tracing;
pub(crate) mod width;
pub(crate) mod writer;


/// Re-exports of all public types and traits.
pub mod prelude {
    pub use crate::bar::{BarLayout, ProgressBar};
    pub use crate::indicator::IndicatorCore;
    pub use crate::spinner::{ARROW_FRAMES, DEFAULT_FRAMES, DOT_FRAMES, Spinner};
    #[cfg(feature = "tracing")]
    pub use crate::tracing::{SpinnerHandle, SpinnerLayer};
    pub use crate::width::{strip_csi, visible_width};
    pub use crate::writer::LineWriter;
    pub use crate::{Indicator, MessagePosition};
}

pub use crate::prelude::*;

/// Shared lifecycle contract for single-line indicators.
///
/// An indicator owns one continuously-redrawn terminal line. The provided
/// [`finalize`] drives the finish-once protocol; each concrete type defines
/// what the closing output looks like through [`render_final`].
///
/// One indicator drives one sink exclusively for its lifetime. Pointing two
/// indicators at the same sink interleaves their carriage-return rewrites;
/// that is a caller error, the core takes no locks.
///
/// [`finalize`]: Indicator::finalize
/// [`render_final`]: Indicator::render_final
pub trait Indicator {
    /// The destination the indicator writes to.
    type Sink: std::io::Write;

    /// Borrows the shared line state backing the provided
    /// [`finalize`](Indicator::finalize).
    fn core(&mut self) -> &mut IndicatorCore<Self::Sink>;

    /// Renders the closing output for this indicator kind.
    ///
    /// Called at most once, by [`finalize`](Indicator::finalize), and only
    /// while the indicator is visible.
    fn render_final(&mut self) -> Result<(), std::io::Error>;

    /// Stops the indicator and emits its final output, exactly once.
    ///
    /// The first call marks the indicator finished; every later call, and
    /// every advance or update after it, is a silent no-op. A hidden
    /// indicator renders nothing and writes only its final message, when
    /// one is set. Dropping an indicator finalizes it implicitly.
    fn finalize(&mut self) -> Result<(), std::io::Error> {
        if self.core().finished {
            return Ok(());
        }
        self.core().finished = true;

        if self.core().visible {
            self.render_final()
        } else {
            self.core().write_final_message_plain()
        }
    }
}

/// Side of the indicator a message is composed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessagePosition {
    /// `{message} {indicator}`
    Left,
    /// `{indicator} {message}`
    #[default]
    Right,
}
