use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use crate::Indicator;
use crate::spinner::Spinner;

/// A `tracing` [`Layer`] that animates a [`Spinner`] as events arrive.
///
/// Each event advances the spinner one frame, with the event's `message`
/// field as the side message. The spinner sits behind a mutex, so events
/// from any thread serialize onto its single line.
///
/// The subscriber consumes the layer on installation; keep a
/// [`SpinnerHandle`] around to finalize the spinner when the work is done.
///
/// ```rust,ignore
/// let layer = SpinnerLayer::new(Spinner::new(std::io::stderr()).final_message("Scan finished."));
/// let handle = layer.handle();
/// tracing_subscriber::registry().with(layer).init();
///
/// tracing::info!("scanning shard 0");
/// // ... more events keep the spinner turning ...
/// handle.finalize()?;
/// ```
pub struct SpinnerLayer<W: Write> {
    spinner: Arc<Mutex<Spinner<W>>>,
}

impl<W: Write> SpinnerLayer<W> {
    pub fn new(spinner: Spinner<W>) -> Self {
        Self {
            spinner: Arc::new(Mutex::new(spinner)),
        }
    }

    /// A handle onto the shared spinner, for use after the layer has been
    /// handed to a subscriber.
    pub fn handle(&self) -> SpinnerHandle<W> {
        SpinnerHandle {
            spinner: self.spinner.clone(),
        }
    }
}

/// Cloneable handle onto the spinner owned by a [`SpinnerLayer`].
pub struct SpinnerHandle<W: Write> {
    spinner: Arc<Mutex<Spinner<W>>>,
}

impl<W: Write> Clone for SpinnerHandle<W> {
    fn clone(&self) -> Self {
        Self {
            spinner: self.spinner.clone(),
        }
    }
}

impl<W: Write> SpinnerHandle<W> {
    /// Advances the spinner one frame with an optional message.
    pub fn advance(&self, message: Option<&str>) -> Result<(), std::io::Error> {
        self.spinner.lock().unwrap().advance(message)
    }

    /// Finalizes the spinner. Events arriving afterwards are no-ops.
    pub fn finalize(&self) -> Result<(), std::io::Error> {
        self.spinner.lock().unwrap().finalize()
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
        }
    }
}

impl<S, W> Layer<S> for SpinnerLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        // A dropped frame beats a panic inside a subscriber callback.
        let mut spinner = self.spinner.lock().unwrap();
        let _ = spinner.advance((!message.is_empty()).then_some(message.as_str()));
    }
}
