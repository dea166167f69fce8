//! Drive a spinner from `tracing` events: each event advances one frame and
//! becomes the side message.

use std::time::Duration;

use line_gauge::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> std::io::Result<()> {
    let layer = SpinnerLayer::new(
        Spinner::new(std::io::stderr()).final_message("Scan finished."),
    );
    let handle = layer.handle();
    tracing_subscriber::registry().with(layer).init();

    for shard in 0..10 {
        tracing::info!("scanning shard {shard}");
        std::thread::sleep(Duration::from_millis(150));
    }

    handle.finalize()
}
