//! Spinner layer under async workers: events from every task funnel into
//! one spinner behind the layer's mutex.

use std::time::Duration;

use line_gauge::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let layer = SpinnerLayer::new(
        Spinner::new(std::io::stderr())
            .frames(DOT_FRAMES)
            .final_message("All fetches complete."),
    );
    let handle = layer.handle();
    tracing_subscriber::registry().with(layer).init();

    let mut joins = Vec::new();
    for worker in 0..4 {
        joins.push(tokio::spawn(async move {
            for step in 0..5 {
                tracing::info!("worker {worker} step {step}");
                tokio::time::sleep(Duration::from_millis(120)).await;
            }
        }));
    }
    for join in joins {
        join.await.unwrap();
    }

    handle.finalize()
}
