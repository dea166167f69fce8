//! Download-style progress bar with a side message and a final message.

use std::time::Duration;

use line_gauge::*;

fn main() -> std::io::Result<()> {
    let total = 8;
    let mut bar = ProgressBar::new(std::io::stderr(), total)
        .final_message("Download complete.");

    bar.start(Some("Downloading updates..."))?;
    for file in 1..=total {
        std::thread::sleep(Duration::from_millis(150));
        bar.advance(1, Some(&format!("Downloaded {file:>2} of {total}")))?;
    }
    bar.finalize()
}
