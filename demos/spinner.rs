//! Spinner variants: default frames, presets and message positions.

use std::time::Duration;

use line_gauge::*;

fn main() -> std::io::Result<()> {
    let mut spin = Spinner::new(std::io::stderr())
        .final_message("Found 12 files to update.");
    for _ in 0..12 {
        spin.advance(Some("Finding files to update"))?;
        std::thread::sleep(Duration::from_millis(100));
    }
    spin.finalize()?;

    let mut spin = Spinner::new(std::io::stderr())
        .frames(DOT_FRAMES)
        .message_position(MessagePosition::Left);
    for _ in 0..20 {
        spin.advance(Some("Indexing"))?;
        std::thread::sleep(Duration::from_millis(60));
    }
    spin.finalize()
}
