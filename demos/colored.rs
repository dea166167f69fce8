//! Colored side messages: CSI sequences are excluded from width accounting,
//! so shrinking colored lines still overwrite cleanly.

use std::time::Duration;

use line_gauge::*;
use owo_colors::OwoColorize;

fn main() -> std::io::Result<()> {
    let services = ["auth", "gateway", "worker", "scheduler", "metrics"];
    let mut bar = ProgressBar::new(std::io::stderr(), services.len() as i64)
        .layout(BarLayout::new().glyphs('█', '░'))
        .final_message("All services healthy.".green().to_string());

    bar.start(None)?;
    for service in services {
        std::thread::sleep(Duration::from_millis(250));
        bar.advance(1, Some(&format!("{} {service}", "checked".cyan())))?;
    }
    bar.finalize()
}
