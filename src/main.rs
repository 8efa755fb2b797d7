mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "tippy", about = "Tip and bill-split calculator")]
struct Args {
    /// Prefill the base amount field
    #[arg(short, long)]
    amount: Option<String>,

    /// Starting tip percentage (0 to 30)
    #[arg(short, long)]
    tip: Option<f64>,

    /// Starting participant count (1 to 10)
    #[arg(short, long)]
    people: Option<u32>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tippy.log in current directory.
    // The TUI owns the terminal, so nothing may log to stdout.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tippy.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config unusable ({}), falling back to defaults", e);
            Default::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            amount: args.amount,
            tip: args.tip,
            people: args.people,
        },
    );

    log::info!(
        "Tippy starting up: tip={}%, people={}, currency={}",
        resolved.tip_percent,
        resolved.people,
        resolved.currency.symbol
    );

    tui::run(resolved)
}
