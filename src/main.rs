//! Price Tracker - card price comparison and trend reporting
//!
//! Thin CLI over the library: compares two snapshot dates or reports a
//! card's price trend across the fixed lookback windows.

use clap::{Parser, Subcommand};
use price_tracker::{
    export_comparison_csv, format_comparison_report, format_trend_report, points_for_card,
    read_lines, window_report, SnapshotStore, DEFAULT_PREFIX,
};
use std::path::PathBuf;

/// Card price snapshot comparison and history trend analysis
#[derive(Parser, Debug)]
#[command(name = "price_tracker")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare card prices between two snapshot dates
    Compare {
        /// First date (YYYY-MM-DD)
        date1: String,
        /// Second date (YYYY-MM-DD)
        date2: String,
        /// Root directory of the dated snapshot tree
        #[arg(long, default_value = "full_listings")]
        root: PathBuf,
        /// Snapshot filename prefix
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
        /// Also export the comparison as CSV into this directory
        #[arg(long)]
        csv_dir: Option<PathBuf>,
    },
    /// Report a card's price change over the fixed lookback windows
    Trend {
        /// Card name exactly as stored in the log
        card_name: String,
        /// Path to the sorted pricing log to scan
        #[arg(long, default_value = "sorted_pricing/min_prices_sorted.txt")]
        log: String,
    },
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        Command::Compare {
            date1,
            date2,
            root,
            prefix,
            csv_dir,
        } => {
            let store = SnapshotStore::new(root, &prefix);
            let entries = store.compare(&date1, &date2)?;

            print!("{}", format_comparison_report(&entries));

            if entries.is_empty() {
                log::warn!("No common cards found between {} and {}", date1, date2);
            } else {
                log::info!("Comparison completed, found {} common cards", entries.len());
            }

            if let Some(dir) = csv_dir {
                export_comparison_csv(&entries, &dir)?;
            }
        }
        Command::Trend { card_name, log } => {
            let lines = read_lines(&log)?;
            let points = points_for_card(&card_name, &lines)?;
            let diffs = window_report(&points)?;

            print!("{}", format_trend_report(&card_name, &diffs));
        }
    }

    Ok(())
}
