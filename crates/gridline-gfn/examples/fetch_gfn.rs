//! Standalone catalog fetch example
//!
//! Run with: cargo run -p gridline-gfn --example fetch_gfn -- <args>

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use clap::Parser;
use gridline_core::{ProgressContext, init_logging, shutdown_flag};
use gridline_gfn::{Config, ExportFormat, run};

#[derive(Parser)]
#[command(name = "fetch-gfn", about = "Fetch the GeForce NOW catalog")]
struct Cli {
    /// Country code (e.g. US, DE)
    #[arg(long, default_value = "US")]
    country: String,

    /// Language code (e.g. en_US)
    #[arg(long, default_value = "en_US")]
    language: String,

    /// Output directory
    #[arg(short, long, default_value = "./data/gfn")]
    output: std::path::PathBuf,

    /// Maximum pages to fetch (for testing)
    #[arg(long)]
    max_pages: Option<usize>,

    /// Export format: json, csv or both
    #[arg(long, default_value = "both")]
    format: String,

    /// Suppress info logs (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (includes per-page logs)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let progress = Arc::new(ProgressContext::new());
    let multi = if progress.is_tty() {
        Some(progress.multi())
    } else {
        None
    };
    init_logging(cli.quiet, cli.verbose, multi);
    setup_signal_handler();

    let Some(format) = ExportFormat::from_name(&cli.format) else {
        log::error!("Unknown format: {} (expected json, csv or both)", cli.format);
        return ExitCode::from(2);
    };

    let config = Config {
        country: cli.country,
        language: cli.language,
        output_dir: cli.output,
        max_pages: cli.max_pages,
        format,
        ..Default::default()
    };

    match run(&config, progress) {
        Ok(summary) if summary.interrupted() => ExitCode::from(130),
        Ok(summary) if summary.failed() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn setup_signal_handler() {
    // First signal: set graceful shutdown flag
    // Second signal: force exit
    // SAFETY: AtomicBool::swap and process::exit are async-signal-safe
    unsafe {
        signal_hook::low_level::register(signal_hook::consts::SIGTERM, || {
            if shutdown_flag().swap(true, Ordering::Relaxed) {
                std::process::exit(130);
            }
        })
        .expect("Failed to register SIGTERM handler");
        signal_hook::low_level::register(signal_hook::consts::SIGINT, || {
            if shutdown_flag().swap(true, Ordering::Relaxed) {
                std::process::exit(130);
            }
        })
        .expect("Failed to register SIGINT handler");
    }
}
