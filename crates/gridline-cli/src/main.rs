//! gridline - cloud-gaming catalog fetch and mapping pipeline
//!
//! Fetches the GeForce NOW catalog through its paginated list endpoint
//! and reshapes exports into the product catalog schema.

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use clap::{Parser, Subcommand};
use gridline_core::shutdown_flag;

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "gridline")]
#[command(about = "Cloud-gaming catalog fetch and mapping pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./gridline.toml or ~/.config/gridline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the catalog and export JSON/CSV
    Fetch(cmd::fetch::FetchArgs),
    /// Map a catalog export into product records
    Convert(cmd::convert::ConvertArgs),
    /// Show current configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(gridline_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — the stage line shows activity
    //   non-TTY: info unless --debug          — logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    gridline_core::init_logging(quiet, cli.debug, multi);

    // Load configuration
    let config = match cli.config {
        Some(ref path) => Config::from_file(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            log::error!("Configuration error: {e:#}");
            return ExitCode::from(2);
        }
    };

    setup_signal_handler();

    let result = match cli.command {
        Command::Fetch(args) => cmd::fetch::run(args, &config, &progress),
        Command::Convert(args) => cmd::convert::run(args, &config),
        Command::Config => {
            cmd::print_summary(
                "Setting",
                &[
                    (
                        "Output directory",
                        config.output.default_dir.display().to_string(),
                    ),
                    ("Export format", config.output.format.clone()),
                    ("GFN endpoint", config.gfn.endpoint.clone()),
                    (
                        "Locale",
                        format!("{}/{}", config.gfn.country, config.gfn.language),
                    ),
                    ("Order by", config.gfn.order_by.clone()),
                    ("Convert limit", config.convert.limit.to_string()),
                    ("Slug prefix", config.convert.slug_prefix.clone()),
                ],
            );
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn setup_signal_handler() {
    // First signal: set graceful shutdown flag (partial results still exported)
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
