//! Fetch subcommand - download the catalog and export it

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use gridline_core::{SharedProgress, fmt_num};
use gridline_gfn::ExportFormat;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Country code (e.g. US, DE)
    #[arg(long)]
    pub country: Option<String>,

    /// Language code (e.g. en_US)
    #[arg(long)]
    pub language: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum pages to fetch (for testing)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Export format: json, csv or both
    #[arg(long)]
    pub format: Option<String>,
}

pub fn run(args: FetchArgs, config: &Config, progress: &SharedProgress) -> Result<ExitCode> {
    let format_name = args.format.unwrap_or_else(|| config.output.format.clone());
    let format = ExportFormat::from_name(&format_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown format: {format_name} (expected json, csv or both)"))?;

    let gfn_config = gridline_gfn::Config {
        endpoint: config.gfn.endpoint.clone(),
        country: args.country.unwrap_or_else(|| config.gfn.country.clone()),
        language: args.language.unwrap_or_else(|| config.gfn.language.clone()),
        order_by: config.gfn.order_by.clone(),
        output_dir: args
            .output
            .unwrap_or_else(|| config.output.default_dir.join("gfn")),
        max_pages: args.max_pages,
        format,
    };

    log::info!("Fetching GeForce NOW catalog");
    log::info!("  Locale: {}/{}", gfn_config.country, gfn_config.language);
    log::info!("  Output: {}", gfn_config.output_dir.display());

    let summary = gridline_gfn::run(&gfn_config, progress.clone())?;

    super::print_summary(
        "GeForce NOW",
        &[
            ("Pages", summary.pages.to_string()),
            ("Games", fmt_num(summary.games)),
            ("Stop", summary.stop.to_string()),
            ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
        ],
    );

    // Partial exports are already on disk at this point
    if summary.interrupted() {
        Ok(ExitCode::from(130))
    } else if summary.failed() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
