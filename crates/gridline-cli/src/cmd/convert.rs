//! Convert subcommand - reshape a catalog export into product records

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Catalog JSON export to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination for the mapped product array
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum entries to map
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Prefix for generated slugs
    #[arg(long)]
    pub slug_prefix: Option<String>,
}

pub fn run(args: ConvertArgs, config: &Config) -> Result<ExitCode> {
    let convert_config = gridline_catalog::ConvertConfig {
        input: args
            .input
            .unwrap_or_else(|| config.output.default_dir.join("gfn").join("games.json")),
        output: args
            .output
            .unwrap_or_else(|| config.output.default_dir.join("products.json")),
        limit: args.limit.unwrap_or(config.convert.limit),
        slug_prefix: args
            .slug_prefix
            .unwrap_or_else(|| config.convert.slug_prefix.clone()),
    };

    log::info!("Converting catalog export");
    log::info!("  Input: {}", convert_config.input.display());
    log::info!("  Output: {}", convert_config.output.display());

    let summary = gridline_catalog::run(&convert_config)?;

    super::print_summary(
        "Convert",
        &[
            ("Read", summary.read.to_string()),
            ("Mapped", summary.mapped.to_string()),
            ("Skipped", summary.skipped.to_string()),
            ("Slug collisions", summary.collisions.to_string()),
            ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
        ],
    );

    Ok(ExitCode::SUCCESS)
}
