//! Main execution logic for the convert command

use std::time::Instant;

use anyhow::Context;
use gridline_core::export;
use gridline_gfn::GameRow;

use crate::config::ConvertConfig;
use crate::mapper::map_batch;

/// Convert run summary
#[derive(Debug)]
pub struct ConvertSummary {
    pub read: usize,
    pub mapped: usize,
    pub skipped: usize,
    pub collisions: usize,
    pub elapsed: std::time::Duration,
}

/// Load a catalog export, map it, write the product array.
pub fn run(config: &ConvertConfig) -> anyhow::Result<ConvertSummary> {
    let start = Instant::now();

    let content = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Cannot read {}", config.input.display()))?;
    let games: Vec<GameRow> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid catalog JSON in {}", config.input.display()))?;
    log::info!("loaded {} games from {}", games.len(), config.input.display());

    let outcome = map_batch(&games, config.limit, &config.slug_prefix);
    log::info!(
        "mapped {} products ({} skipped, {} slug collisions)",
        outcome.products.len(),
        outcome.skipped,
        outcome.collisions
    );

    export::write_json_pretty(&config.output, &outcome.products)
        .with_context(|| format!("Cannot write {}", config.output.display()))?;
    log::info!("wrote {}", config.output.display());

    Ok(ConvertSummary {
        read: games.len(),
        mapped: outcome.products.len(),
        skipped: outcome.skipped,
        collisions: outcome.collisions,
        elapsed: start.elapsed(),
    })
}
