//! Main execution logic for the catalog fetch

use std::time::Instant;

use anyhow::Context;
use gridline_core::{SharedProgress, export, fmt_num};

use crate::client::{FetchOutcome, GfnClient, PageSource, StopCause, fetch_all};
use crate::config::Config;
use crate::model::CSV_HEADER;

/// Fetch run summary
#[derive(Debug)]
pub struct RunSummary {
    pub pages: usize,
    pub games: usize,
    pub elapsed: std::time::Duration,
    pub stop: StopCause,
}

impl RunSummary {
    pub fn failed(&self) -> bool {
        matches!(self.stop, StopCause::Failed(_))
    }

    pub fn interrupted(&self) -> bool {
        matches!(self.stop, StopCause::Interrupted)
    }
}

/// Main entry point for the fetch command
pub fn run(config: &Config, progress: SharedProgress) -> anyhow::Result<RunSummary> {
    log::info!(
        "gfn fetch starting: {}/{}, output {}",
        config.country,
        config.language,
        config.output_dir.display()
    );
    let client = GfnClient::new(config);
    run_with_source(&client, config, progress)
}

/// Drive pagination against any page source and export the result.
///
/// Exports run regardless of how pagination stopped — a partial
/// collection is written exactly like a complete one.
pub fn run_with_source<S: PageSource>(
    source: &S,
    config: &Config,
    progress: SharedProgress,
) -> anyhow::Result<RunSummary> {
    let start = Instant::now();

    std::fs::create_dir_all(&config.output_dir).context("Cannot create output directory")?;

    let stage = progress.stage_line("fetch");
    let FetchOutcome { games, pages, stop } = fetch_all(source, config.max_pages, &stage);
    stage.finish_and_clear();

    log::info!(
        "fetched {} games across {} pages ({})",
        fmt_num(games.len()),
        pages,
        stop
    );

    if config.format.wants_json() {
        let path = config.json_path();
        export::write_json_pretty(&path, &games)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    if config.format.wants_csv() {
        let path = config.csv_path();
        export::write_csv(&path, CSV_HEADER, games.iter().map(|g| g.csv_record()))
            .with_context(|| format!("Cannot write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(RunSummary {
        pages,
        games: games.len(),
        elapsed: start.elapsed(),
        stop,
    })
}
