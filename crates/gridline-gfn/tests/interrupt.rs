//! Graceful-interrupt path, isolated in its own test binary because the
//! shutdown flag is process-global. Both scenarios run inside one test
//! so they never touch the flag concurrently.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use gridline_core::{FetchError, ProgressContext, request_shutdown, shutdown_flag};
use gridline_gfn::{Config, ExportFormat, GameRow, Page, PageSource, StopCause, fetch_all, runner};

/// Scripted source that requests shutdown while serving a page,
/// simulating a signal arriving mid-run.
struct InterruptingSource {
    script: RefCell<VecDeque<Page>>,
    /// Request shutdown while serving this page (1-based).
    interrupt_on: usize,
    served: RefCell<usize>,
}

impl InterruptingSource {
    fn new(script: Vec<Page>, interrupt_on: usize) -> Self {
        Self {
            script: RefCell::new(script.into()),
            interrupt_on,
            served: RefCell::new(0),
        }
    }
}

impl PageSource for InterruptingSource {
    fn fetch_page(&self, _after: &str) -> Result<Page, FetchError> {
        let page = self
            .script
            .borrow_mut()
            .pop_front()
            .expect("fetch_page called past the interrupt");
        *self.served.borrow_mut() += 1;
        if *self.served.borrow() == self.interrupt_on {
            request_shutdown();
        }
        Ok(page)
    }
}

fn game(title: &str, id: i64) -> GameRow {
    GameRow {
        title: title.to_string(),
        sort_name: title.to_lowercase(),
        id,
        ..Default::default()
    }
}

fn page(titles: &[(&str, i64)], cursor: &str, has_next: bool) -> Page {
    Page {
        items: titles.iter().map(|(t, id)| game(t, *id)).collect(),
        end_cursor: cursor.to_string(),
        has_next,
    }
}

#[test]
fn graceful_interrupt_keeps_prefix_and_exports() {
    shutdown_flag().store(false, Ordering::Relaxed);
    let dir = tempfile::tempdir().unwrap();

    // Three pages scripted; shutdown arrives during page 2, so page 3
    // must never be fetched.
    let source = InterruptingSource::new(
        vec![
            page(&[("Alpha", 1), ("Beta", 2)], "c1", true),
            page(&[("Gamma", 3)], "c2", true),
            page(&[("Delta", 4)], "", false),
        ],
        2,
    );
    let config = Config {
        output_dir: dir.path().to_path_buf(),
        format: ExportFormat::Both,
        ..Default::default()
    };
    let progress = Arc::new(ProgressContext::new());

    let summary = runner::run_with_source(&source, &config, progress).unwrap();

    assert!(matches!(summary.stop, StopCause::Interrupted));
    assert!(summary.interrupted());
    assert!(!summary.failed());
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.games, 3);
    assert_eq!(*source.served.borrow(), 2);

    // The accumulated prefix is still exported, in source order
    let json = std::fs::read_to_string(config.json_path()).unwrap();
    let reloaded: Vec<GameRow> = serde_json::from_str(&json).unwrap();
    let titles: Vec<&str> = reloaded.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);

    let csv = std::fs::read_to_string(config.csv_path()).unwrap();
    assert_eq!(csv.lines().count(), 4);

    // Shutdown already requested before the driver starts: nothing fetched
    let source = InterruptingSource::new(vec![page(&[("Alpha", 1)], "c1", true)], 1);
    let outcome = fetch_all(&source, None, &indicatif::ProgressBar::hidden());
    shutdown_flag().store(false, Ordering::Relaxed);

    assert!(matches!(outcome.stop, StopCause::Interrupted));
    assert!(outcome.games.is_empty());
    assert_eq!(outcome.pages, 0);
    assert_eq!(*source.served.borrow(), 0);
}
