//! Page fetcher and pagination driver.
//!
//! One request in flight at a time: the async reqwest call runs on the
//! shared runtime behind a sync facade. The driver accumulates items
//! until the provider reports no further pages, a page cap is reached,
//! a fetch fails, or shutdown is requested. No retry, no backoff — the
//! accumulated prefix survives every early stop.

use indicatif::ProgressBar;

use gridline_core::{
    FetchError, REQUEST_TIMEOUT, SHARED_RUNTIME, fmt_num, http_client, is_shutdown_requested,
};

use crate::config::Config;
use crate::model::{Page, parse_page};
use crate::query::{QueryParams, build_query};

/// Source of catalog pages, keyed by an opaque cursor.
///
/// An empty cursor denotes the start of the collection.
pub trait PageSource {
    fn fetch_page(&self, after: &str) -> Result<Page, FetchError>;
}

/// HTTP client for the catalog list endpoint.
pub struct GfnClient {
    endpoint: String,
    params: QueryParams,
}

impl GfnClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            params: QueryParams {
                country: config.country.clone(),
                language: config.language.clone(),
                order_by: config.order_by.clone(),
            },
        }
    }
}

impl PageSource for GfnClient {
    fn fetch_page(&self, after: &str) -> Result<Page, FetchError> {
        let query = build_query(&self.params, after);
        let body = SHARED_RUNTIME.handle().block_on(async {
            let send = async {
                let resp = http_client()
                    .post(&self.endpoint)
                    .header("content-type", "application/json")
                    .header("origin", "https://www.nvidia.com")
                    .header("referer", "https://www.nvidia.com/")
                    .header("user-agent", "Mozilla/5.0")
                    .body(query)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| FetchError::from_reqwest(&e))?;
                resp.text().await.map_err(|e| FetchError::from_reqwest(&e))
            };
            match tokio::time::timeout(REQUEST_TIMEOUT, send).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Http {
                    status: None,
                    message: format!("request timed out after {}s", REQUEST_TIMEOUT.as_secs()),
                }),
            }
        })?;
        parse_page(&body)
    }
}

/// Lazy page iterator over a [`PageSource`].
///
/// Yields `Ok(page)` per fetched page, threading the cursor between
/// calls. Fused: ends after the page reporting no next page, or after
/// yielding one error.
pub struct Pages<'a, S: PageSource> {
    source: &'a S,
    after: String,
    done: bool,
}

impl<'a, S: PageSource> Pages<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            after: String::new(),
            done: false,
        }
    }
}

impl<S: PageSource> Iterator for Pages<'_, S> {
    type Item = Result<Page, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.fetch_page(&self.after) {
            Ok(page) => {
                if page.has_next {
                    self.after = page.end_cursor.clone();
                } else {
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Why the pagination driver stopped.
#[derive(Debug)]
pub enum StopCause {
    /// Provider reported no further pages.
    Exhausted,
    /// The configured page cap was reached.
    PageLimit,
    /// A fetch failed; the accumulated prefix is still usable.
    Failed(FetchError),
    /// Shutdown was requested between pages.
    Interrupted,
}

impl std::fmt::Display for StopCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "catalog exhausted"),
            Self::PageLimit => write!(f, "page limit reached"),
            Self::Failed(e) => write!(f, "failed: {e}"),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Result of one pagination run.
#[derive(Debug)]
pub struct FetchOutcome {
    pub games: Vec<crate::model::GameRow>,
    pub pages: usize,
    pub stop: StopCause,
}

impl FetchOutcome {
    pub fn failed(&self) -> bool {
        matches!(self.stop, StopCause::Failed(_))
    }
}

/// Drive pagination from the start of the collection, accumulating
/// items in source order.
pub fn fetch_all<S: PageSource>(
    source: &S,
    max_pages: Option<usize>,
    stage: &ProgressBar,
) -> FetchOutcome {
    let mut games = Vec::new();
    let mut pages = 0usize;
    let mut iter = Pages::new(source);

    let stop = loop {
        if max_pages.is_some_and(|max| pages >= max) {
            break StopCause::PageLimit;
        }
        if is_shutdown_requested() {
            log::warn!("shutdown requested, stopping after page {pages}");
            break StopCause::Interrupted;
        }
        match iter.next() {
            Some(Ok(page)) => {
                pages += 1;
                log::debug!(
                    "page {pages}: {} items, has_next={}",
                    page.items.len(),
                    page.has_next
                );
                games.extend(page.items);
                stage.set_message(format!("page {pages} · {} games", fmt_num(games.len())));
            }
            Some(Err(e)) => {
                log::error!("fetch failed on page {}: {e}", pages + 1);
                break StopCause::Failed(e);
            }
            None => break StopCause::Exhausted,
        }
    };

    FetchOutcome { games, pages, stop }
}
