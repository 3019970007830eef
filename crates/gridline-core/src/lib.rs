//! Gridline Core - Common infrastructure for catalog fetch pipelines
//!
//! This crate provides reusable components for fetching paginated
//! catalog data over HTTP and exporting it to local files.

pub mod export;
pub mod http;
pub mod logging;
pub mod progress;
pub mod shutdown;

// Re-exports for convenience
pub use export::{csv_field, write_csv, write_json_pretty};
pub use http::{FetchError, REQUEST_TIMEOUT, SHARED_RUNTIME, http_client};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress, fmt_num};
pub use shutdown::{is_shutdown_requested, request_shutdown, shutdown_flag};
