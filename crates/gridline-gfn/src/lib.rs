//! Gridline GFN - GeForce NOW catalog fetcher
//!
//! This crate provides components for fetching the cloud-gaming
//! catalog through its paginated GraphQL-style list endpoint.

pub mod client;
pub mod config;
pub mod model;
pub mod query;
pub mod runner;

// Re-exports
pub use client::{FetchOutcome, GfnClient, PageSource, Pages, StopCause, fetch_all};
pub use config::{Config, ExportFormat};
pub use model::{GameRow, Page, parse_page};
pub use runner::{RunSummary, run};
