//! Gridline Catalog - product schema mapper
//!
//! Reshapes fetched catalog entries into the product catalog schema:
//! generated slug identifiers, flattened store/publisher lists, and a
//! fixed single-tier offering with default descriptive fields.

pub mod config;
pub mod mapper;
pub mod model;
pub mod runner;
pub mod slug;

// Re-exports
pub use config::ConvertConfig;
pub use mapper::{MapOutcome, map_batch, map_game};
pub use model::Product;
pub use runner::{ConvertSummary, run};
pub use slug::slugify;
