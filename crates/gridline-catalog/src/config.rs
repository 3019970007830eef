//! Convert run configuration

use std::path::PathBuf;

/// Runtime configuration for one convert run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Previously exported catalog JSON array.
    pub input: PathBuf,
    /// Destination for the mapped product array.
    pub output: PathBuf,
    /// Maximum entries to map.
    pub limit: usize,
    /// Prepended to every generated slug.
    pub slug_prefix: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./data/gfn/games.json"),
            output: PathBuf::from("./data/products.json"),
            limit: 100,
            slug_prefix: "gaming-".to_string(),
        }
    }
}
