//! Fetch run configuration

use std::path::PathBuf;

/// Which export files a fetch run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Both,
}

impl ExportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    pub fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Both => "both",
        };
        write!(f, "{name}")
    }
}

/// Runtime configuration for one fetch run
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub country: String,
    pub language: String,
    pub order_by: String,
    pub output_dir: PathBuf,
    pub max_pages: Option<usize>,
    pub format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://api-prod.nvidia.com/services/gfngames/v1/gameList".to_string(),
            country: "US".to_string(),
            language: "en_US".to_string(),
            order_by: "itemMetadata.gfnPopularityRank:ASC,sortName:ASC".to_string(),
            output_dir: PathBuf::from("./data/gfn"),
            max_pages: None,
            format: ExportFormat::Both,
        }
    }
}

impl Config {
    /// Path of the JSON export inside the output directory.
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join("games.json")
    }

    /// Path of the CSV export inside the output directory.
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("games.csv")
    }
}
