//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for gridline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub gfn: GfnConfig,
    pub convert: ConvertConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_dir: PathBuf,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_dir: PathBuf::from("./data"),
            format: "both".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GfnConfig {
    pub endpoint: String,
    pub country: String,
    pub language: String,
    pub order_by: String,
}

impl Default for GfnConfig {
    fn default() -> Self {
        let defaults = gridline_gfn::Config::default();
        Self {
            endpoint: defaults.endpoint,
            country: defaults.country,
            language: defaults.language,
            order_by: defaults.order_by,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub limit: usize,
    pub slug_prefix: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            slug_prefix: "gaming-".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./gridline.toml (current directory)
    /// 2. ~/.config/gridline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        // Try current directory first
        let local_config = PathBuf::from("gridline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        // Try user config directory
        if let Some(config_dir) = directories::ProjectDirs::from("", "", "gridline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config found
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.default_dir, PathBuf::from("./data"));
        assert_eq!(config.gfn.country, "US");
        assert_eq!(config.convert.limit, 100);
        assert_eq!(config.convert.slug_prefix, "gaming-");
    }

    #[test]
    fn parse_config_toml() {
        let toml = r#"
[output]
default_dir = "/tmp/catalog"
format = "json"

[gfn]
country = "DE"
language = "de_DE"

[convert]
limit = 500
slug_prefix = "cloud-"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.default_dir, PathBuf::from("/tmp/catalog"));
        assert_eq!(config.output.format, "json");
        assert_eq!(config.gfn.country, "DE");
        assert_eq!(config.gfn.language, "de_DE");
        assert_eq!(config.convert.limit, 500);
        assert_eq!(config.convert.slug_prefix, "cloud-");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[gfn]\ncountry = \"GB\"\n").unwrap();
        assert_eq!(config.gfn.country, "GB");
        assert_eq!(config.gfn.language, "en_US");
        assert_eq!(config.convert.limit, 100);
    }
}
