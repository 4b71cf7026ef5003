//! Configuration for building a [`Catalog`](crate::catalog::Catalog).
//!
//! Values come from command-line flags, then environment variables, then defaults:
//!
//! | Setting | Flag | Environment | Default |
//! |---------|------|-------------|---------|
//! | Filter mode | `--mode` | `CATALOG_FILTER_MODE` | `intended` |
//! | Fixture directory | `--fixtures` | `CATALOG_FIXTURES_DIR` | embedded dataset |

use crate::filter::FilterMode;
use serde::Deserialize;
use std::path::PathBuf;

pub const MODE_ENV: &str = "CATALOG_FILTER_MODE";
pub const FIXTURES_ENV: &str = "CATALOG_FIXTURES_DIR";

#[derive(clap::Args, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Filtering behaviour
    #[arg(long, value_enum, env = MODE_ENV, default_value_t = FilterMode::Intended)]
    pub mode: FilterMode,

    /// Directory containing users.json, categories.json and products.json
    #[arg(long = "fixtures", env = FIXTURES_ENV, value_name = "DIR")]
    pub fixtures_dir: Option<PathBuf>,
}

impl BrowserConfig {
    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BrowserConfig::default();
        assert_eq!(config.mode, FilterMode::Intended);
        assert!(config.fixtures_dir.is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: BrowserConfig = serde_json::from_str(r#"{"mode": "legacy"}"#).unwrap();
        assert_eq!(config, BrowserConfig::default().with_mode(FilterMode::Legacy));
    }
}
