//! Configuration management with layered hierarchy

use chrono::NaiveDate;
use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::query::QueryParams;

/// File name of the per-dataset config inside a data directory
pub const DATA_DIR_CONFIG: &str = "partpromo.yaml";

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid window start '{0}'")]
    #[diagnostic(
        code(partpromo::config::window_start),
        help("use an ISO date such as 1994-01-01")
    )]
    InvalidWindowStart(String),

    #[error("limit must be at least 1")]
    #[diagnostic(code(partpromo::config::limit))]
    ZeroLimit,
}

/// partpromo configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Part name prefix
    pub prefix: Option<String>,

    /// Nation name suppliers must be located in
    pub nation: Option<String>,

    /// First day of the shipment window (YYYY-MM-DD)
    pub window_start: Option<String>,

    /// Number of result rows
    pub limit: Option<usize>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(data_dir: Option<&Path>) -> Self {
        Self::load_from(
            Self::global_config_path().as_deref(),
            data_dir,
            |key| std::env::var(key).ok(),
        )
    }

    /// Load with explicit sources
    pub fn load_from(
        global_path: Option<&Path>,
        data_dir: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        // 1. Built-in defaults are applied by `query_params`
        let mut config = Config::default();

        // 2. Global user config (~/.config/partpromo/config.yaml)
        if let Some(path) = global_path {
            if let Some(global) = Self::read_file(path) {
                config.merge(global);
            }
        }

        // 3. Data directory config (<data_dir>/partpromo.yaml)
        if let Some(dir) = data_dir {
            if let Some(local) = Self::read_file(&dir.join(DATA_DIR_CONFIG)) {
                config.merge(local);
            }
        }

        // 4. Environment variables
        if let Some(prefix) = env("PARTPROMO_PREFIX") {
            config.prefix = Some(prefix);
        }
        if let Some(nation) = env("PARTPROMO_NATION") {
            config.nation = Some(nation);
        }
        if let Some(start) = env("PARTPROMO_WINDOW_START") {
            config.window_start = Some(start);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "partpromo")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Parse a YAML config file, skipping it with a warning when unreadable
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config file");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.prefix.is_some() {
            self.prefix = other.prefix;
        }
        if other.nation.is_some() {
            self.nation = other.nation;
        }
        if other.window_start.is_some() {
            self.window_start = other.window_start;
        }
        if other.limit.is_some() {
            self.limit = other.limit;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Resolve the merged values over the built-in defaults
    pub fn query_params(&self) -> Result<QueryParams, ConfigError> {
        let mut params = QueryParams::default();

        if let Some(ref prefix) = self.prefix {
            params.part_prefix = prefix.clone();
        }
        if let Some(ref nation) = self.nation {
            params.nation = nation.clone();
        }
        if let Some(ref start) = self.window_start {
            params.window_start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidWindowStart(start.clone()))?;
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(ConfigError::ZeroLimit);
            }
            params.limit = limit;
        }

        Ok(params)
    }
}
