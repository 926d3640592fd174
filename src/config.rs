//! User configuration
//!
//! Read from `~/.movie-grid/config.json`. Every field is optional and a
//! missing or unreadable file yields the defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint
    pub base_url: String,
    pub api_key: String,
    /// Fixed search query sent as `s=`
    pub search_term: String,
    pub page_size: usize,
    /// Directory exports are written to
    pub export_dir: PathBuf,
    /// File name prefix for exports
    pub export_stem: String,
    /// tracing filter directive, e.g. "info" or "movie_grid=debug"
    pub log_level: String,
    /// No timeout when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: "bc6d047".to_string(),
            search_term: "man".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: PathBuf::from("."),
            export_stem: "movies".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".movie-grid"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults
    pub fn load() -> Config {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}
