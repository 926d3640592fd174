//! Tracing initialization
//!
//! The terminal belongs to the TUI, so log lines go to
//! `~/.movie-grid/movie-grid.log` instead of stdout. Logging is optional:
//! if the file cannot be opened the subscriber is simply not installed.

use crate::config::Config;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the file-backed subscriber using the configured level
pub fn init_logging(config: &Config) {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    init_logging_at(&dir.join("movie-grid.log"), &config.log_level);
}

fn init_logging_at(path: &Path, level: &str) {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
