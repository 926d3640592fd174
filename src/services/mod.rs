//! External service interactions
//!
//! This module contains services for interacting with the outside world:
//! - Remote movie search (OMDb)
//! - Cancellable background page fetches
//! - CSV export

pub mod export;
pub mod fetch_runner;
pub mod omdb;

pub use export::CsvExporter;
pub use fetch_runner::{FetchOutcome, FetchRunner};
pub use omdb::{MovieSource, OmdbClient};
