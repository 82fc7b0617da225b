//! CLI command handlers for `EduPath`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod gap;
pub mod recommend;
pub mod roadmap;
pub mod search;
pub mod stats;

use edupath::config::Config;
use edupath::core::loader::load_catalog_csv;
use edupath::core::models::Catalog;
use logger::error;

/// Load the course catalog from the configured dataset path
///
/// Prints a user-facing error and returns `None` when loading fails, so
/// callers can simply bail out.
#[must_use]
pub fn load_catalog(config: &Config) -> Option<Catalog> {
    let dataset = &config.paths.dataset;
    if dataset.is_empty() {
        eprintln!("✗ No dataset configured. Set one with: edupath config set dataset <FILE>");
        return None;
    }

    match load_catalog_csv(dataset) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            error!("Failed to load dataset {dataset}: {err}");
            eprintln!("✗ Failed to load dataset {dataset}: {err}");
            None
        }
    }
}
