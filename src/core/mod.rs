//! Core module for the `EduPath` engine and its supporting services

pub mod config;
pub mod gap;
pub mod loader;
pub mod models;
pub mod path;
pub mod recommend;
pub mod report;
pub mod search;
pub mod stats;

/// Returns the current version of the `EduPath` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
