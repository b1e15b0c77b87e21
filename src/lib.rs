//! Flat-file book catalog: ISBN lookup, title keyword search, and adding
//! entries with a sorted rewrite of the catalog file.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::ArgList;
pub use core::tracker::Tracker;
pub use utils::error::{Result, TrackerError};
