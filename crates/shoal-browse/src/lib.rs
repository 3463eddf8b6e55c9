#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for navigation operations.
pub const TRACING_TARGET_NAVIGATOR: &str = "shoal_browse::navigator";

mod config;
mod navigator;
mod state;

// Re-export key types for convenience
pub use config::BrowseConfig;
pub use navigator::{BrowseOutcome, Navigator};
pub use state::{BrowsePhase, BrowseState};
