//! Browse session configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use shoal_core::listing::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Configuration for a browse session with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct BrowseConfig {
    /// Number of keys requested per listing page (optional)
    #[cfg_attr(
        feature = "config",
        arg(long = "browse-page-size", env = "SHOAL_BROWSE_PAGE_SIZE")
    )]
    pub page_size: Option<u32>,
}

impl BrowseConfig {
    /// Creates a configuration using defaults for every option.
    pub fn new() -> Self {
        Self { page_size: None }
    }

    /// Sets the requested page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Returns the page size to request, clamped to the range the
    /// service accepts.
    #[inline]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self::new()
    }
}
