//! One page of a delimited object listing.

use serde::{Deserialize, Serialize};

use crate::types::{ObjectEntry, Prefix};

/// A single page of listing results, exactly as reported by the service.
///
/// Ordering within `objects` and `common_prefixes` is the service's
/// ordering; the console appends pages and never re-sorts. A truncated
/// page carries the cursor for the next one under
/// `next_continuation_token` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Objects directly under the requested prefix.
    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
    /// Virtual subdirectories directly under the requested prefix.
    #[serde(default)]
    pub common_prefixes: Vec<Prefix>,
    /// True if more results remain past this page.
    #[serde(default)]
    pub is_truncated: bool,
    /// Cursor for the next page; present only when truncated.
    #[serde(rename = "next_continuation_token", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl ListingPage {
    /// Returns an empty, non-truncated page.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the page holds no objects and no common prefixes.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.common_prefixes.is_empty()
    }

    /// Returns the number of entries in this page, folders included.
    pub fn entry_count(&self) -> usize {
        self.objects.len() + self.common_prefixes.len()
    }
}
