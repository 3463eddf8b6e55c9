//! Listing page builders for tests.

use shoal_core::listing::ListingPage;
use shoal_core::types::{ObjectEntry, Prefix};

/// Builds a terminal page from object entries and common prefixes.
pub fn page_of(objects: Vec<ObjectEntry>, common_prefixes: Vec<Prefix>) -> ListingPage {
    ListingPage {
        objects,
        common_prefixes,
        is_truncated: false,
        next_cursor: None,
    }
}

/// Builds a terminal page of 1 KiB objects with the given keys.
pub fn page_with_keys(keys: &[&str]) -> ListingPage {
    let objects = keys
        .iter()
        .map(|key| {
            ObjectEntry::new(*key, 1024)
                .with_content_type("application/octet-stream")
                .with_etag(format!("etag-{key}"))
        })
        .collect();
    page_of(objects, Vec::new())
}

/// Builds a terminal page of common prefixes.
///
/// # Panics
///
/// Panics if any literal is not a valid prefix; fixture literals are
/// expected to be well formed.
pub fn page_with_prefixes(prefixes: &[&str]) -> ListingPage {
    let common_prefixes = prefixes
        .iter()
        .map(|p| Prefix::new(*p).expect("fixture prefix literal must end with '/'"))
        .collect();
    page_of(Vec::new(), common_prefixes)
}

/// Fixture-building extensions for [`ListingPage`].
pub trait ListingPageExt {
    /// Marks the page truncated, carrying the given continuation cursor.
    fn truncated(self, cursor: &str) -> ListingPage;
}

impl ListingPageExt for ListingPage {
    fn truncated(mut self, cursor: &str) -> ListingPage {
        self.is_truncated = true;
        self.next_cursor = Some(cursor.to_owned());
        self
    }
}
