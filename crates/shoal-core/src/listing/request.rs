//! Listing request parameters.

use serde::{Deserialize, Serialize};

use crate::types::Prefix;
use crate::{Error, Result};

/// Default number of keys requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Upper bound the storage service places on a single listing page.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Parameters for one page of a delimited object listing.
///
/// A request without a cursor asks for the first page under the prefix;
/// a request carrying the cursor from a truncated [`ListingPage`]
/// continues the same listing. The delimiter is fixed: every listing
/// the console issues groups keys into virtual directories.
///
/// [`ListingPage`]: crate::listing::ListingPage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListObjectsRequest {
    /// Bucket to list.
    pub bucket: String,
    /// Virtual directory to list under. Root lists the whole bucket.
    #[serde(default)]
    pub prefix: Prefix,
    /// Maximum number of keys to return in this page.
    pub page_size: u32,
    /// Continuation cursor from the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListObjectsRequest {
    /// Creates a first-page request for the root of a bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: Prefix::root(),
            page_size: DEFAULT_PAGE_SIZE,
            cursor: None,
        }
    }

    /// Sets the prefix to list under.
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the continuation cursor.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Returns a copy of this request positioned at the next page.
    pub fn next_page(&self, cursor: impl Into<String>) -> Self {
        let mut request = self.clone();
        request.cursor = Some(cursor.into());
        request
    }

    /// Validates the request before it is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket name is empty, the page size is
    /// zero or above [`MAX_PAGE_SIZE`], or a present cursor is empty.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(Error::invalid_request().with_message("bucket name cannot be empty"));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_request().with_message(format!(
                "page size {} must be between 1 and {MAX_PAGE_SIZE}",
                self.page_size
            )));
        }

        if matches!(self.cursor.as_deref(), Some("")) {
            return Err(Error::invalid_request().with_message("continuation cursor cannot be empty"));
        }

        Ok(())
    }
}
