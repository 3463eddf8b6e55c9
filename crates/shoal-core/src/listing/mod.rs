//! Paginated object listing contract.
//!
//! The console browses buckets through one narrow seam: a provider that
//! returns a single page of results for a prefix, with an opaque cursor
//! linking pages together. `shoal-admin` implements the seam over the
//! administrative HTTP API; `shoal-test` scripts it for state machine
//! tests.

mod page;
mod request;
mod stream;

pub use page::ListingPage;
pub use request::{DEFAULT_PAGE_SIZE, ListObjectsRequest, MAX_PAGE_SIZE};
pub use stream::page_stream;

use std::sync::Arc;

use crate::Result;

/// Tracing target for listing operations.
pub const TRACING_TARGET: &str = "shoal_core::listing";

/// Trait for providers that serve delimited, paginated object listings.
///
/// Implementations must be cheap to clone behind an [`Arc`] and safe to
/// call concurrently: the browse layer may issue a new request while an
/// older one is still in flight and discard whichever response loses.
#[async_trait::async_trait]
pub trait ObjectLister: Send + Sync {
    /// Fetches one page of the listing described by `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid, the session is
    /// rejected, the bucket does not exist, or the service cannot be
    /// reached.
    async fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListingPage>;
}

/// Type alias for a shared, dynamically dispatched lister.
pub type SharedObjectLister = Arc<dyn ObjectLister>;

#[async_trait::async_trait]
impl<T: ObjectLister + ?Sized> ObjectLister for Arc<T> {
    async fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListingPage> {
        (**self).list_objects(request).await
    }
}
