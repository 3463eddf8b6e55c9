//! Stream adapter for exhaustive page traversal.

use async_stream::try_stream;
use futures::Stream;

use crate::listing::{ListObjectsRequest, ListingPage, SharedObjectLister, TRACING_TARGET};
use crate::{Error, Result};

/// Streams every page of a listing, following cursors until the service
/// reports a terminal page.
///
/// The cursor on `request` selects the starting page; leave it unset to
/// traverse from the beginning. Pages are fetched lazily as the stream
/// is polled, so dropping the stream abandons the listing without
/// issuing further requests.
///
/// # Errors
///
/// Yields an error item and ends if any page request fails, or if the
/// service reports a truncated page without a continuation cursor.
pub fn page_stream(
    lister: SharedObjectLister,
    request: ListObjectsRequest,
) -> impl Stream<Item = Result<ListingPage>> + Send {
    try_stream! {
        let mut request = request;
        let mut page_index = 0usize;

        loop {
            let page = lister.list_objects(&request).await?;
            page_index += 1;

            tracing::debug!(
                target: TRACING_TARGET,
                bucket = %request.bucket,
                prefix = %request.prefix,
                page = page_index,
                entries = page.entry_count(),
                is_truncated = page.is_truncated,
                "Fetched listing page"
            );

            if !page.is_truncated {
                yield page;
                break;
            }

            match page.next_cursor.clone() {
                Some(cursor) => {
                    request = request.next_page(cursor);
                    yield page;
                }
                None => {
                    yield page;
                    Err(Error::unreachable()
                        .with_message("truncated listing page without a continuation cursor"))?;
                }
            }
        }
    }
}

