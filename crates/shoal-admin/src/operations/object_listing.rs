//! Paginated object listing over the administrative API.

use std::sync::Arc;
use std::time::Instant;

use futures::Stream;
use reqwest::Method;
use shoal_core::Result;
use shoal_core::listing::{self, ListObjectsRequest, ListingPage};
use tracing::{debug, error, info, instrument};

use crate::{AdminClient, TRACING_TARGET_OBJECTS};

/// Object listing operations with a required admin client.
#[derive(Debug, Clone)]
pub struct ObjectListing {
    client: AdminClient,
}

impl ObjectListing {
    /// Creates new object listing operations.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Fetches one page of a delimited listing.
    ///
    /// Keys under the request prefix are grouped at the first `/` past the
    /// prefix: direct objects come back in `objects`, deeper keys are rolled
    /// up into `common_prefixes`.
    #[instrument(skip(self, request), target = TRACING_TARGET_OBJECTS, fields(bucket = %request.bucket, prefix = %request.prefix))]
    pub async fn list(&self, request: &ListObjectsRequest) -> Result<ListingPage> {
        request.validate()?;

        debug!(
            target: TRACING_TARGET_OBJECTS,
            page_size = request.page_size,
            continuing = request.cursor.is_some(),
            "Listing objects"
        );

        let mut url = self
            .client
            .endpoint_url(["admin", "buckets", request.bucket.as_str(), "objects"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if !request.prefix.is_root() {
                pairs.append_pair("prefix", request.prefix.as_str());
            }
            pairs.append_pair("max-keys", &request.page_size.to_string());
            if let Some(cursor) = &request.cursor {
                pairs.append_pair("continuation-token", cursor);
            }
        }

        let start = Instant::now();
        let result = self.client.send_json::<ListingPage>(Method::GET, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(page) => {
                info!(
                    target: TRACING_TARGET_OBJECTS,
                    objects = page.objects.len(),
                    common_prefixes = page.common_prefixes.len(),
                    is_truncated = page.is_truncated,
                    elapsed = ?elapsed,
                    "Objects listed successfully"
                );
                Ok(page)
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_OBJECTS,
                    error = %e,
                    elapsed = ?elapsed,
                    "Failed to list objects"
                );
                Err(e)
            }
        }
    }

    /// Streams every page of a listing, following continuation cursors.
    pub fn pages(&self, request: ListObjectsRequest) -> impl Stream<Item = Result<ListingPage>> + Send {
        listing::page_stream(Arc::new(self.client.clone()), request)
    }
}
