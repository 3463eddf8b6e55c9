//! Bucket administration operations.

use std::time::Instant;

use reqwest::Method;
use shoal_core::{Error, Result};
use tracing::{debug, error, info, instrument};

use crate::types::BucketStatsResponse;
use crate::{AdminClient, TRACING_TARGET_BUCKETS};

/// Minimum length of a bucket name.
const BUCKET_NAME_MIN: usize = 3;
/// Maximum length of a bucket name.
const BUCKET_NAME_MAX: usize = 63;

/// Bucket administration with a required admin client.
#[derive(Debug, Clone)]
pub struct BucketAdmin {
    client: AdminClient,
}

impl BucketAdmin {
    /// Creates new bucket administration operations.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Fetches per-bucket statistics along with the aggregate total.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS)]
    pub async fn stats(&self) -> Result<BucketStatsResponse> {
        debug!(target: TRACING_TARGET_BUCKETS, "Fetching bucket statistics");

        let url = self.client.endpoint_url(["admin", "bucket-stats"])?;

        let start = Instant::now();
        let result = self
            .client
            .send_json::<BucketStatsResponse>(Method::GET, url)
            .await;
        let elapsed = start.elapsed();

        match result {
            Ok(stats) => {
                info!(
                    target: TRACING_TARGET_BUCKETS,
                    buckets = stats.buckets.len(),
                    total_storage_bytes = stats.total_storage_bytes,
                    elapsed = ?elapsed,
                    "Bucket statistics fetched successfully"
                );
                Ok(stats)
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_BUCKETS,
                    error = %e,
                    elapsed = ?elapsed,
                    "Failed to fetch bucket statistics"
                );
                Err(e)
            }
        }
    }

    /// Creates a new bucket.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS, fields(bucket = %name))]
    pub async fn create(&self, name: &str) -> Result<()> {
        validate_bucket_name(name)?;

        debug!(target: TRACING_TARGET_BUCKETS, "Creating bucket");

        let url = self.client.endpoint_url(["admin", "buckets", name])?;

        let start = Instant::now();
        let result = self.client.send_empty(Method::PUT, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_BUCKETS, elapsed = ?elapsed, "Bucket created successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_BUCKETS, error = %e, elapsed = ?elapsed, "Failed to create bucket");
                Err(e)
            }
        }
    }

    /// Deletes a bucket.
    ///
    /// The service refuses to delete a bucket that still holds objects; that
    /// refusal surfaces as an invalid request error.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS, fields(bucket = %name))]
    pub async fn delete(&self, name: &str) -> Result<()> {
        validate_bucket_name(name)?;

        debug!(target: TRACING_TARGET_BUCKETS, "Deleting bucket");

        let url = self.client.endpoint_url(["admin", "buckets", name])?;

        let start = Instant::now();
        let result = self.client.send_empty(Method::DELETE, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_BUCKETS, elapsed = ?elapsed, "Bucket deleted successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_BUCKETS, error = %e, elapsed = ?elapsed, "Failed to delete bucket");
                Err(e)
            }
        }
    }
}

/// Validates a bucket name against the service's naming rules.
///
/// Names are 3 to 63 characters of lowercase letters, digits, dots, and
/// hyphens, and must start and end with a letter or digit.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    let len = name.len();
    if !(BUCKET_NAME_MIN..=BUCKET_NAME_MAX).contains(&len) {
        return Err(Error::invalid_request().with_message(format!(
            "bucket name must be between {BUCKET_NAME_MIN} and {BUCKET_NAME_MAX} characters"
        )));
    }

    let bytes = name.as_bytes();
    let edge = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let inner = |b: u8| edge(b) || b == b'.' || b == b'-';

    if !edge(bytes[0]) || !edge(bytes[len - 1]) {
        return Err(Error::invalid_request()
            .with_message("bucket name must start and end with a lowercase letter or digit"));
    }

    if let Some(bad) = bytes.iter().copied().find(|b| !inner(*b)) {
        return Err(Error::invalid_request().with_message(format!(
            "bucket name contains invalid character '{}'",
            bad as char
        )));
    }

    Ok(())
}
