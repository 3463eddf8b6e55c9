//! Service-wide overview statistics.

use std::time::Instant;

use reqwest::Method;
use shoal_core::Result;
use tracing::{debug, error, info, instrument};

use crate::types::ServerStats;
use crate::{AdminClient, TRACING_TARGET_STATS};

/// Service statistics with a required admin client.
#[derive(Debug, Clone)]
pub struct ServiceStats {
    client: AdminClient,
}

impl ServiceStats {
    /// Creates new service statistics operations.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Fetches the service-wide overview shown on the console dashboard.
    #[instrument(skip(self), target = TRACING_TARGET_STATS)]
    pub async fn overview(&self) -> Result<ServerStats> {
        debug!(target: TRACING_TARGET_STATS, "Fetching service overview");

        let url = self.client.endpoint_url(["stats"])?;

        let start = Instant::now();
        let result = self.client.send_json::<ServerStats>(Method::GET, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(stats) => {
                info!(
                    target: TRACING_TARGET_STATS,
                    buckets_count = stats.buckets_count,
                    objects_count = stats.objects_count,
                    storage_used_bytes = stats.storage_used_bytes,
                    elapsed = ?elapsed,
                    "Service overview fetched successfully"
                );
                Ok(stats)
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_STATS,
                    error = %e,
                    elapsed = ?elapsed,
                    "Failed to fetch service overview"
                );
                Err(e)
            }
        }
    }
}
