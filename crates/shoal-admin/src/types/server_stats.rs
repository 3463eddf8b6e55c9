//! Service-wide statistics.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shoal_core::types::format_size;

/// Service overview reported by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    /// Seconds since the service started.
    pub uptime_seconds: u64,
    /// Number of buckets.
    pub buckets_count: u64,
    /// Number of objects across all buckets.
    pub objects_count: u64,
    /// Logical bytes stored across all buckets.
    pub storage_used_bytes: u64,
    /// Unique blobs kept after deduplication.
    pub dedup_unique_blobs: u64,
    /// References from objects to those blobs.
    pub dedup_total_references: u64,
    /// Fraction of logical data shared between objects, in `0.0..=1.0`.
    pub dedup_ratio: f64,
}

impl ServerStats {
    /// Returns the uptime as a duration.
    pub fn uptime(&self) -> Duration {
        Duration::from_secs(self.uptime_seconds)
    }

    /// Returns the uptime as `{days}d {hours}h {minutes}m`.
    pub fn formatted_uptime(&self) -> String {
        let days = self.uptime_seconds / 86_400;
        let hours = (self.uptime_seconds % 86_400) / 3_600;
        let minutes = (self.uptime_seconds % 3_600) / 60;
        format!("{days}d {hours}h {minutes}m")
    }

    /// Returns the storage usage as a human-readable size.
    pub fn formatted_storage(&self) -> String {
        format_size(self.storage_used_bytes)
    }

    /// Returns the deduplication ratio as a percentage with one decimal.
    pub fn formatted_dedup_ratio(&self) -> String {
        format!("{:.1}%", self.dedup_ratio * 100.0)
    }
}
