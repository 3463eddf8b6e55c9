//! Per-bucket statistics.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shoal_core::types::format_size;
use shoal_core::{Error, Result};

/// Statistics for a single bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStat {
    /// Bucket name.
    pub name: String,
    /// Number of objects stored in the bucket.
    pub objects_count: u64,
    /// Logical bytes stored in the bucket.
    pub storage_used_bytes: u64,
    /// Creation time in nanoseconds since the Unix epoch.
    pub created_at: i64,
}

impl BucketStat {
    /// Returns the creation time as a timestamp.
    pub fn created_at_timestamp(&self) -> Result<Timestamp> {
        Timestamp::from_nanosecond(i128::from(self.created_at)).map_err(|error| {
            Error::invalid_request()
                .with_message("bucket creation time is out of range")
                .with_source(error)
        })
    }

    /// Returns the storage usage as a human-readable size.
    pub fn formatted_storage(&self) -> String {
        format_size(self.storage_used_bytes)
    }
}

/// Bucket statistics along with the aggregate total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStatsResponse {
    /// Statistics for every bucket.
    pub buckets: Vec<BucketStat>,
    /// Total logical bytes stored across all buckets.
    pub total_storage_bytes: u64,
}

impl BucketStatsResponse {
    /// Returns the total storage as a human-readable size.
    pub fn formatted_total_storage(&self) -> String {
        format_size(self.total_storage_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_stats_envelope() {
        let json = r#"{
            "buckets": [
                {
                    "name": "media",
                    "objects_count": 42,
                    "storage_used_bytes": 1572864,
                    "created_at": 1767052800000000000
                }
            ],
            "total_storage_bytes": 1572864
        }"#;

        let stats: BucketStatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.buckets.len(), 1);
        assert_eq!(stats.buckets[0].name, "media");
        assert_eq!(stats.formatted_total_storage(), "1.5 MB");
    }

    #[test]
    fn creation_time_converts_from_nanoseconds() {
        let stat = BucketStat {
            name: "media".to_owned(),
            objects_count: 0,
            storage_used_bytes: 0,
            created_at: 1_767_052_800_000_000_000,
        };

        let timestamp = stat.created_at_timestamp().unwrap();
        assert_eq!(timestamp.to_string(), "2025-12-30T00:00:00Z");
    }
}
