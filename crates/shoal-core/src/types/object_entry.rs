//! Object metadata returned by listing operations.

use serde::{Deserialize, Serialize};

use crate::types::Prefix;
use crate::{Error, Result};

/// Size units used by [`format_size`], in increasing powers of 1024.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Metadata for a single object in a listing page.
///
/// Entries are display data, not handles: the console renders them and
/// navigates by key, it never mutates them. Timestamps are nanoseconds
/// since the Unix epoch, as reported by the storage service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Full object key, including any prefix portion.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// MIME type recorded at upload time.
    pub content_type: String,
    /// Last modification time in nanoseconds since the Unix epoch.
    pub last_modified: i64,
    /// Entity tag assigned by the storage service.
    pub etag: String,
}

impl ObjectEntry {
    /// Creates a new entry with the given key and size.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
            content_type: "application/octet-stream".to_owned(),
            last_modified: 0,
            etag: String::new(),
        }
    }

    /// Sets the MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the modification time in nanoseconds since the Unix epoch.
    pub fn with_last_modified(mut self, last_modified: i64) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Sets the entity tag.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = etag.into();
        self
    }

    /// Returns the modification time as a timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the nanosecond value is outside the
    /// representable timestamp range.
    pub fn last_modified_at(&self) -> Result<jiff::Timestamp> {
        jiff::Timestamp::from_nanosecond(i128::from(self.last_modified)).map_err(|e| {
            Error::invalid_request()
                .with_message(format!("invalid timestamp {}", self.last_modified))
                .with_source(e)
        })
    }

    /// Returns the key with the leading `prefix` portion removed.
    ///
    /// This is the name shown inside a folder view. Falls back to the
    /// full key when the entry does not live under `prefix`.
    pub fn name_within<'a>(&'a self, prefix: &Prefix) -> &'a str {
        self.key.strip_prefix(prefix.as_str()).unwrap_or(&self.key)
    }

    /// Returns true if the key lives under the given prefix.
    pub fn is_under(&self, prefix: &Prefix) -> bool {
        self.key.starts_with(prefix.as_str())
    }

    /// Returns the size formatted for display, e.g. `1.5 MB`.
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Formats a byte count with binary (1024-based) units, one decimal at
/// most, and no trailing zero decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }

    let exponent = (bytes.ilog(1024) as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;

    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, SIZE_UNITS[exponent])
    } else {
        format!("{rounded:.1} {}", SIZE_UNITS[exponent])
    }
}
