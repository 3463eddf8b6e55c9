//! Delimited key prefixes and breadcrumb trails.
//!
//! Object storage has no directories. The console projects a directory
//! illusion onto the flat keyspace by treating `/` as a delimiter: a
//! [`Prefix`] names a virtual folder, and its [`Breadcrumb`] trail names
//! every ancestor folder up to the bucket root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Delimiter used to group object keys into virtual directories.
pub const DELIMITER: char = '/';

/// A validated string wrapper representing a virtual directory prefix.
///
/// The root prefix is the empty string. Every non-root prefix ends with
/// the delimiter, so that listing under it groups deeper keys into
/// common prefixes rather than returning them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefix {
    prefix: String,
}

impl Prefix {
    /// Returns the root prefix, addressing the top of the bucket.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a new prefix after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is non-empty and does not end with
    /// the delimiter.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if !prefix.is_empty() && !prefix.ends_with(DELIMITER) {
            return Err(Error::invalid_request().with_message(format!(
                "prefix '{prefix}' must be empty or end with '{DELIMITER}'"
            )));
        }
        Ok(Self { prefix })
    }

    /// Returns true if this is the root prefix.
    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Returns the prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Consumes the prefix and returns the inner string.
    pub fn into_string(self) -> String {
        self.prefix
    }

    /// Returns the path segments of this prefix, shallowest first.
    ///
    /// Empty segments produced by repeated delimiters are dropped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.prefix.split(DELIMITER).filter(|s| !s.is_empty())
    }

    /// Returns the trailing segment, the name shown for this folder.
    pub fn name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Returns the parent prefix, or `None` for the root.
    pub fn parent(&self) -> Option<Prefix> {
        if self.is_root() {
            return None;
        }
        let segments: Vec<&str> = self.segments().collect();
        match segments.split_last() {
            Some((_, rest)) if rest.is_empty() => Some(Prefix::root()),
            Some((_, rest)) => Some(Self {
                prefix: format!("{}{DELIMITER}", rest.join(&DELIMITER.to_string())),
            }),
            None => Some(Prefix::root()),
        }
    }

    /// Returns this prefix with a leading `parent` portion removed.
    ///
    /// Used to render a common prefix relative to the folder it was
    /// listed under. Falls back to the full prefix when `parent` does
    /// not actually lead this one.
    pub fn name_within(&self, parent: &Prefix) -> &str {
        let relative = self
            .prefix
            .strip_prefix(parent.as_str())
            .unwrap_or(&self.prefix);
        relative.strip_suffix(DELIMITER).unwrap_or(relative)
    }

    /// Returns the breadcrumb trail for this prefix, shallowest first.
    ///
    /// The bucket root is *not* part of the trail; an empty vector means
    /// the view is already at the root. Each crumb carries the full
    /// prefix to navigate back to.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = Vec::new();
        let mut path = String::new();

        for segment in self.segments() {
            path.push_str(segment);
            path.push(DELIMITER);
            crumbs.push(Breadcrumb {
                label: segment.to_owned(),
                prefix: Self {
                    prefix: path.clone(),
                },
            });
        }

        crumbs
    }
}

impl FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::new(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.prefix
    }
}

impl PartialEq<&str> for Prefix {
    fn eq(&self, other: &&str) -> bool {
        self.prefix == *other
    }
}

/// One segment of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Display label, the bare segment name.
    pub label: String,
    /// Full prefix to navigate to when the crumb is activated.
    pub prefix: Prefix,
}
