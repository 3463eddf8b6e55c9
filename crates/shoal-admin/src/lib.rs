#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod client;
mod error;
pub mod operations;
pub mod types;

pub use shoal_core::{Error, ErrorKind, Result};

pub use crate::client::{AdminClient, AdminConfig, DEFAULT_TIMEOUT};
pub use crate::operations::{
    BucketAdmin, ObjectListing, ServiceStats, UserAdmin, validate_bucket_name,
};
pub use crate::types::{
    BucketStat, BucketStatsResponse, NewUser, S3Credentials, ServerStats, User, UserRole,
    UserUpdate, UsersResponse,
};

/// Tracing target for client lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "shoal_admin::client";
/// Tracing target for object listing operations.
pub const TRACING_TARGET_OBJECTS: &str = "shoal_admin::objects";
/// Tracing target for bucket administration operations.
pub const TRACING_TARGET_BUCKETS: &str = "shoal_admin::buckets";
/// Tracing target for user administration operations.
pub const TRACING_TARGET_USERS: &str = "shoal_admin::users";
/// Tracing target for service statistics operations.
pub const TRACING_TARGET_STATS: &str = "shoal_admin::stats";
