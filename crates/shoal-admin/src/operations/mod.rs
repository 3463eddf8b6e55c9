//! Operations exposed by the administrative API.
//!
//! Each operation group borrows a cloned [`AdminClient`] and wraps one area
//! of the API surface: object listing, bucket administration, user and
//! credential management, and service statistics.
//!
//! [`AdminClient`]: crate::AdminClient

mod bucket_admin;
mod object_listing;
mod service_stats;
mod user_admin;

pub use bucket_admin::{BucketAdmin, validate_bucket_name};
pub use object_listing::ObjectListing;
pub use service_stats::ServiceStats;
pub use user_admin::UserAdmin;
