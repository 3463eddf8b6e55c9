//! Wire types for the administrative API.

mod bucket_stats;
mod credentials;
mod server_stats;
mod user;

pub use bucket_stats::{BucketStat, BucketStatsResponse};
pub use credentials::S3Credentials;
pub use server_stats::ServerStats;
pub use user::{NewUser, User, UserRole, UserUpdate, UsersResponse};
