#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod listing;
pub mod session;
pub mod types;

mod error;

// Re-export key types for convenience
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use listing::{
    DEFAULT_PAGE_SIZE, ListObjectsRequest, ListingPage, MAX_PAGE_SIZE, ObjectLister,
    SharedObjectLister, page_stream,
};
pub use session::{SessionGuard, SharedSessionGuard, StaticSessionGuard};
pub use types::{Breadcrumb, DELIMITER, ObjectEntry, Prefix, format_size};
