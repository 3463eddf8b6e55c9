#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod mock;

pub use mock::{
    CountingSessionGuard, FailingSessionGuard, GateHandle, ListingPageExt, MockLister, page_of,
    page_with_keys, page_with_prefixes,
};
