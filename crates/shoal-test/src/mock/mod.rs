//! Mock implementations of console provider traits for testing.
//!
//! This module provides a scripted object lister and observable session
//! guards for the traits defined in shoal-core. The mocks replay queued
//! responses deterministically, which makes concurrency scenarios such
//! as superseded navigations straightforward to stage.

mod lister;
mod pages;
mod session;

pub use lister::{GateHandle, MockLister};
pub use pages::{ListingPageExt, page_of, page_with_keys, page_with_prefixes};
pub use session::{CountingSessionGuard, FailingSessionGuard};
