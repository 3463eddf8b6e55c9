//! Shared data types for prefix navigation and object display.
//!
//! These types carry no behavior beyond validation and formatting; they
//! are the vocabulary exchanged between the listing transport, the
//! browse state machine, and the host UI.

mod object_entry;
mod prefix;

pub use object_entry::{ObjectEntry, format_size};
pub use prefix::{Breadcrumb, DELIMITER, Prefix};
