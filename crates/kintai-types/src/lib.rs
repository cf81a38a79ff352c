//! Shared types for the kintai work-hours tracker.

mod message;
mod record;
mod summary;

pub use message::*;
pub use record::*;
pub use summary::*;
