//! Core pipeline for the kintai work-hours tracker.
//!
//! Raw `(text, ts)` chat messages flow one way through the crate:
//! parse ([`parser`]) → sort and validate ([`sequencer`]) → bucket by day
//! ([`partition`]) → reconstruct intervals and total hours ([`aggregate`]) →
//! complete month mapping ([`summary`]) → display rollup ([`rollup`]).
//! Everything is synchronous and pure in (input batch, now); fetching
//! messages and writing files belong to the driver.

mod aggregate;
mod calendar;
mod error;
mod markers;
mod parser;
mod partition;
mod rollup;
mod sequencer;
mod summary;

pub use aggregate::hours_for;
pub use calendar::{get_target_year_months, month_range};
pub use error::KintaiError;
pub use markers::{
    DEFAULT_END_MARKERS, DEFAULT_OFFSET_HOURS, DEFAULT_START_MARKERS, MarkerConfig,
};
pub use parser::{extract_records, parse_message};
pub use partition::partition;
pub use rollup::build_rollup;
pub use sequencer::sequence;
pub use summary::summarize;

/// Result type for kintai operations.
pub type Result<T> = std::result::Result<T, KintaiError>;
