//! Error types for kintai.

use chrono::{DateTime, FixedOffset, NaiveDate};
use kintai_types::Record;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KintaiError {
    #[error("invalid message: {text:?} at {at}")]
    InvalidMarkerFormat {
        text: String,
        at: DateTime<FixedOffset>,
    },

    #[error("invalid message timestamp: {ts:?}")]
    InvalidTimestamp { ts: String },

    #[error(
        "two consecutive {kind} markers at {first_at} and {second_at}",
        kind = first.kind,
        first_at = first.at,
        second_at = second.at
    )]
    BrokenAlternation { first: Record, second: Record },

    #[error("record at {at} falls outside target month {year_month}")]
    RecordOutsideMonth {
        at: DateTime<FixedOffset>,
        year_month: String,
    },

    #[error("boundary synthesis left an unpairable marker sequence on {date}")]
    UnpairedRecords { date: NaiveDate },

    #[error("invalid UTC offset: {hours} hours")]
    InvalidOffset { hours: i32 },
}
