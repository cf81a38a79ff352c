//! Partitioning of a sorted record sequence into per-day buckets.

use crate::{KintaiError, Result};
use chrono::NaiveDate;
use kintai_types::{Record, YearMonth};
use std::collections::BTreeMap;

/// Bucket records by local calendar date within `month`.
///
/// Every day of the month gets a bucket, empty days included, so downstream
/// aggregation can zero-fill the summary. Records arrive sorted and validated;
/// relative order within a bucket is preserved. A record dated outside the
/// month means the caller's month-range filtering is broken, which is reported
/// as an internal error rather than a user error.
pub fn partition(records: &[Record], month: YearMonth) -> Result<BTreeMap<NaiveDate, Vec<Record>>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Record>> =
        month.days().into_iter().map(|d| (d, Vec::new())).collect();
    for record in records {
        let date = record.local_date();
        let bucket = buckets
            .get_mut(&date)
            .ok_or_else(|| KintaiError::RecordOutsideMonth {
                at: record.at,
                year_month: month.label(),
            })?;
        bucket.push(*record);
    }
    Ok(buckets)
}
