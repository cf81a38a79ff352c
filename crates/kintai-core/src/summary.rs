//! Month summary builder.

use crate::{Result, aggregate, partition};
use chrono::{DateTime, FixedOffset};
use kintai_types::{MonthSummary, Record, YearMonth};

/// Build the complete date→hours mapping for one month.
///
/// `records` must already be sorted and alternation-validated, and must all
/// fall within `month`. Every calendar day of the month appears in the result,
/// zero-filled where nothing was recorded. Pure in (records, now): identical
/// inputs give an identical summary.
pub fn summarize(
    month: YearMonth,
    records: &[Record],
    now: DateTime<FixedOffset>,
    offset: FixedOffset,
) -> Result<MonthSummary> {
    let buckets = partition::partition(records, month)?;
    let mut hours = std::collections::BTreeMap::new();
    for (date, bucket) in buckets {
        hours.insert(date, aggregate::hours_for(date, &bucket, now, offset)?);
    }
    tracing::debug!(
        target: "kintai::summary",
        "summarized {}: {:.2} hours over {} days",
        month,
        hours.values().sum::<f64>(),
        hours.len()
    );
    Ok(MonthSummary {
        year_month: month,
        hours,
    })
}
