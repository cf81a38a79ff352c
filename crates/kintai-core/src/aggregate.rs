//! Per-day interval reconstruction and hours totaling.
//!
//! A day's bucket may be open at either edge: a session that crossed midnight
//! shows up as a leading `End`, and a session still running shows up as a
//! trailing `Start`. Both get a synthetic boundary record so the bucket pairs
//! cleanly.

use crate::{KintaiError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use kintai_types::{MarkerKind, Record};

/// An instant at the given wall-clock time of `date` in the fixed offset.
fn local_instant(
    date: NaiveDate,
    hour: u32,
    min: u32,
    sec: u32,
    offset: FixedOffset,
) -> DateTime<FixedOffset> {
    let naive = date
        .and_hms_opt(hour, min, sec)
        .expect("wall-clock time within a day");
    // a fixed offset maps every local time to exactly one instant
    offset
        .from_local_datetime(&naive)
        .single()
        .expect("fixed offset is unambiguous")
}

/// Total hours worked on `date` given its (sorted, validated) bucket.
///
/// Boundary rules:
/// - bucket opens with an `End` — the session began before this day, so a
///   `Start` is synthesized at local midnight;
/// - bucket closes with a `Start` — the session is still open, so an `End` is
///   synthesized at `min(now, 23:59:59 of date)`; an open session is credited
///   only up to the current moment, never into the future.
///
/// The bucket itself is never mutated; the extended sequence is a fresh copy,
/// so re-aggregating the same bucket gives the same answer. After synthesis
/// the sequence must pair up as (Start, End) couples; anything else is an
/// internal defect surfaced as [`KintaiError::UnpairedRecords`].
pub fn hours_for(
    date: NaiveDate,
    records: &[Record],
    now: DateTime<FixedOffset>,
    offset: FixedOffset,
) -> Result<f64> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut extended = Vec::with_capacity(records.len() + 2);
    if records[0].kind == MarkerKind::End {
        extended.push(Record::start(local_instant(date, 0, 0, 0, offset)));
    }
    extended.extend_from_slice(records);
    if extended.last().is_some_and(|r| r.kind == MarkerKind::Start) {
        let day_end = local_instant(date, 23, 59, 59, offset);
        extended.push(Record::end(now.min(day_end)));
    }

    let mut total_seconds = 0i64;
    for pair in extended.chunks(2) {
        match pair {
            [start, end] if start.kind == MarkerKind::Start && end.kind == MarkerKind::End => {
                total_seconds += (end.at - start.at).num_seconds();
            }
            _ => return Err(KintaiError::UnpairedRecords { date }),
        }
    }
    Ok(total_seconds as f64 / 3600.0)
}
