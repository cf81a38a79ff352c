//! Cross-month rollup for display.

use chrono::{DateTime, FixedOffset};
use kintai_types::{MonthEntry, MonthSummary, Rollup};

/// Assemble the display rollup from already-built month summaries.
///
/// Summaries are taken in the order given (the driver passes
/// [current, previous]). Per month: ascending dates, parallel daily hours,
/// and a running prefix sum of those hours. Purely derived; nothing is
/// mutated after construction.
pub fn build_rollup(summaries: &[MonthSummary], now: DateTime<FixedOffset>) -> Rollup {
    let months = summaries
        .iter()
        .map(|summary| {
            // BTreeMap iteration is already date-ascending
            let dates: Vec<_> = summary.hours.keys().copied().collect();
            let daily_hours: Vec<f64> = summary.hours.values().copied().collect();
            let cumulative_hours: Vec<f64> = daily_hours
                .iter()
                .scan(0.0, |acc, h| {
                    *acc += h;
                    Some(*acc)
                })
                .collect();
            MonthEntry {
                year_month: summary.year_month.label(),
                dates,
                daily_hours,
                cumulative_hours,
            }
        })
        .collect();
    Rollup {
        updated_at: now,
        months,
    }
}
