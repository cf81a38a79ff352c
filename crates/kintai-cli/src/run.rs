//! The month/rollup processing pass.

use crate::config::Config;
use crate::source::MessageSource;
use crate::store::DataStore;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use kintai_core::{
    build_rollup, extract_records, get_target_year_months, month_range, sequence, summarize,
};

/// Compute and persist the current and previous month.
///
/// Both summaries are computed before anything is written, so a validation
/// failure in either month aborts the run without leaving partial output
/// behind. Returns the rollup that was written.
pub fn run(
    config: &Config,
    source: &dyn MessageSource,
    now: DateTime<FixedOffset>,
) -> Result<kintai_types::Rollup> {
    let markers = config.marker_config()?;
    let offset = markers.utc_offset();
    let store = DataStore::new(&config.data_dir);

    let targets = get_target_year_months(now);

    let mut summaries = Vec::with_capacity(targets.len());
    for month in targets {
        tracing::info!(target: "kintai::summary", "target: {}", month);
        let (from, to) = month_range(month, offset);
        let messages = source.fetch(from, to)?;
        let records = extract_records(&messages, &markers)
            .with_context(|| format!("failed to parse messages for {}", month))?;
        let records = sequence(records)
            .with_context(|| format!("corrupt marker history in {}", month))?;
        let summary = summarize(month, &records, now, offset)
            .with_context(|| format!("failed to summarize {}", month))?;
        summaries.push(summary);
    }

    for summary in &summaries {
        store.write_summary(summary)?;
    }

    let rollup = build_rollup(&summaries, now);
    store.write_rollup(&rollup)?;
    Ok(rollup)
}
