//! JSON persistence for summaries and the display rollup.

use anyhow::{Context, Result};
use kintai_types::{MonthSummary, Rollup};
use std::path::{Path, PathBuf};

/// File name of the cross-month display structure.
const DISPLAY_FILE: &str = "display.json";

/// Writes pipeline outputs under a data directory:
/// `<data_dir>/YYYY-MM.json` per month and `<data_dir>/display.json`.
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one month's date→hours mapping. Returns the written path.
    pub fn write_summary(&self, summary: &MonthSummary) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.json", summary.year_month.label()));
        self.write_json(&path, &summary.hours)?;
        Ok(path)
    }

    /// Write the display rollup. Returns the written path.
    pub fn write_rollup(&self, rollup: &Rollup) -> Result<PathBuf> {
        let path = self.dir.join(DISPLAY_FILE);
        self.write_json(&path, rollup)?;
        Ok(path)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create data dir {}", self.dir.display()))?;
        let json = serde_json::to_string(value)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(target: "kintai::store", "saved {}", path.display());
        Ok(())
    }
}
