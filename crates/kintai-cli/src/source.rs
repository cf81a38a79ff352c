//! Message sources.
//!
//! The pipeline consumes a fully drained, time-bounded batch of `(text, ts)`
//! pairs. The shipped implementation reads a JSONL chat export (one
//! `{"text": ..., "ts": ...}` object per line), which keeps the tool offline;
//! anything that can produce `SourceMessage`s for an instant range can stand
//! in via [`MessageSource`].

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};
use kintai_types::SourceMessage;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A drained, time-bounded supply of raw chat messages.
pub trait MessageSource {
    /// All messages whose timestamp falls in `[from, to]` (inclusive), as one
    /// complete batch in delivery order. Pagination, if any, is the source's
    /// problem; the pipeline never sees a partial batch.
    fn fetch(
        &self,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<Vec<SourceMessage>>;
}

/// JSONL export file source.
pub struct ExportFileSource {
    path: PathBuf,
}

impl ExportFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSource for ExportFileSource {
    fn fetch(
        &self,
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>,
    ) -> Result<Vec<SourceMessage>> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("failed to open export file {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let from_secs = from.timestamp();
        let to_secs = to.timestamp();

        let mut messages = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let message: SourceMessage = serde_json::from_str(&line).with_context(|| {
                format!(
                    "malformed export line {} in {}",
                    line_no + 1,
                    self.path.display()
                )
            })?;
            let Some(secs) = message.epoch_seconds() else {
                bail!(
                    "bad timestamp {:?} on export line {} in {}",
                    message.ts,
                    line_no + 1,
                    self.path.display()
                );
            };
            if secs >= from_secs && secs <= to_secs {
                messages.push(message);
            }
        }

        tracing::info!(
            target: "kintai::fetch",
            "fetched {} messages from {} for [{} .. {}]",
            messages.len(),
            self.path.display(),
            from,
            to
        );
        Ok(messages)
    }
}
