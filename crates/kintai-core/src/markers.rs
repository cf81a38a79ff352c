//! Marker vocabulary and the fixed tracking offset.

use crate::{KintaiError, Result};
use chrono::FixedOffset;
use kintai_types::MarkerKind;

/// Default start marker texts.
pub const DEFAULT_START_MARKERS: &[&str] = &["開始"];
/// Default end marker texts.
pub const DEFAULT_END_MARKERS: &[&str] = &["終了"];
/// Default tracking offset, hours east of UTC (JST).
pub const DEFAULT_OFFSET_HOURS: i32 = 9;

/// Marker vocabulary plus the fixed UTC offset every timestamp is interpreted
/// in. Injected into parsing and aggregation so nothing reads process-global
/// time zone state.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    start_markers: Vec<String>,
    end_markers: Vec<String>,
    utc_offset: FixedOffset,
}

impl MarkerConfig {
    /// Build a config, rejecting an out-of-range offset.
    pub fn new(
        start_markers: Vec<String>,
        end_markers: Vec<String>,
        offset_hours: i32,
    ) -> Result<Self> {
        let utc_offset = FixedOffset::east_opt(offset_hours * 3600)
            .ok_or(KintaiError::InvalidOffset {
                hours: offset_hours,
            })?;
        Ok(Self {
            start_markers,
            end_markers,
            utc_offset,
        })
    }

    /// The kind a marker token maps to, or `None` if unrecognized.
    pub fn kind_of(&self, token: &str) -> Option<MarkerKind> {
        if self.start_markers.iter().any(|m| m == token) {
            return Some(MarkerKind::Start);
        }
        if self.end_markers.iter().any(|m| m == token) {
            return Some(MarkerKind::End);
        }
        None
    }

    /// The fixed offset all instants are interpreted in.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_START_MARKERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_END_MARKERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_OFFSET_HOURS,
        )
        .expect("default offset is valid")
    }
}
