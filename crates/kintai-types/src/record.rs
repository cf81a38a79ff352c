//! The parsed work-session marker record.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which side of a work session a marker closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Work began
    Start,
    /// Work ended
    End,
}

impl MarkerKind {
    /// The kind that must follow this one in a valid alternating stream.
    pub fn opposite(self) -> Self {
        match self {
            MarkerKind::Start => MarkerKind::End,
            MarkerKind::End => MarkerKind::Start,
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerKind::Start => write!(f, "start"),
            MarkerKind::End => write!(f, "end"),
        }
    }
}

/// One parsed marker: an instant in the tracker's fixed offset plus its kind.
///
/// Records are plain values; sorting and validation happen downstream, so two
/// records with the same timestamp keep their original message order under a
/// stable sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the marker takes effect, in the configured fixed offset
    pub at: DateTime<FixedOffset>,
    /// Start or End
    pub kind: MarkerKind,
}

impl Record {
    /// Create a Start record.
    pub fn start(at: DateTime<FixedOffset>) -> Self {
        Self {
            at,
            kind: MarkerKind::Start,
        }
    }

    /// Create an End record.
    pub fn end(at: DateTime<FixedOffset>) -> Self {
        Self {
            at,
            kind: MarkerKind::End,
        }
    }

    /// Calendar date of this record in its own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.at.date_naive()
    }
}
