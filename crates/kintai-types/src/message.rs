//! Raw chat messages as delivered by a message source.

use serde::{Deserialize, Serialize};

/// One raw `(text, ts)` pair from the message source.
///
/// `ts` is a Slack-style timestamp: a decimal epoch-seconds string such as
/// `"1577836800.000200"`. Only whole seconds are significant; the fractional
/// part exists to disambiguate message order on the source side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMessage {
    /// Message body (expected to contain a marker)
    pub text: String,
    /// Decimal epoch-seconds string
    pub ts: String,
}

impl SourceMessage {
    pub fn new(text: impl Into<String>, ts: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ts: ts.into(),
        }
    }

    /// Whole epoch seconds of `ts`, or `None` if it is not a decimal number.
    pub fn epoch_seconds(&self) -> Option<i64> {
        let raw: f64 = self.ts.trim().parse().ok()?;
        if !raw.is_finite() {
            return None;
        }
        Some(raw.trunc() as i64)
    }
}
