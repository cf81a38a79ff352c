//! Parser for marker messages.
//!
//! Accepted forms (whitespace-separated, empty tokens dropped):
//!
//! - `開始` / `終了` — the marker alone; the message's own timestamp is used.
//! - `開始 2020-01-01T08:00:00` — marker plus an ISO-8601 datetime literal
//!   that replaces the message timestamp, letting a user backdate or
//!   forward-date an entry.
//!
//! Anything else is rejected with the original text and message timestamp
//! attached for diagnostics.

use crate::{KintaiError, MarkerConfig, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use kintai_types::{Record, SourceMessage};

/// Parse one message into a [`Record`].
///
/// `ts_epoch` is the message's own timestamp in whole epoch seconds. Pure
/// function of its inputs; no side effects.
pub fn parse_message(text: &str, ts_epoch: i64, config: &MarkerConfig) -> Result<Record> {
    let at = config
        .utc_offset()
        .timestamp_opt(ts_epoch, 0)
        .single()
        .ok_or_else(|| KintaiError::InvalidTimestamp {
            ts: ts_epoch.to_string(),
        })?;
    let invalid = || KintaiError::InvalidMarkerFormat {
        text: text.to_string(),
        at,
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [marker] => {
            let kind = config.kind_of(marker).ok_or_else(invalid)?;
            Ok(Record { at, kind })
        }
        [marker, literal] => {
            let kind = config.kind_of(marker).ok_or_else(invalid)?;
            let at = parse_iso_literal(literal, config.utc_offset()).ok_or_else(invalid)?;
            Ok(Record { at, kind })
        }
        _ => Err(invalid()),
    }
}

/// Parse an ISO-8601 datetime literal into the fixed offset.
///
/// An offset-carrying literal is converted; a naive literal is interpreted as
/// local time in the fixed offset.
fn parse_iso_literal(literal: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(literal) {
        return Some(dt.with_timezone(&offset));
    }
    let naive = NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M"))
        .ok()?;
    naive.and_local_timezone(offset).single()
}

/// Parse a whole batch of messages, in delivery order.
///
/// Fails on the first unparsable message; partial data would silently
/// understate hours, so a batch is all-or-nothing.
pub fn extract_records(messages: &[SourceMessage], config: &MarkerConfig) -> Result<Vec<Record>> {
    messages
        .iter()
        .map(|msg| {
            let ts_epoch = msg
                .epoch_seconds()
                .ok_or_else(|| KintaiError::InvalidTimestamp {
                    ts: msg.ts.clone(),
                })?;
            parse_message(&msg.text, ts_epoch, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kintai_types::MarkerKind;

    fn config() -> MarkerConfig {
        MarkerConfig::default()
    }

    // 2020-01-01T09:00:00+09:00
    const NEW_YEAR_9AM_JST: i64 = 1577836800;

    #[test]
    fn test_bare_start_marker_uses_message_timestamp() {
        let record = parse_message("開始", NEW_YEAR_9AM_JST, &config()).unwrap();
        assert_eq!(record.kind, MarkerKind::Start);
        assert_eq!(record.at.to_rfc3339(), "2020-01-01T09:00:00+09:00");
    }

    #[test]
    fn test_bare_end_marker() {
        let record = parse_message("終了", NEW_YEAR_9AM_JST, &config()).unwrap();
        assert_eq!(record.kind, MarkerKind::End);
    }

    #[test]
    fn test_backdated_marker_overrides_timestamp() {
        let record =
            parse_message("開始 2020-01-01T08:00:00", NEW_YEAR_9AM_JST, &config()).unwrap();
        assert_eq!(record.kind, MarkerKind::Start);
        assert_eq!(record.at.to_rfc3339(), "2020-01-01T08:00:00+09:00");
    }

    #[test]
    fn test_offset_literal_is_converted() {
        // 23:00Z on Dec 31 is 08:00+09:00 on Jan 1
        let record =
            parse_message("終了 2019-12-31T23:00:00+00:00", NEW_YEAR_9AM_JST, &config()).unwrap();
        assert_eq!(record.at.to_rfc3339(), "2020-01-01T08:00:00+09:00");
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        let record =
            parse_message("  開始   2020-01-01T08:00:00  ", NEW_YEAR_9AM_JST, &config()).unwrap();
        assert_eq!(record.at.to_rfc3339(), "2020-01-01T08:00:00+09:00");
    }

    #[test]
    fn test_unknown_marker_is_rejected() {
        let err = parse_message("foo", NEW_YEAR_9AM_JST, &config()).unwrap_err();
        match err {
            KintaiError::InvalidMarkerFormat { text, at } => {
                assert_eq!(text, "foo");
                assert_eq!(at.to_rfc3339(), "2020-01-01T09:00:00+09:00");
            }
            other => panic!("expected InvalidMarkerFormat, got {other}"),
        }
    }

    #[test]
    fn test_bad_iso_literal_is_rejected() {
        let err = parse_message("開始 yesterday", NEW_YEAR_9AM_JST, &config()).unwrap_err();
        assert!(matches!(err, KintaiError::InvalidMarkerFormat { .. }));
    }

    #[test]
    fn test_too_many_tokens_is_rejected() {
        let err = parse_message(
            "開始 2020-01-01T08:00:00 extra",
            NEW_YEAR_9AM_JST,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, KintaiError::InvalidMarkerFormat { .. }));
    }

    #[test]
    fn test_extract_records_preserves_delivery_order() {
        let messages = vec![
            SourceMessage::new("終了", "1577872800.000100"),
            SourceMessage::new("開始", "1577836800.000100"),
        ];
        let records = extract_records(&messages, &config()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, MarkerKind::End);
        assert_eq!(records[1].kind, MarkerKind::Start);
    }

    #[test]
    fn test_extract_records_rejects_bad_timestamp() {
        let messages = vec![SourceMessage::new("開始", "soon")];
        let err = extract_records(&messages, &config()).unwrap_err();
        assert!(matches!(err, KintaiError::InvalidTimestamp { .. }));
    }
}
