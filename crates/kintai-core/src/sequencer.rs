//! Chronological ordering and alternation validation.

use crate::{KintaiError, Result};
use kintai_types::Record;

/// Sort records by timestamp and verify strict start/end alternation.
///
/// The sort is stable, so records sharing a timestamp keep their delivery
/// order. Two adjacent records of the same kind mean the source history is
/// corrupt; the whole batch is rejected rather than skipped around, since any
/// total computed from it would be meaningless.
pub fn sequence(mut records: Vec<Record>) -> Result<Vec<Record>> {
    records.sort_by_key(|r| r.at);
    for pair in records.windows(2) {
        if pair[0].kind == pair[1].kind {
            return Err(KintaiError::BrokenAlternation {
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(records)
}
