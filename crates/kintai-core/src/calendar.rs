//! Target-month selection and month instant ranges.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};
use kintai_types::YearMonth;

/// The months a run covers: the current calendar month and the one before it.
///
/// The previous month is derived by stepping back from the first day of the
/// current month, which handles the December/January rollover.
pub fn get_target_year_months(now: DateTime<FixedOffset>) -> [YearMonth; 2] {
    let current = YearMonth::containing(now);
    [current, current.previous()]
}

/// Inclusive instant range covering a whole month in the fixed offset:
/// first day 00:00:00 through last day 23:59:59.999999.
pub fn month_range(
    month: YearMonth,
    offset: FixedOffset,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let first = month.first_day();
    let last = month.last_day();
    let from = offset
        .with_ymd_and_hms(first.year(), first.month(), first.day(), 0, 0, 0)
        .single()
        .expect("fixed offset is unambiguous");
    let to = offset
        .with_ymd_and_hms(last.year(), last.month(), last.day(), 23, 59, 59)
        .single()
        .expect("fixed offset is unambiguous")
        + chrono::Duration::microseconds(999_999);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_targets_mid_year() {
        let now = jst().with_ymd_and_hms(2020, 7, 15, 12, 0, 0).unwrap();
        let [current, previous] = get_target_year_months(now);
        assert_eq!(current, YearMonth::new(2020, 7));
        assert_eq!(previous, YearMonth::new(2020, 6));
    }

    #[test]
    fn test_targets_january_rolls_back_a_year() {
        let now = jst().with_ymd_and_hms(2020, 1, 3, 8, 0, 0).unwrap();
        let [current, previous] = get_target_year_months(now);
        assert_eq!(current, YearMonth::new(2020, 1));
        assert_eq!(previous, YearMonth::new(2019, 12));
    }

    #[test]
    fn test_month_range_bounds() {
        let (from, to) = month_range(YearMonth::new(2020, 2), jst());
        assert_eq!(from.to_rfc3339(), "2020-02-01T00:00:00+09:00");
        assert_eq!(to.to_rfc3339(), "2020-02-29T23:59:59.999999+09:00");
    }
}
