//! Month-level aggregation outputs.
//!
//! These are the shapes handed to persistence: a per-month date→hours map and
//! the cross-month rollup used for display, both serialized as JSON by the
//! driver.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A calendar month identified by year and 1-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `instant` (in that instant's offset).
    pub fn containing(instant: DateTime<FixedOffset>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // month is validated at construction sites; 1..=12 always forms a date
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("invalid year-month {}-{}", self.year, self.month))
    }

    /// Last calendar day of the month (leap-year aware).
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .unwrap_or_else(|| panic!("invalid year-month {}-{}", self.year, self.month))
            .pred_opt()
            .expect("first day of a month has a predecessor")
    }

    /// Every calendar day of the month, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_day()
            .iter_days()
            .take_while(|d| *d <= self.last_day())
            .collect()
    }

    /// The immediately preceding month, correct across the January boundary.
    pub fn previous(&self) -> Self {
        let last_of_prev = self
            .first_day()
            .pred_opt()
            .expect("first day of a month has a predecessor");
        Self {
            year: last_of_prev.year(),
            month: last_of_prev.month(),
        }
    }

    /// `YYYY-MM` label used in file names and rollup entries.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Complete date→hours mapping for one month.
///
/// Every calendar day of the month is present, zero-filled where no work was
/// recorded. Immutable once built; `hours` keys serialize as ISO `YYYY-MM-DD`
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub year_month: YearMonth,
    pub hours: BTreeMap<NaiveDate, f64>,
}

impl MonthSummary {
    /// Total hours over the month.
    pub fn total_hours(&self) -> f64 {
        self.hours.values().sum()
    }
}

/// One month of the display rollup: dates with parallel daily and
/// running-cumulative hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEntry {
    pub year_month: String,
    pub dates: Vec<NaiveDate>,
    pub daily_hours: Vec<f64>,
    pub cumulative_hours: Vec<f64>,
}

/// The cross-month display structure, stamped with its construction instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub updated_at: DateTime<FixedOffset>,
    pub months: Vec<MonthEntry>,
}
