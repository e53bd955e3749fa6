//! Inclusive date intervals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// Leave requests and conflict detection both work in whole days, so the
/// engine passes intervals around rather than raw date pairs.
///
/// # Example
///
/// ```
/// use leave_engine::models::DateInterval;
/// use chrono::NaiveDate;
///
/// let interval = DateInterval::new(
///     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
/// );
/// assert_eq!(interval.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    /// First day of the interval.
    pub start: NaiveDate,
    /// Last day of the interval (inclusive).
    pub end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval covering [start, end].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// An interval covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Iterates every day in the interval, in order.
    ///
    /// Empty when start > end.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Returns true if `date` falls inside the interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
