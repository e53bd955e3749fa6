//! Working-day counting and date-range validity.
//!
//! All leave accounting runs on an 8-hour working day, Monday to Friday.
//! Statutory holidays are not modelled and are never excluded from the
//! count.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::DateInterval;

/// Hours charged for one working day away.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns true for Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Working hours consumed by an inclusive date range.
///
/// A request where `start == end` is charged a fixed single day (8 hours)
/// regardless of weekday; the weekday filter is only applied to multi-day
/// ranges. A one-day request on a Saturday therefore costs the same 8
/// hours a one-day weekday request does, which is inconsistent with the
/// multi-day rule that skips weekends entirely.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::working_hours_between;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2026-01-05 is a Monday; Mon-Fri is 5 working days.
/// let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
/// assert_eq!(working_hours_between(start, end), Decimal::from(40));
/// ```
pub fn working_hours_between(start: NaiveDate, end: NaiveDate) -> Decimal {
    if start == end {
        return HOURS_PER_DAY;
    }

    let working_days = DateInterval::new(start, end)
        .days()
        .filter(|day| is_working_day(*day))
        .count();

    Decimal::from(working_days as u64) * HOURS_PER_DAY
}

/// Validates that a requested range is ordered and not in the past.
///
/// Both bounds must be today or later, and the start must not come after
/// the end. `today` is injected so callers stay deterministic.
pub fn is_valid_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> bool {
    if start > end {
        return false;
    }
    if start < today || end < today {
        return false;
    }
    true
}

/// Advances a date by exactly one calendar year, same month and day.
///
/// February 29 has no anniversary in a common year and falls to March 1.
pub fn add_year(date: NaiveDate) -> NaiveDate {
    date.with_year(date.year() + 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(date.year() + 1, 3, 1).unwrap_or(date))
}
