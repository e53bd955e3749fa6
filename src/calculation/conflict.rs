//! Scheduling-conflict detection against a department staffing floor.
//!
//! These functions are read-only counting checks over a snapshot of
//! existing leave intervals. They report which days would breach the
//! floor; accepting or denying stays with the orchestration layer and
//! the human approver.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DateInterval, LeaveRequest};

/// Days in a candidate range on which the staffing floor would be breached.
///
/// Builds a per-day occupancy counter over every day in
/// `[candidate_start, candidate_end]`, increments it for each day of each
/// existing interval that falls inside the candidate's day set, and
/// returns the days whose count reaches `max_simultaneous_off`, sorted
/// ascending. `max_simultaneous_off` is the department's headcount minus
/// its staffing floor; when it is zero every candidate day is reported.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::staffing_conflicts;
/// use leave_engine::models::DateInterval;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap();
/// let existing = vec![
///     DateInterval::new(date(2), date(4)),
///     DateInterval::new(date(7), date(10)),
/// ];
/// let conflicts = staffing_conflicts(date(4), date(8), &existing, 1);
/// assert_eq!(conflicts, vec![date(4), date(7), date(8)]);
/// ```
pub fn staffing_conflicts(
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
    existing: &[DateInterval],
    max_simultaneous_off: u32,
) -> Vec<NaiveDate> {
    let mut occupancy: BTreeMap<NaiveDate, u32> = DateInterval::new(candidate_start, candidate_end)
        .days()
        .map(|day| (day, 0))
        .collect();

    for interval in existing {
        for day in interval.days() {
            if let Some(count) = occupancy.get_mut(&day) {
                *count += 1;
            }
        }
    }

    occupancy
        .into_iter()
        .filter(|(_, count)| *count >= max_simultaneous_off)
        .map(|(day, _)| day)
        .collect()
}

/// Returns true if a candidate range shares a day with any of the
/// employee's own still-live intervals.
///
/// Used to stop an employee from holding two overlapping pending or
/// approved requests; denied requests do not count.
pub fn self_overlap(
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
    own_intervals: &[DateInterval],
) -> bool {
    let candidate = DateInterval::new(candidate_start, candidate_end);
    own_intervals
        .iter()
        .any(|interval| interval.days().any(|day| candidate.contains(day)))
}

/// Annotates each pending request with its staffing-conflict days.
///
/// Every pending request is evaluated independently against the same
/// approved snapshot: approving one request in the batch does not feed
/// into a sibling's computation. The annotation informs the manager's
/// approval queue; it never blocks a decision.
pub fn batch_conflicts<'a>(
    pending: &'a [LeaveRequest],
    approved: &[DateInterval],
    max_simultaneous_off: u32,
) -> Vec<(&'a LeaveRequest, Vec<NaiveDate>)> {
    pending
        .iter()
        .map(|request| {
            let conflicts = staffing_conflicts(
                request.start_date,
                request.end_date,
                approved,
                max_simultaneous_off,
            );
            (request, conflicts)
        })
        .collect()
}
