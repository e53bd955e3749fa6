//! Pure calculation logic for the Leave & Overtime Accrual Engine.
//!
//! This module contains the date-interval business rules: working-day
//! counting and range validity, annual vacation entitlement from the
//! tenure tier table, the tiered overtime-to-banked-hours conversion,
//! and scheduling-conflict detection against a department staffing
//! floor. Everything here is side-effect free; balance mutation lives in
//! [`crate::engine`].

mod calendar;
mod conflict;
mod entitlement;
mod overtime_rate;

pub use calendar::{
    HOURS_PER_DAY, add_year, is_valid_range, is_working_day, working_hours_between,
};
pub use conflict::{batch_conflicts, self_overlap, staffing_conflicts};
pub use entitlement::{annual_entitlement, years_of_service};
pub use overtime_rate::{
    BASE_SHIFT_HOURS, DOUBLE_TIME, DOUBLE_TIME_THRESHOLD, TIME_AND_A_HALF, banked_overtime_hours,
};
