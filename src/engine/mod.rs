//! Command layer for the Leave & Overtime Accrual Engine.
//!
//! Sequences the pure calculation rules into accept/reject decisions
//! for submitted requests, applies manager decisions, and owns all
//! balance mutation. Submission short-circuits on the first failing
//! rule; reconciliation is the only code that touches stored balances.

mod decide;
mod reconcile;
mod submit;

pub use decide::{approve_overtime, approve_vacation, deny_overtime, deny_vacation};
pub use reconcile::{apply_rollover, on_approve_overtime, on_approve_vacation, on_deny_vacation};
pub use submit::{record_leave_of_absence, record_sick_day, submit_overtime, submit_vacation};
