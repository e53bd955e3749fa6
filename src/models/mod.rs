//! Core data models for the Leave & Overtime Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod department;
mod employee;
mod interval;
mod requests;

pub use department::Department;
pub use employee::{Employee, ManagerAuthority, Role};
pub use interval::DateInterval;
pub use requests::{
    LeaveOfAbsenceRecord, LeaveRequest, OvertimeRequest, RequestState, SickDayRecord,
};
