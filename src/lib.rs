//! Leave and Overtime Accrual Engine
//!
//! This crate provides the leave side of an employee time-tracking system:
//! vacation, overtime, sick-day and leave-of-absence submission, tenure-based
//! entitlement accrual, overtime-rate banking, staffing-conflict detection,
//! and anniversary balance rollover.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
