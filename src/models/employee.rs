//! Employee model and role handling.
//!
//! This module defines the Employee struct, the role capability set, and
//! the manager-authority record that scopes approval rights to a
//! department.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A role an employee can hold.
///
/// Roles are non-exclusive capability tags: an employee can simultaneously
/// be a manager and an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular staff member who submits leave and overtime requests.
    Employee,
    /// A staff member who can decide requests within their authority scope.
    Manager,
    /// A staff member who can decide requests in any department.
    Owner,
}

/// Approval authority held by a manager.
///
/// Created and removed only through [`Employee::set_manager_role`] and
/// [`Employee::clear_manager_role`], so the Manager role tag and this
/// record never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerAuthority {
    /// The department the manager decides requests for.
    pub department_id: String,
    /// When true the manager may decide requests in any department.
    #[serde(default)]
    pub approve_any_staff: bool,
}

/// Represents a staff member tracked by the engine.
///
/// Hour balances (`vacation_used`, `overtime_hours`, `unpaid_time`) are
/// always non-negative; they are only mutated by the reconciliation
/// functions in [`crate::engine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub full_name: String,
    /// The department the employee belongs to, if assigned.
    pub department_id: Option<String>,
    /// The employee's job title, if assigned.
    pub job_title: Option<String>,
    /// The date the employee started service.
    pub anniversary_date: NaiveDate,
    /// The next date the anniversary rollover applies on.
    pub next_rollover: NaiveDate,
    /// Rollover gate flag; see [`crate::engine::apply_rollover`].
    pub rollover_pending: bool,
    /// Vacation hours consumed in the current anniversary year.
    pub vacation_used: Decimal,
    /// Banked overtime hours available to spend on leave.
    pub overtime_hours: Decimal,
    /// Unpaid time-off hours accrued.
    pub unpaid_time: Decimal,
    /// The capability set of roles this employee holds.
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    /// Approval authority, present exactly when the Manager role is held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_authority: Option<ManagerAuthority>,
}

impl Employee {
    /// Creates an employee with zeroed balances and the Employee role.
    ///
    /// The first rollover is scheduled one anniversary after the service
    /// start date.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        anniversary_date: NaiveDate,
    ) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert(Role::Employee);
        Self {
            id: id.into(),
            full_name: full_name.into(),
            department_id: None,
            job_title: None,
            anniversary_date,
            next_rollover: crate::calculation::add_year(anniversary_date),
            rollover_pending: true,
            vacation_used: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            unpaid_time: Decimal::ZERO,
            roles,
            manager_authority: None,
        }
    }

    /// Returns true if the employee holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if the employee holds the Manager role.
    pub fn is_manager(&self) -> bool {
        self.has_role(Role::Manager)
    }

    /// Returns true if the employee holds the Owner role.
    pub fn is_owner(&self) -> bool {
        self.has_role(Role::Owner)
    }

    /// Grants the Manager role together with its authority record.
    ///
    /// A single operation keeps the role tag and the authority record
    /// consistent; there is no path that sets one without the other.
    pub fn set_manager_role(&mut self, authority: ManagerAuthority) {
        self.roles.insert(Role::Manager);
        self.manager_authority = Some(authority);
    }

    /// Revokes the Manager role and removes the authority record.
    pub fn clear_manager_role(&mut self) {
        self.roles.remove(&Role::Manager);
        self.manager_authority = None;
    }

    /// Returns true if this employee may decide requests in `department_id`.
    ///
    /// Owners decide anywhere. Managers decide within their authority
    /// department, or anywhere when `approve_any_staff` is set.
    pub fn can_approve_for(&self, department_id: &str) -> bool {
        if self.is_owner() {
            return true;
        }
        if !self.is_manager() {
            return false;
        }
        match &self.manager_authority {
            Some(authority) => {
                authority.approve_any_staff || authority.department_id == department_id
            }
            None => false,
        }
    }
}
