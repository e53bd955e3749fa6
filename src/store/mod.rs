//! In-memory ledger of employees, departments and requests.
//!
//! Stands in for the external persistence collaborator: point lookups,
//! the filtered interval queries the conflict detector feeds on, and
//! duplicate probes per (employee, date). Each web request takes the
//! ledger behind a single lock, so the read-modify-write of an
//! employee's balances never interleaves with another request's.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DateInterval, Department, Employee, LeaveOfAbsenceRecord, LeaveRequest, OvertimeRequest,
    RequestState, SickDayRecord,
};

/// All engine state for one deployment.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    employees: HashMap<String, Employee>,
    departments: HashMap<String, Department>,
    vacations: HashMap<Uuid, LeaveRequest>,
    overtime: HashMap<Uuid, OvertimeRequest>,
    sick_days: Vec<SickDayRecord>,
    leaves_of_absence: Vec<LeaveOfAbsenceRecord>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Adds or replaces a department.
    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id.clone(), department);
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees.get(id).ok_or_else(|| EngineError::NotFound {
            entity: "employee",
            id: id.to_string(),
        })
    }

    /// Looks up an employee by id for mutation.
    pub fn employee_mut(&mut self, id: &str) -> EngineResult<&mut Employee> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "employee",
                id: id.to_string(),
            })
    }

    /// Looks up a department by id.
    pub fn department(&self, id: &str) -> EngineResult<&Department> {
        self.departments
            .get(id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "department",
                id: id.to_string(),
            })
    }

    /// The department an employee belongs to.
    pub fn department_of(&self, employee: &Employee) -> EngineResult<&Department> {
        let department_id =
            employee
                .department_id
                .as_deref()
                .ok_or_else(|| EngineError::NotFound {
                    entity: "department",
                    id: format!("(none assigned to '{}')", employee.id),
                })?;
        self.department(department_id)
    }

    /// Stores a new vacation request.
    pub fn insert_vacation(&mut self, request: LeaveRequest) {
        self.vacations.insert(request.id, request);
    }

    /// Looks up a vacation request by id.
    pub fn vacation(&self, id: Uuid) -> EngineResult<&LeaveRequest> {
        self.vacations.get(&id).ok_or_else(|| EngineError::NotFound {
            entity: "vacation request",
            id: id.to_string(),
        })
    }

    /// Removes a vacation request for a decision pass.
    ///
    /// The decision flow takes the request out, mutates it alongside the
    /// employee, and re-inserts it whether or not the decision stuck.
    pub fn take_vacation(&mut self, id: Uuid) -> EngineResult<LeaveRequest> {
        self.vacations.remove(&id).ok_or_else(|| EngineError::NotFound {
            entity: "vacation request",
            id: id.to_string(),
        })
    }

    /// Stores a new overtime request.
    pub fn insert_overtime(&mut self, request: OvertimeRequest) {
        self.overtime.insert(request.id, request);
    }

    /// Looks up an overtime request by id.
    pub fn overtime_request(&self, id: Uuid) -> EngineResult<&OvertimeRequest> {
        self.overtime.get(&id).ok_or_else(|| EngineError::NotFound {
            entity: "overtime request",
            id: id.to_string(),
        })
    }

    /// Removes an overtime request for a decision pass.
    pub fn take_overtime(&mut self, id: Uuid) -> EngineResult<OvertimeRequest> {
        self.overtime.remove(&id).ok_or_else(|| EngineError::NotFound {
            entity: "overtime request",
            id: id.to_string(),
        })
    }

    /// Stores a sick-day record.
    pub fn insert_sick_day(&mut self, record: SickDayRecord) {
        self.sick_days.push(record);
    }

    /// Stores a leave-of-absence record.
    pub fn insert_leave_of_absence(&mut self, record: LeaveOfAbsenceRecord) {
        self.leaves_of_absence.push(record);
    }

    /// Intervals of an employee's own still-live vacation requests.
    ///
    /// Feeds the self-overlap rule: submitted and approved requests hold
    /// their days, denied ones do not.
    pub fn open_intervals_for(&self, employee_id: &str) -> Vec<DateInterval> {
        self.vacations
            .values()
            .filter(|request| request.employee_id == employee_id && request.state.is_live())
            .map(|request| request.interval())
            .collect()
    }

    /// Intervals of all approved vacations in a department.
    ///
    /// The snapshot the staffing-floor check counts against.
    pub fn approved_intervals_in(&self, department_id: &str) -> Vec<DateInterval> {
        self.vacations
            .values()
            .filter(|request| {
                request.department_id == department_id && request.state == RequestState::Approved
            })
            .map(|request| request.interval())
            .collect()
    }

    /// Pending vacation requests in a department, for the approval queue.
    pub fn pending_vacations_in(&self, department_id: &str) -> Vec<LeaveRequest> {
        self.vacations
            .values()
            .filter(|request| {
                request.department_id == department_id && request.state == RequestState::Submitted
            })
            .cloned()
            .collect()
    }

    /// True if the employee already claimed overtime for this date.
    pub fn overtime_claimed_on(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.overtime
            .values()
            .any(|request| request.employee_id == employee_id && request.date == date)
    }

    /// True if the employee already has a sick day recorded for this date.
    pub fn sick_day_recorded_on(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.sick_days
            .iter()
            .any(|record| record.employee_id == employee_id && record.date == date)
    }
}
