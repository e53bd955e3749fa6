//! Department model.

use serde::{Deserialize, Serialize};

/// A department with a staffing floor.
///
/// The floor is soft: `min_staff` exceeding `staff_count` is surfaced by
/// conflict reporting rather than rejected at the data level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The department's name.
    pub name: String,
    /// The division the department belongs to.
    pub division: String,
    /// Current headcount of the department.
    pub staff_count: u32,
    /// Minimum staff that must remain on duty on any day.
    pub min_staff: u32,
}

impl Department {
    /// The number of staff who can be off on the same day before the
    /// staffing floor is breached.
    pub fn max_simultaneous_off(&self) -> u32 {
        self.staff_count.saturating_sub(self.min_staff)
    }
}
