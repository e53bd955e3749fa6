//! Configuration types for the leave policy.
//!
//! This module contains the strongly-typed structures deserialized from
//! the YAML policy file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of the vacation entitlement table.
///
/// An employee whose tenure has reached `years_employed` qualifies for
/// `annual_vacation_hours` per anniversary year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntitlementTier {
    /// Years of service required to reach this tier.
    pub years_employed: u32,
    /// Vacation hours granted per year at this tier.
    pub annual_vacation_hours: Decimal,
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The entitlement tier table, in file order.
    pub entitlement_tiers: Vec<EntitlementTier>,
}
