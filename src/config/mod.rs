//! Policy configuration for the Leave & Overtime Accrual Engine.
//!
//! The entitlement tier table is data, not code: HR adjusts it without a
//! deploy, so it lives in a YAML file loaded at startup.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{EntitlementTier, PolicyConfig};
