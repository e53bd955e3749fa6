//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the leave
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EntitlementTier, PolicyConfig};

/// Loads and provides access to the leave policy.
///
/// The `PolicyLoader` reads the YAML policy file and exposes the
/// entitlement tier table, sorted ascending by tenure threshold so the
/// entitlement walk always lands on the highest qualifying tier.
///
/// # File Structure
///
/// ```text
/// config/policy.yaml:
///
/// entitlement_tiers:
///   - years_employed: 1
///     annual_vacation_hours: 80
///   - years_employed: 3
///     annual_vacation_hours: 120
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// for tier in loader.tiers() {
///     println!("{} years: {} hours", tier.years_employed, tier.annual_vacation_hours);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    tiers: Vec<EntitlementTier>,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// Returns an error if the file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PolicyConfig>(path)?;
        Ok(Self::from_config(config))
    }

    /// Builds a loader from an already-parsed configuration.
    ///
    /// Useful in tests that construct the tier table inline.
    pub fn from_config(config: PolicyConfig) -> Self {
        let mut tiers = config.entitlement_tiers;
        tiers.sort_by_key(|tier| tier.years_employed);
        Self { tiers }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The entitlement tier table, sorted ascending by threshold.
    pub fn tiers(&self) -> &[EntitlementTier] {
        &self.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn tier(years: u32, hours: u32) -> EntitlementTier {
        EntitlementTier {
            years_employed: years,
            annual_vacation_hours: Decimal::from(hours),
        }
    }

    #[test]
    fn test_from_config_sorts_tiers_by_threshold() {
        let loader = PolicyLoader::from_config(PolicyConfig {
            entitlement_tiers: vec![tier(5, 160), tier(1, 80), tier(3, 120)],
        });
        let thresholds: Vec<u32> = loader.tiers().iter().map(|t| t.years_employed).collect();
        assert_eq!(thresholds, vec![1, 3, 5]);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let result = PolicyLoader::load("/missing/policy.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert_eq!(path, "/missing/policy.yaml");
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_tier_table_from_yaml() {
        let yaml = "entitlement_tiers:\n  - years_employed: 1\n    annual_vacation_hours: 80\n  - years_employed: 3\n    annual_vacation_hours: 120\n";
        let config: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
        let loader = PolicyLoader::from_config(config);
        assert_eq!(loader.tiers().len(), 2);
        assert_eq!(
            loader.tiers()[1].annual_vacation_hours,
            Decimal::from(120)
        );
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = std::env::temp_dir().join("leave_engine_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_policy.yaml");
        std::fs::write(&path, "entitlement_tiers: {not a list}").unwrap();

        let result = PolicyLoader::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_repo_policy_file() {
        let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
        assert!(!loader.tiers().is_empty());
    }
}
