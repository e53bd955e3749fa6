//! Annual vacation entitlement from the tenure tier table.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::EntitlementTier;

/// Whole years of service completed as of `today`.
///
/// Computed as elapsed days divided by 365, deliberately not
/// calendar-aware: no leap-year or month-boundary correction is applied.
/// An anniversary in the future yields a negative value, which never
/// qualifies for a tier.
pub fn years_of_service(anniversary: NaiveDate, today: NaiveDate) -> i64 {
    (today - anniversary).num_days() / 365
}

/// The annual vacation-hour allowance an employee has reached.
///
/// Walks the tier table and keeps the allowance of every tier whose
/// threshold the tenure has reached, so with a table sorted ascending by
/// threshold the highest qualifying tier wins. Entitlement is a step
/// function of tenure, not interpolated. Returns zero when no tier
/// qualifies.
///
/// Duplicate thresholds are a data-integrity concern, not a runtime
/// error; the last-evaluated tier wins.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::annual_entitlement;
/// use leave_engine::config::EntitlementTier;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     EntitlementTier { years_employed: 1, annual_vacation_hours: Decimal::from(80) },
///     EntitlementTier { years_employed: 3, annual_vacation_hours: Decimal::from(120) },
/// ];
/// let anniversary = NaiveDate::from_ymd_opt(2022, 10, 20).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(annual_entitlement(anniversary, &tiers, today), Decimal::from(80));
/// ```
pub fn annual_entitlement(
    anniversary: NaiveDate,
    tiers: &[EntitlementTier],
    today: NaiveDate,
) -> Decimal {
    let years = years_of_service(anniversary, today);

    let mut allowed_hours = Decimal::ZERO;
    for tier in tiers {
        if years >= i64::from(tier.years_employed) {
            allowed_hours = tier.annual_vacation_hours;
        }
    }
    allowed_hours
}
