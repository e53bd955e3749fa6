//! Tiered overtime-to-banked-hours conversion.

use rust_decimal::Decimal;

/// Hours in the standard base shift the overtime was worked on top of.
pub const BASE_SHIFT_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Total shift length (base + overtime) beyond which double time applies.
pub const DOUBLE_TIME_THRESHOLD: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Multiplier for the first tier of overtime.
pub const TIME_AND_A_HALF: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for overtime beyond the double-time threshold.
pub const DOUBLE_TIME: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Converts raw overtime hours worked into banked time-off hours.
///
/// The input is hours worked beyond a standard 8-hour shift, not clock
/// times. The first 4 overtime hours (up to a 12-hour total shift) bank
/// at 1.5x; anything past a 12-hour total banks at 2x.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::banked_overtime_hours;
/// use rust_decimal::Decimal;
///
/// // 4 hours at time and a half
/// assert_eq!(banked_overtime_hours(Decimal::from(4)), Decimal::from(6));
///
/// // 8 hours: 4 at 1.5x plus 4 at 2x
/// assert_eq!(banked_overtime_hours(Decimal::from(8)), Decimal::from(14));
/// ```
pub fn banked_overtime_hours(raw_hours: Decimal) -> Decimal {
    let total_hours = raw_hours + BASE_SHIFT_HOURS;

    if total_hours <= DOUBLE_TIME_THRESHOLD {
        raw_hours * TIME_AND_A_HALF
    } else {
        let double_time_hours = total_hours - DOUBLE_TIME_THRESHOLD;
        let first_tier_hours = DOUBLE_TIME_THRESHOLD - BASE_SHIFT_HOURS;
        first_tier_hours * TIME_AND_A_HALF + double_time_hours * DOUBLE_TIME
    }
}
