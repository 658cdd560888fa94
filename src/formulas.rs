//! Distance, speed and calorie formulas shared by the workout variants.

use crate::error::FormulaError;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Running step length and calorie coefficients.
pub mod running {
    /// Meters covered per step.
    pub const STEP_LENGTH_M: f64 = 0.65;
    pub const COEFF_1: f64 = 18.0;
    pub const COEFF_2: f64 = 20.0;
}

/// Walking-with-poles step length and calorie coefficients.
pub mod walking {
    /// Meters covered per step.
    pub const STEP_LENGTH_M: f64 = 0.65;
    pub const COEFF_1: f64 = 0.035;
    pub const COEFF_2: f64 = 0.029;
}

/// Swimming stroke length and calorie coefficients.
pub mod swimming {
    /// Meters covered per stroke.
    pub const STROKE_LENGTH_M: f64 = 1.38;
    pub const COEFF_1: f64 = 1.1;
    pub const COEFF_2: f64 = 2.0;
}

/// Distance in kilometers covered by `action_count` steps or strokes of
/// `length_m` meters each.
pub fn distance_km(action_count: u32, length_m: f64) -> f64 {
    action_count as f64 * length_m / M_IN_KM
}

/// Average speed in km/h over a workout of `duration_hours`.
///
/// Returns an error for a zero duration instead of producing infinity.
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> Result<f64, FormulaError> {
    if duration_hours == 0.0 {
        return Err(FormulaError::DivideByZero {
            divisor: "duration_hours",
        });
    }
    Ok(distance_km / duration_hours)
}

/// Quotient rounded toward negative infinity.
///
/// The walking formula uses this in place of ordinary division:
/// `floor_div(10.0, 4.0)` is `2.0`, not `2.5`.
pub fn floor_div(dividend: f64, divisor: f64, name: &'static str) -> Result<f64, FormulaError> {
    if divisor == 0.0 {
        return Err(FormulaError::DivideByZero { divisor: name });
    }
    Ok((dividend / divisor).floor())
}

/// Converts a duration in hours to minutes.
pub fn minutes(duration_hours: f64) -> f64 {
    duration_hours * MIN_IN_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_distance_steps() {
        // 15000 steps × 0.65 m = 9.75 km
        assert!(approx_eq(distance_km(15000, running::STEP_LENGTH_M), 9.75, 1e-9));
    }

    #[test]
    fn test_distance_strokes() {
        // 720 strokes × 1.38 m = 0.9936 km
        assert!(approx_eq(
            distance_km(720, swimming::STROKE_LENGTH_M),
            0.9936,
            1e-9
        ));
    }

    #[test]
    fn test_distance_zero_actions() {
        assert_eq!(distance_km(0, walking::STEP_LENGTH_M), 0.0);
    }

    #[test]
    fn test_mean_speed() {
        assert!(approx_eq(mean_speed_kmh(9.75, 1.5).unwrap(), 6.5, 1e-9));
    }

    #[test]
    fn test_mean_speed_zero_duration() {
        assert_eq!(
            mean_speed_kmh(9.75, 0.0),
            Err(FormulaError::DivideByZero {
                divisor: "duration_hours"
            })
        );
    }

    #[test]
    fn test_floor_div_truncates() {
        assert_eq!(floor_div(10.0, 4.0, "x").unwrap(), 2.0);
        assert_eq!(floor_div(8.0, 4.0, "x").unwrap(), 2.0);
        assert_eq!(floor_div(3.9, 4.0, "x").unwrap(), 0.0);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-10.0, 4.0, "x").unwrap(), -3.0);
        assert_eq!(floor_div(10.0, -4.0, "x").unwrap(), -3.0);
    }

    #[test]
    fn test_floor_div_zero_divisor() {
        assert_eq!(
            floor_div(10.0, 0.0, "height_cm"),
            Err(FormulaError::DivideByZero {
                divisor: "height_cm"
            })
        );
    }

    #[test]
    fn test_minutes() {
        assert_eq!(minutes(1.5), 90.0);
    }
}
