//! Builds workouts from raw activity packages.

use crate::domain::{ActivityCode, Running, Swimming, Training, WalkingWithPoles};
use crate::error::DispatchError;

/// Builds the workout selected by `code`, binding `args` positionally to
/// its constructor.
///
/// Argument order is action count, duration (h), weight (kg), then
/// height (cm) for `WLK` or pool length (m) and lap count for `SWM`.
pub fn dispatch(code: &str, args: &[f64]) -> Result<Training, DispatchError> {
    let activity: ActivityCode = code.parse()?;

    if args.len() != activity.arity() {
        return Err(DispatchError::ArityMismatch {
            code: activity.to_string(),
            expected: activity.arity(),
            found: args.len(),
        });
    }

    let action_count = action_count(args[0])?;
    let (duration_hours, weight_kg) = (args[1], args[2]);

    let training = match activity {
        ActivityCode::Run => Training::Running(Running::new(action_count, duration_hours, weight_kg)),
        ActivityCode::Walk => Training::WalkingWithPoles(WalkingWithPoles::new(
            action_count,
            duration_hours,
            weight_kg,
            args[3],
        )),
        ActivityCode::Swim => Training::Swimming(Swimming::new(
            action_count,
            duration_hours,
            weight_kg,
            args[3],
            args[4],
        )),
    };

    log::debug!("Dispatched {} -> {:?}", activity, training);
    Ok(training)
}

/// Step and stroke counts are whole, non-negative numbers.
fn action_count(value: f64) -> Result<u32, DispatchError> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(DispatchError::InvalidActionCount(value));
    }
    Ok(value as u32)
}
