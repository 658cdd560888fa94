//! Error types for the workout tracker.

use thiserror::Error;

/// Errors that can occur when turning a raw activity package into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("unrecognized activity code: {0:?}")]
    UnrecognizedActivity(String),

    #[error("{code} expects {expected} arguments, got {found}")]
    ArityMismatch {
        code: String,
        expected: usize,
        found: usize,
    },

    #[error("action count must be a non-negative whole number: {0}")]
    InvalidActionCount(f64),
}

/// Errors that can occur in formula calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("division by zero: {divisor} is 0")]
    DivideByZero { divisor: &'static str },
}
