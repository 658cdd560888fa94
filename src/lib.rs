//! Workout statistics for running, walking with poles and swimming.
//!
//! Each activity package is a three-letter code plus positional numbers.
//! [`dispatch()`] turns it into a [`Training`], whose [`Workout`] methods
//! derive distance, mean speed and calories; [`Workout::summarize`]
//! collects them into a [`WorkoutSummary`] that renders as one line.

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod formulas;
pub mod runner;
pub mod summary;

pub use dispatch::dispatch;
pub use domain::{ActivityCode, Running, Swimming, Training, WalkingWithPoles, Workout};
pub use error::{DispatchError, FormulaError};
pub use summary::{Language, WorkoutSummary};
