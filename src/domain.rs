//! Workout variants and the statistics each one derives.

use std::str::FromStr;

use crate::error::{DispatchError, FormulaError};
use crate::formulas::{
    self, distance_km, floor_div, mean_speed_kmh, minutes, running, swimming, walking,
};
use crate::summary::WorkoutSummary;

/// Three-letter codes selecting a workout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    Run,
    Walk,
    Swim,
}

impl ActivityCode {
    /// Returns all activity codes.
    pub fn all() -> &'static [ActivityCode] {
        &[ActivityCode::Run, ActivityCode::Walk, ActivityCode::Swim]
    }

    /// Returns the wire code, e.g. `"RUN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Run => "RUN",
            ActivityCode::Walk => "WLK",
            ActivityCode::Swim => "SWM",
        }
    }

    /// Number of positional arguments the variant's constructor takes.
    pub fn arity(&self) -> usize {
        match self {
            ActivityCode::Run => 3,
            ActivityCode::Walk => 4,
            ActivityCode::Swim => 5,
        }
    }
}

impl FromStr for ActivityCode {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(ActivityCode::Run),
            "WLK" => Ok(ActivityCode::Walk),
            "SWM" => Ok(ActivityCode::Swim),
            _ => Err(DispatchError::UnrecognizedActivity(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics every workout variant provides.
///
/// Values are computed on demand and never cached.
pub trait Workout {
    /// Display name of the variant, e.g. `"Running"`.
    fn label(&self) -> &'static str;

    /// Workout length in hours.
    fn duration_hours(&self) -> f64;

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64;

    /// Average speed in km/h.
    fn mean_speed_kmh(&self) -> Result<f64, FormulaError>;

    /// Estimated energy expenditure in kcal.
    fn calories_burned(&self) -> Result<f64, FormulaError>;

    /// Collects all statistics into a summary.
    fn summarize(&self) -> Result<WorkoutSummary, FormulaError> {
        Ok(WorkoutSummary::new(
            self.label(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh()?,
            self.calories_burned()?,
        ))
    }
}

/// A run, measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        distance_km(self.action_count, running::STEP_LENGTH_M)
    }

    fn mean_speed_kmh(&self) -> Result<f64, FormulaError> {
        mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    /// `(18 × speed − 20) × weight / 1000 × minutes`
    ///
    /// Negative for slow runs; not clamped.
    fn calories_burned(&self) -> Result<f64, FormulaError> {
        let speed = self.mean_speed_kmh()?;
        Ok(
            (running::COEFF_1 * speed - running::COEFF_2) * self.weight_kg / formulas::M_IN_KM
                * minutes(self.duration_hours),
        )
    }
}

/// A walk with poles, measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingWithPoles {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl WalkingWithPoles {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for WalkingWithPoles {
    fn label(&self) -> &'static str {
        "WalkingWithPoles"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        distance_km(self.action_count, walking::STEP_LENGTH_M)
    }

    fn mean_speed_kmh(&self) -> Result<f64, FormulaError> {
        mean_speed_kmh(self.distance_km(), self.duration_hours)
    }

    /// `(0.035 × weight + ⌊speed² / height⌋ × 0.029 × weight) × minutes`
    fn calories_burned(&self) -> Result<f64, FormulaError> {
        let speed = self.mean_speed_kmh()?;
        let ratio = floor_div(speed.powi(2), self.height_cm, "height_cm")?;
        Ok(
            (walking::COEFF_1 * self.weight_kg + ratio * walking::COEFF_2 * self.weight_kg)
                * minutes(self.duration_hours),
        )
    }
}

/// A pool swim, measured in strokes.
///
/// Distance comes from the stroke count while speed comes from pool
/// geometry; the two are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Workout for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance_km(&self) -> f64 {
        distance_km(self.action_count, swimming::STROKE_LENGTH_M)
    }

    fn mean_speed_kmh(&self) -> Result<f64, FormulaError> {
        let pool_km = self.pool_length_m * self.pool_laps / formulas::M_IN_KM;
        mean_speed_kmh(pool_km, self.duration_hours)
    }

    /// `(speed + 1.1) × 2 × weight`, with no duration term.
    fn calories_burned(&self) -> Result<f64, FormulaError> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + swimming::COEFF_1) * swimming::COEFF_2 * self.weight_kg)
    }
}

/// Any of the supported workouts.
#[derive(Debug, Clone, PartialEq)]
pub enum Training {
    Running(Running),
    WalkingWithPoles(WalkingWithPoles),
    Swimming(Swimming),
}

impl Training {
    /// Returns the activity code this workout was built from.
    pub fn code(&self) -> ActivityCode {
        match self {
            Training::Running(_) => ActivityCode::Run,
            Training::WalkingWithPoles(_) => ActivityCode::Walk,
            Training::Swimming(_) => ActivityCode::Swim,
        }
    }

    fn inner(&self) -> &dyn Workout {
        match self {
            Training::Running(w) => w,
            Training::WalkingWithPoles(w) => w,
            Training::Swimming(w) => w,
        }
    }
}

impl Workout for Training {
    fn label(&self) -> &'static str {
        self.inner().label()
    }

    fn duration_hours(&self) -> f64 {
        self.inner().duration_hours()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> Result<f64, FormulaError> {
        self.inner().mean_speed_kmh()
    }

    fn calories_burned(&self) -> Result<f64, FormulaError> {
        self.inner().calories_burned()
    }
}
