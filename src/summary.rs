//! Per-workout summary and its one-line rendering.

use std::fmt;

/// Language of the labels in a rendered summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

/// Field labels and units for one language.
struct Labels {
    activity: &'static str,
    duration: &'static str,
    hours: &'static str,
    distance: &'static str,
    km: &'static str,
    speed: &'static str,
    kmh: &'static str,
    calories: &'static str,
}

impl Language {
    fn labels(self) -> &'static Labels {
        match self {
            Language::English => &Labels {
                activity: "Activity type",
                duration: "Duration",
                hours: "h.",
                distance: "Distance",
                km: "km",
                speed: "Avg. speed",
                kmh: "km/h",
                calories: "Calories burned",
            },
            Language::Russian => &Labels {
                activity: "Тип тренировки",
                duration: "Длительность",
                hours: "ч.",
                distance: "Дистанция",
                km: "км",
                speed: "Ср. скорость",
                kmh: "км/ч",
                calories: "Потрачено ккал",
            },
        }
    }
}

/// Statistics of one completed workout, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub activity: &'static str,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl WorkoutSummary {
    pub fn new(
        activity: &'static str,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories: f64,
    ) -> Self {
        Self {
            activity,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }

    /// Renders the summary with English labels.
    pub fn render(&self) -> String {
        self.render_in(Language::English)
    }

    /// Renders the summary as a single line, every number to three decimals.
    pub fn render_in(&self, language: Language) -> String {
        let l = language.labels();
        format!(
            "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
            l.activity,
            self.activity,
            l.duration,
            self.duration_hours,
            l.hours,
            l.distance,
            self.distance_km,
            l.km,
            l.speed,
            self.mean_speed_kmh,
            l.kmh,
            l.calories,
            self.calories,
        )
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
