//! The fixed batch of sample workouts run at startup.

use std::io::Write;

use anyhow::{Context, Result};

use crate::dispatch::dispatch;
use crate::domain::Workout;

/// Sample packages, processed in this order.
pub const SAMPLE_WORKOUTS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Dispatches and summarizes each package, writing one line per workout.
///
/// Stops at the first failing package.
pub fn run<W: Write>(packages: &[(&str, &[f64])], out: &mut W) -> Result<()> {
    log::info!("Processing {} workouts", packages.len());

    for (index, (code, args)) in packages.iter().enumerate() {
        let training = dispatch(code, args)
            .with_context(|| format!("Failed to read workout #{} ({})", index + 1, code))?;
        let summary = training
            .summarize()
            .with_context(|| format!("Failed to summarize workout #{} ({})", index + 1, code))?;

        log::debug!("{} -> {:?}", training.code(), summary);
        writeln!(out, "{}", summary).context("Failed to write summary")?;
    }

    log::info!("Done");
    Ok(())
}
