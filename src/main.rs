use anyhow::Result;
use clap::Parser;

use workout_tracker::runner::{SAMPLE_WORKOUTS, run};

/// Distance, speed and calorie statistics for running, walking and swimming.
#[derive(Parser, Debug)]
#[command(name = "workout-tracker")]
#[command(about = "Summarizes a fixed batch of sample workouts")]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Only --help and --version are accepted
    let _args = Args::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(SAMPLE_WORKOUTS, &mut out)?;

    Ok(())
}
