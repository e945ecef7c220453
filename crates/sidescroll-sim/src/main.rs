//! Side-scroll camera simulator
//!
//! Runs a scripted scenario through the camera plugin headlessly and logs
//! what the camera does. Pass a scenario JSON path, or nothing for the
//! built-in demo run.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::scenario::{Scenario, Simulation};

mod scenario;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("[sim] Loading scenario from {}", path);
            Scenario::from_path(&path)?
        }
        None => {
            tracing::info!("[sim] No scenario given, running built-in demo");
            Scenario::default()
        }
    };

    let report = Simulation::new(&scenario).run(&scenario);

    tracing::info!(
        "[sim] Done after {} steps: camera=({:.2}, {:.2}) subject=({:.2}, {:.2}) health={} fall_damage={} over {} ticks",
        report.steps,
        report.camera.x,
        report.camera.y,
        report.subject.x,
        report.subject.y,
        report.health,
        report.damage_total,
        report.damage_ticks
    );

    Ok(())
}
