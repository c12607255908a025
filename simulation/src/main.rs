//! Forager Simulation
//!
//! Runs the configured number of generations and prints one average-fitness
//! line per generation. Set `FORAGER_CONFIG` to a JSON file to override the
//! defaults.

use anyhow::Context;
use simulation::{SimConfig, SimulationWorld};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG_ENV: &str = "FORAGER_CONFIG";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => SimConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.to_string_lossy()))?,
        None => SimConfig::default(),
    };

    info!(
        "Forager simulation starting: {} agents x {} generations",
        config.population_size, config.generations
    );

    let mut world = SimulationWorld::new(config).context("setting up generation zero")?;

    let start = std::time::Instant::now();
    world.run_with(|stats| println!("{}", stats.report_line()))?;
    info!("Finished in {:?}", start.elapsed());

    Ok(())
}
