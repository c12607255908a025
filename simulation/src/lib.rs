//! Forager Simulation Engine
//!
//! Evolves rule-based foraging agents on a walled grid with a generational
//! genetic algorithm: simulate every agent to death, rank by harvest, cull
//! the bottom share and breed the rest with crossover and point mutation.

pub mod agent;
pub mod components;
pub mod config;
pub mod environment;
pub mod error;
pub mod genome;
pub mod population;
pub mod stats;
pub mod systems;
pub mod world;

pub use agent::{Agent, LifeState};
pub use components::*;
pub use config::SimConfig;
pub use environment::{Environment, Physics};
pub use error::{ConfigError, Result, SimError};
pub use genome::{decide, Genome, Rule};
pub use population::Population;
pub use stats::GenerationStats;
pub use world::SimulationWorld;
