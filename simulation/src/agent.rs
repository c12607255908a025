//! Agent - a genome living out one lifetime in its own environment
//!
//! Each turn senses the four neighbours, asks the genome for an action and
//! lets the environment apply it. The agent dies once its energy is spent
//! and takes no further turns.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Position, SensorReading, Vitals};
use crate::config::SimConfig;
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::genome::Genome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

#[derive(Debug, Clone)]
pub struct Agent {
    genome: Genome,
    environment: Environment,
    position: Position,
    vitals: Vitals,
    sensor: SensorReading,
    rng: StdRng,
}

impl Agent {
    /// Generation-zero agent with a fully random genome.
    pub fn random(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (environment, position) = Self::fresh_environment(config, &mut rng)?;
        let genome = Genome::random(config.genome_length, &mut rng);
        Ok(Self::assemble(genome, environment, position, config.starting_energy, rng))
    }

    /// Agent carrying an inherited genome into a fresh environment.
    pub fn spawn(genome: Genome, config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (environment, position) = Self::fresh_environment(config, &mut rng)?;
        Ok(Self::assemble(genome, environment, position, config.starting_energy, rng))
    }

    /// Agent dropped into a prepared environment at `position`.
    pub fn with_environment(
        genome: Genome,
        mut environment: Environment,
        position: Position,
        starting_energy: i32,
        seed: u64,
    ) -> Self {
        environment.place(position);
        Self::assemble(genome, environment, position, starting_energy, StdRng::seed_from_u64(seed))
    }

    fn fresh_environment(
        config: &SimConfig,
        rng: &mut StdRng,
    ) -> Result<(Environment, Position), ConfigError> {
        let mut environment = Environment::from_config(config, rng)?;
        if config.resource_count >= config.interior_cells()? {
            return Err(ConfigError::NoSpawnRoom(config.resource_count));
        }
        let position = environment.random_spawn(rng);
        environment.place(position);
        Ok((environment, position))
    }

    fn assemble(
        genome: Genome,
        environment: Environment,
        position: Position,
        starting_energy: i32,
        rng: StdRng,
    ) -> Self {
        let sensor = environment.sense(position);
        Self {
            genome,
            environment,
            position,
            vitals: Vitals::new(starting_energy),
            sensor,
            rng,
        }
    }

    pub fn state(&self) -> LifeState {
        if self.vitals.is_exhausted() {
            LifeState::Dead
        } else {
            LifeState::Alive
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state() == LifeState::Alive
    }

    /// Run one sense-decide-move cycle. Returns false without touching any
    /// state when the agent is already dead.
    pub fn take_turn(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.sensor = self.environment.sense(self.position);
        let action = self.genome.decide(&self.sensor);
        self.position = self
            .environment
            .apply_move(self.position, action, &mut self.vitals, &mut self.rng);
        true
    }

    /// Take turns until death and return the harvested total.
    pub fn live_out(&mut self) -> u32 {
        while self.take_turn() {}
        self.vitals.harvested
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    /// Most recent sensor reading.
    pub fn sensor(&self) -> SensorReading {
        self.sensor
    }

    pub fn energy(&self) -> i32 {
        self.vitals.energy
    }

    pub fn harvested(&self) -> u32 {
        self.vitals.harvested
    }

    pub fn turns_survived(&self) -> u32 {
        self.vitals.turns_survived
    }

    /// Fitness is the raw resource value collected over the lifetime.
    pub fn fitness(&self) -> u32 {
        self.vitals.harvested
    }
}
