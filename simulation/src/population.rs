//! Population - the ordered set of agents making up one generation

use rand::Rng;

use crate::agent::Agent;
use crate::config::SimConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Generation zero: `population_size` agents with random genomes, each
    /// seeded with its own stream drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let agents = (0..config.population_size)
            .map(|_| Agent::random(config, rng.gen()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { agents })
    }

    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn into_agents(self) -> Vec<Agent> {
        self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn all_dead(&self) -> bool {
        self.agents.iter().all(|a| !a.is_alive())
    }

    pub fn total_harvested(&self) -> u64 {
        self.agents.iter().map(|a| a.fitness() as u64).sum()
    }

    /// Floor-divided mean fitness; 0 for an empty population.
    pub fn average_fitness(&self) -> u64 {
        self.total_harvested()
            .checked_div(self.agents.len() as u64)
            .unwrap_or(0)
    }

    pub fn best_fitness(&self) -> Option<u32> {
        self.agents.iter().map(Agent::fitness).max()
    }

    pub fn worst_fitness(&self) -> Option<u32> {
        self.agents.iter().map(Agent::fitness).min()
    }

    pub fn fitness_scores(&self) -> Vec<u32> {
        self.agents.iter().map(Agent::fitness).collect()
    }
}
