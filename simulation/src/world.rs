//! Simulation World - main orchestrator

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::error::Result;
use crate::population::Population;
use crate::stats::GenerationStats;
use crate::systems;

pub struct SimulationWorld {
    pub config: SimConfig,
    pub population: Population,
    pub generation: u32,
    pub history: Vec<GenerationStats>,
    rng: StdRng,
}

impl SimulationWorld {
    /// Validate `config` and seed generation zero.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let population = Population::random(&config, &mut rng)?;

        info!(
            "Seeded {} agents (seed {}, {}x{} interior, {} resources)",
            population.len(),
            seed,
            config.interior_size,
            config.interior_size,
            config.resource_count
        );

        Ok(Self {
            config,
            population,
            generation: 0,
            history: Vec::new(),
            rng,
        })
    }

    /// Run one generation: live out every agent, record statistics, then
    /// rank, cull and breed the next population.
    pub fn step(&mut self) -> Result<GenerationStats> {
        let mut population = std::mem::take(&mut self.population);

        let lifetime = systems::lifetime_system(&mut population);
        let stats = GenerationStats::collect(self.generation, &population, &lifetime);
        debug!(
            "Generation {}: best {}, worst {}, avg turns {}",
            stats.generation, stats.best_fitness, stats.worst_fitness, stats.average_turns_survived
        );

        let survivors = systems::selection_system(population, &self.config);
        let bred = systems::breeding_system(survivors, &self.config, &mut self.rng)?;
        if bred.population.is_empty() {
            warn!("Generation {} left no breeding stock; population is empty", self.generation);
        }

        self.population = bred.population;
        self.generation += 1;
        self.history.push(stats.clone());
        Ok(stats)
    }

    /// Run the configured number of generations, handing each summary to
    /// `on_generation` as soon as it is available.
    pub fn run_with<F>(&mut self, mut on_generation: F) -> Result<()>
    where
        F: FnMut(&GenerationStats),
    {
        for _ in 0..self.config.generations {
            let stats = self.step()?;
            on_generation(&stats);
        }
        info!(
            "Run complete: {} generations, final population {}",
            self.generation,
            self.population.len()
        );
        Ok(())
    }

    pub fn run(&mut self) -> Result<&[GenerationStats]> {
        self.run_with(|_| {})?;
        Ok(&self.history)
    }

    /// Statistics of every completed generation as JSON.
    pub fn export_history(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.history)?)
    }

    /// Get agent count of the population awaiting simulation
    pub fn entity_count(&self) -> usize {
        self.population.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, SimError};

    fn small_config(seed: u64) -> SimConfig {
        SimConfig {
            population_size: 20,
            generations: 5,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_step_restores_even_population() {
        let mut world = SimulationWorld::new(small_config(1)).unwrap();
        let stats = world.step().unwrap();

        assert_eq!(stats.generation, 0);
        assert_eq!(stats.population, 20);
        assert_eq!(stats.average_fitness, stats.total_harvested / 20);
        assert_eq!(world.generation, 1);
        assert_eq!(world.entity_count(), 20);
    }

    #[test]
    fn test_survivors_carry_over_ahead_of_children() {
        let mut world = SimulationWorld::new(small_config(2)).unwrap();
        world.step().unwrap();

        let agents = world.population.agents();
        assert!(agents[..10].iter().all(|a| !a.is_alive()));
        assert!(agents[10..].iter().all(|a| a.is_alive() && a.harvested() == 0));
    }

    #[test]
    fn test_run_records_history() {
        let mut world = SimulationWorld::new(small_config(3)).unwrap();
        let history = world.run().unwrap();
        assert_eq!(history.len(), 5);
        assert!(history.iter().enumerate().all(|(i, s)| s.generation == i as u32));

        let json = world.export_history().unwrap();
        let parsed: Vec<GenerationStats> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, world.history);
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = SimConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            SimulationWorld::new(config),
            Err(SimError::Config(ConfigError::EmptyPopulation))
        ));
    }
}
