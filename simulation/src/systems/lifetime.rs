//! Lifetime System
//!
//! Runs every agent's turn loop to death. Agents share nothing, so each
//! lifetime runs on its own rayon task; the call returns only once every
//! agent in the population is dead.

use rayon::prelude::*;

use crate::population::Population;

/// Aggregates of one completed lifetime phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifetimeResult {
    pub total_harvested: u64,
    pub total_turns: u64,
}

pub fn lifetime_system(population: &mut Population) -> LifetimeResult {
    let (total_harvested, total_turns) = population
        .agents_mut()
        .par_iter_mut()
        .map(|agent| {
            let harvested = agent.live_out();
            (harvested as u64, agent.turns_survived() as u64)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    LifetimeResult {
        total_harvested,
        total_turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(seed: u64) -> Population {
        let config = SimConfig {
            population_size: 16,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        Population::random(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_everyone_dies() {
        let mut pop = population(8);
        let result = lifetime_system(&mut pop);

        assert!(pop.all_dead());
        assert!(pop.agents().iter().all(|a| a.energy() == 0));
        assert_eq!(result.total_harvested, pop.total_harvested());
        assert!(result.total_turns >= 16 * 5);
    }

    #[test]
    fn test_parallel_run_is_deterministic() {
        let mut a = population(9);
        let mut b = population(9);
        lifetime_system(&mut a);
        lifetime_system(&mut b);
        assert_eq!(a.fitness_scores(), b.fitness_scores());
    }

    #[test]
    fn test_rerun_leaves_dead_agents_untouched() {
        let mut pop = population(10);
        let first = lifetime_system(&mut pop);
        let second = lifetime_system(&mut pop);
        assert_eq!(first.total_harvested, second.total_harvested);
        assert_eq!(first.total_turns, second.total_turns);
    }
}
