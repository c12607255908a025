//! Selection System
//!
//! Ranks a finished generation by fitness and keeps the top share as
//! breeding stock.

use std::cmp::Reverse;

use crate::config::SimConfig;
use crate::population::Population;

/// Sort by fitness, best first. The sort is stable: agents with equal
/// fitness keep their previous relative order.
pub fn rank(population: Population) -> Population {
    let mut agents = population.into_agents();
    agents.sort_by_key(|agent| Reverse(agent.fitness()));
    Population::from_agents(agents)
}

/// Keep the first `retain` agents.
pub fn cull(population: Population, retain: usize) -> Population {
    let mut agents = population.into_agents();
    agents.truncate(retain);
    Population::from_agents(agents)
}

/// Rank, then drop the culled share. With the default 50% cull a
/// population of 9 keeps 4.
pub fn selection_system(population: Population, config: &SimConfig) -> Population {
    let retain = config.retained_count(population.len());
    cull(rank(population), retain)
}
