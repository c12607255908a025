//! Breeding System
//!
//! Pairs ranked survivors two by two. Each pair yields one child from both
//! parents' front halves and one from their back halves; each child may then
//! take a single point mutation on a sensor condition.

use rand::Rng;
use tracing::debug;

use crate::agent::Agent;
use crate::components::Sensed;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::genome::Genome;
use crate::population::Population;

/// One overwritten sensor-condition slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub rule: usize,
    pub slot: usize,
    pub value: Sensed,
}

/// Outcome of a breeding pass
pub struct BreedingResult {
    /// Survivors followed by their children.
    pub population: Population,
    pub children: usize,
    pub mutations: usize,
}

/// Front-half child and back-half child of two parents.
///
/// Falls back to copies of the parents when a genome is too short to halve.
pub fn crossover(first: &Genome, second: &Genome) -> (Genome, Genome) {
    let front = Genome::splice(first.front_half(), second.front_half());
    let back = Genome::splice(first.back_half(), second.back_half());
    (
        front.unwrap_or_else(|| first.clone()),
        back.unwrap_or_else(|| second.clone()),
    )
}

/// With `probability`, overwrite one random sensor condition of one random
/// rule with a random value. Actions are never touched.
pub fn mutate<R: Rng + ?Sized>(genome: &mut Genome, probability: f64, rng: &mut R) -> Option<Mutation> {
    if genome.is_empty() || !rng.gen_bool(probability) {
        return None;
    }
    let rules = genome.rules_mut();
    let rule = rng.gen_range(0..rules.len());
    let slot = rng.gen_range(0..rules[rule].conditions.len());
    let value = Sensed::random(rng);
    rules[rule].conditions[slot] = value;
    Some(Mutation { rule, slot, value })
}

/// Breed consecutive pairs of `survivors` and append the children.
///
/// A trailing unpaired survivor has no offspring. Children get fresh
/// environments seeded from `rng`.
pub fn breeding_system<R: Rng + ?Sized>(
    survivors: Population,
    config: &SimConfig,
    rng: &mut R,
) -> Result<BreedingResult, ConfigError> {
    let mut children = Vec::with_capacity(survivors.len());
    let mut mutations = 0;

    for pair in survivors.agents().chunks_exact(2) {
        let (a, b) = crossover(pair[0].genome(), pair[1].genome());
        for mut genome in [a, b] {
            if mutate(&mut genome, config.mutation_probability, rng).is_some() {
                mutations += 1;
            }
            children.push(Agent::spawn(genome, config, rng.gen())?);
        }
    }

    let count = children.len();
    debug!("Bred {} children from {} survivors ({} mutated)", count, survivors.len(), mutations);

    let mut agents = survivors.into_agents();
    agents.extend(children);
    Ok(BreedingResult {
        population: Population::from_agents(agents),
        children: count,
        mutations,
    })
}
