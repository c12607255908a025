//! Run configuration
//!
//! Every tunable of the simulation lives here. Defaults reproduce the
//! reference run: 200 agents, 100 generations, a 10x10 interior with 40
//! resources and 16-rule genomes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_POPULATION_SIZE: usize = 200;
pub const DEFAULT_GENERATIONS: u32 = 100;
pub const DEFAULT_INTERIOR_SIZE: usize = 10;
/// 40% of the default interior.
pub const DEFAULT_RESOURCE_COUNT: usize = 40;
pub const DEFAULT_GENOME_LENGTH: usize = 16;
pub const DEFAULT_STARTING_ENERGY: i32 = 5;
pub const DEFAULT_MOVE_COST: i32 = 1;
pub const DEFAULT_RESOURCE_ENERGY: i32 = 5;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.05;
pub const DEFAULT_CULL_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub population_size: usize,
    pub generations: u32,
    pub interior_size: usize,
    pub resource_count: usize,
    pub genome_length: usize,
    pub starting_energy: i32,
    pub move_cost: i32,
    /// Energy gained from a resource, and the value added to `harvested`.
    /// The move cost is still paid on the same turn.
    pub resource_energy: i32,
    pub mutation_probability: f64,
    /// Share of the ranked population removed before breeding.
    pub cull_percent: u32,
    /// Master RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            generations: DEFAULT_GENERATIONS,
            interior_size: DEFAULT_INTERIOR_SIZE,
            resource_count: DEFAULT_RESOURCE_COUNT,
            genome_length: DEFAULT_GENOME_LENGTH,
            starting_energy: DEFAULT_STARTING_ENERGY,
            move_cost: DEFAULT_MOVE_COST,
            resource_energy: DEFAULT_RESOURCE_ENERGY,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            cull_percent: DEFAULT_CULL_PERCENT,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Interior cell count, or `GridTooLarge` when the bordered grid would
    /// not fit in `usize`.
    pub fn interior_cells(&self) -> std::result::Result<usize, ConfigError> {
        grid_cells(self.interior_size).map(|(interior, _)| interior)
    }

    /// Number of agents kept from a ranked population of `len`.
    pub fn retained_count(&self, len: usize) -> usize {
        len * (100 - self.cull_percent.min(100) as usize) / 100
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.interior_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let available = self.interior_cells()?;
        if self.resource_count > available {
            return Err(ConfigError::ResourceOverflow {
                requested: self.resource_count,
                available,
            });
        }
        if self.resource_count == available {
            return Err(ConfigError::NoSpawnRoom(self.resource_count));
        }
        if self.genome_length < 2 || self.genome_length % 2 != 0 {
            return Err(ConfigError::InvalidGenomeLength(self.genome_length));
        }
        if self.starting_energy <= 0 {
            return Err(ConfigError::NonPositiveEnergy(self.starting_energy));
        }
        if self.move_cost <= 0 {
            return Err(ConfigError::NonPositiveMoveCost(self.move_cost));
        }
        if self.resource_energy < 0 {
            return Err(ConfigError::NegativeResourceEnergy(self.resource_energy));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(self.mutation_probability));
        }
        if self.cull_percent > 100 {
            return Err(ConfigError::InvalidCullPercent(self.cull_percent));
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Interior and bordered cell counts for a square interior of side `size`.
pub(crate) fn grid_cells(size: usize) -> std::result::Result<(usize, usize), ConfigError> {
    let interior = size.checked_mul(size);
    let bordered = size.checked_add(2).and_then(|side| side.checked_mul(side));
    match (interior, bordered) {
        (Some(interior), Some(bordered)) => Ok((interior, bordered)),
        _ => Err(ConfigError::GridTooLarge(size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interior_cells(), Ok(100));
    }

    #[test]
    fn test_retained_count_floors() {
        let config = SimConfig::default();
        assert_eq!(config.retained_count(10), 5);
        assert_eq!(config.retained_count(9), 4);
        assert_eq!(config.retained_count(1), 0);
        assert_eq!(config.retained_count(0), 0);
    }

    #[test]
    fn test_rejects_resource_overflow() {
        let config = SimConfig {
            resource_count: 101,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ResourceOverflow { requested: 101, available: 100 })
        );

        let full = SimConfig {
            resource_count: 100,
            ..Default::default()
        };
        assert_eq!(full.validate(), Err(ConfigError::NoSpawnRoom(100)));
    }

    #[test]
    fn test_rejects_empty_population() {
        let config = SimConfig {
            population_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_rejects_bad_genome_and_rates() {
        let odd = SimConfig { genome_length: 15, ..Default::default() };
        assert_eq!(odd.validate(), Err(ConfigError::InvalidGenomeLength(15)));

        let free_moves = SimConfig { move_cost: 0, ..Default::default() };
        assert_eq!(free_moves.validate(), Err(ConfigError::NonPositiveMoveCost(0)));

        let mutation = SimConfig { mutation_probability: 1.5, ..Default::default() };
        assert!(matches!(
            mutation.validate(),
            Err(ConfigError::InvalidMutationProbability(_))
        ));
    }

    #[test]
    fn test_rejects_negative_resource_energy() {
        let config = SimConfig { resource_energy: -3, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::NegativeResourceEnergy(-3)));

        let err = SimConfig::from_json_str(r#"{ "resource_energy": -1 }"#).unwrap_err();
        assert!(matches!(err, SimError::Config(ConfigError::NegativeResourceEnergy(-1))));

        let barren = SimConfig { resource_energy: 0, ..Default::default() };
        assert!(barren.validate().is_ok());
    }

    #[test]
    fn test_rejects_overflowing_grid() {
        let config = SimConfig { interior_size: usize::MAX, ..Default::default() };
        assert_eq!(config.interior_cells(), Err(ConfigError::GridTooLarge(usize::MAX)));
        assert_eq!(config.validate(), Err(ConfigError::GridTooLarge(usize::MAX)));

        let json = format!(r#"{{ "interior_size": {} }}"#, u64::MAX);
        let err = SimConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(err, SimError::Config(ConfigError::GridTooLarge(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{ "population_size": 10, "seed": 7 }"#).unwrap();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.resource_count, DEFAULT_RESOURCE_COUNT);
    }

    #[test]
    fn test_invalid_json_config_is_rejected() {
        let err = SimConfig::from_json_str(r#"{ "resource_count": 500 }"#).unwrap_err();
        assert!(matches!(err, SimError::Config(ConfigError::ResourceOverflow { .. })));
    }
}
