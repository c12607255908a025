//! Per-generation fitness statistics

use serde::{Deserialize, Serialize};

use crate::population::Population;
use crate::systems::LifetimeResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// 0-based generation index
    pub generation: u32,
    pub population: usize,
    pub total_harvested: u64,
    /// `total_harvested / population`, floor-divided
    pub average_fitness: u64,
    pub best_fitness: u32,
    pub worst_fitness: u32,
    pub average_turns_survived: u64,
}

impl GenerationStats {
    /// Summarise a population whose lifetimes have all finished.
    pub fn collect(generation: u32, population: &Population, lifetime: &LifetimeResult) -> Self {
        let size = population.len() as u64;
        Self {
            generation,
            population: population.len(),
            total_harvested: population.total_harvested(),
            average_fitness: population.average_fitness(),
            best_fitness: population.best_fitness().unwrap_or(0),
            worst_fitness: population.worst_fitness().unwrap_or(0),
            average_turns_survived: lifetime.total_turns.checked_div(size).unwrap_or(0),
        }
    }

    pub fn report_line(&self) -> String {
        format!(
            "The Average Fitness Score for Generation #{}: {}",
            self.generation, self.average_fitness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let stats = GenerationStats {
            generation: 3,
            population: 200,
            total_harvested: 1999,
            average_fitness: 9,
            best_fitness: 40,
            worst_fitness: 0,
            average_turns_survived: 12,
        };
        assert_eq!(stats.report_line(), "The Average Fitness Score for Generation #3: 9");
    }

    #[test]
    fn test_empty_population_stats() {
        let stats = GenerationStats::collect(7, &Population::default(), &LifetimeResult::default());
        assert_eq!(stats.population, 0);
        assert_eq!(stats.average_fitness, 0);
        assert_eq!(stats.average_turns_survived, 0);
        assert_eq!(stats.report_line(), "The Average Fitness Score for Generation #7: 0");
    }
}
