//! Genome - an ordered decision list of sensor-matching rules
//!
//! Rules are tried in index order and the first whose conditions equal the
//! current sensor reading wins. The last rule is the fallback: its action is
//! taken whenever no earlier rule matches, whatever its own conditions say.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Action, Direction, Sensed, SensorReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub conditions: [Sensed; 4],
    pub action: Action,
}

impl Rule {
    pub fn new(conditions: [Sensed; 4], action: Action) -> Self {
        Self { conditions, action }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            conditions: Direction::ALL.map(|_| Sensed::random(&mut *rng)),
            action: Action::random(rng),
        }
    }

    pub fn matches(&self, reading: &SensorReading) -> bool {
        self.conditions == reading.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Genome {
    rules: Vec<Rule>,
}

impl Genome {
    /// Genomes need at least the fallback rule.
    pub fn new(rules: Vec<Rule>) -> Option<Self> {
        if rules.is_empty() {
            None
        } else {
            Some(Self { rules })
        }
    }

    /// Concatenate two rule slices into a new genome.
    pub fn splice(front: &[Rule], back: &[Rule]) -> Option<Self> {
        Self::new(front.iter().chain(back).copied().collect())
    }

    /// `length` random rules. A length of 0 is raised to 1 so the genome
    /// always carries its fallback rule; use `Genome::new` to reject empty
    /// rule lists instead.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self {
            rules: (0..length.max(1)).map(|_| Rule::random(&mut *rng)).collect(),
        }
    }

    /// Every rule carries the same action and all-empty conditions. Like
    /// `Genome::random`, a length of 0 is raised to 1.
    pub fn uniform(length: usize, action: Action) -> Self {
        Self {
            rules: vec![Rule::new([Sensed::Empty; 4], action); length.max(1)],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub(crate) fn rules_mut(&mut self) -> &mut [Rule] {
        &mut self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn fallback(&self) -> &Rule {
        // Constructors never produce an empty rule list.
        &self.rules[self.rules.len() - 1]
    }

    /// Leading half of the rule list.
    pub fn front_half(&self) -> &[Rule] {
        &self.rules[..self.rules.len() / 2]
    }

    /// Trailing half of the rule list.
    pub fn back_half(&self) -> &[Rule] {
        &self.rules[self.rules.len() - self.rules.len() / 2..]
    }

    pub fn decide(&self, reading: &SensorReading) -> Action {
        let ordered = &self.rules[..self.rules.len() - 1];
        ordered
            .iter()
            .find(|rule| rule.matches(reading))
            .unwrap_or_else(|| self.fallback())
            .action
    }
}

/// Free-function form of `Genome::decide`.
pub fn decide(genome: &Genome, reading: &SensorReading) -> Action {
    genome.decide(reading)
}
