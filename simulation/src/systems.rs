//! Generation phases - each runs once per generation, in this order

pub mod lifetime;
pub mod selection;
pub mod breeding;

pub use lifetime::{lifetime_system, LifetimeResult};
pub use selection::{cull, rank, selection_system};
pub use breeding::{breeding_system, crossover, mutate, BreedingResult, Mutation};
