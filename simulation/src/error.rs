use thiserror::Error;

/// Invalid run configuration. Detected at setup, never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population size must be positive")]
    EmptyPopulation,

    #[error("generation count must be positive")]
    NoGenerations,

    #[error("interior size must be positive")]
    EmptyGrid,

    #[error("interior size {0} is too large to lay out a grid")]
    GridTooLarge(usize),

    #[error("resource count {requested} exceeds the {available} interior cells")]
    ResourceOverflow { requested: usize, available: usize },

    #[error("resource count {0} leaves no empty interior cell to spawn on")]
    NoSpawnRoom(usize),

    #[error("genome length must be even and at least 2, got {0}")]
    InvalidGenomeLength(usize),

    #[error("starting energy must be positive, got {0}")]
    NonPositiveEnergy(i32),

    #[error("move cost must be positive, got {0}")]
    NonPositiveMoveCost(i32),

    #[error("resource energy must not be negative, got {0}")]
    NegativeResourceEnergy(i32),

    #[error("mutation probability must lie in [0, 1], got {0}")]
    InvalidMutationProbability(f64),

    #[error("cull percent must be at most 100, got {0}")]
    InvalidCullPercent(u32),
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
