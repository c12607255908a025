//! Plain data types shared by the environment, genomes and agents.

use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Grid Cells
// ============================================================================

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Resource,
    Occupied,
}

/// What a sensor reports about a neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sensed {
    Empty = 0,
    Wall = 1,
    Resource = 2,
}

impl Sensed {
    pub const ALL: [Sensed; 3] = [Sensed::Empty, Sensed::Wall, Sensed::Resource];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl From<Cell> for Sensed {
    /// The agent's own cell is the only occupied one, so an occupied
    /// neighbour reads as open floor.
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty | Cell::Occupied => Sensed::Empty,
            Cell::Wall => Sensed::Wall,
            Cell::Resource => Sensed::Resource,
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Sensor slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Row/column offset of one step in this direction. North is row - 1.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// A rule's action slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Direction),
    Random,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Move(Direction::North),
        Action::Move(Direction::South),
        Action::Move(Direction::East),
        Action::Move(Direction::West),
        Action::Random,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

// ============================================================================
// Agent State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position. Callers keep agents inside the wall border,
    /// so the step never leaves the grid.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row.wrapping_add_signed(dr),
            col: self.col.wrapping_add_signed(dc),
        }
    }
}

/// Adjacent cell kinds in North, South, East, West order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorReading(pub [Sensed; 4]);

impl SensorReading {
    pub fn get(&self, direction: Direction) -> Sensed {
        self.0[direction as usize]
    }
}

/// Energy and lifetime counters mutated by movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub energy: i32,
    pub turns_survived: u32,
    pub harvested: u32,
}

impl Vitals {
    pub fn new(starting_energy: i32) -> Self {
        Self {
            energy: starting_energy,
            turns_survived: 0,
            harvested: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.energy <= 0
    }
}
