//! Environment - one agent's walled grid and its movement physics
//!
//! The grid is a square interior surrounded by a one-cell Wall border.
//! Resources are stamped once at construction and never replenished.

use rand::seq::index;
use rand::Rng;

use crate::components::{Action, Cell, Direction, Position, Sensed, SensorReading, Vitals};
use crate::config::{grid_cells, SimConfig, DEFAULT_MOVE_COST, DEFAULT_RESOURCE_ENERGY};
use crate::error::ConfigError;

/// Energy bookkeeping applied by `Environment::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Physics {
    pub move_cost: i32,
    pub resource_energy: u32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            move_cost: DEFAULT_MOVE_COST,
            resource_energy: DEFAULT_RESOURCE_ENERGY.unsigned_abs(),
        }
    }
}

impl TryFrom<&SimConfig> for Physics {
    type Error = ConfigError;

    fn try_from(config: &SimConfig) -> Result<Self, ConfigError> {
        let resource_energy = u32::try_from(config.resource_energy)
            .map_err(|_| ConfigError::NegativeResourceEnergy(config.resource_energy))?;
        Ok(Self {
            move_cost: config.move_cost,
            resource_energy,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Environment {
    cells: Vec<Cell>,
    side: usize,
    physics: Physics,
}

impl Environment {
    /// Build a bordered grid with `resource_count` resources placed uniformly
    /// at random over distinct interior cells.
    pub fn new<R: Rng + ?Sized>(
        interior_size: usize,
        resource_count: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let (available, total) = grid_cells(interior_size)?;
        if resource_count > available {
            return Err(ConfigError::ResourceOverflow {
                requested: resource_count,
                available,
            });
        }

        let side = interior_size + 2;
        let mut cells = vec![Cell::Empty; total];
        for row in 0..side {
            for col in 0..side {
                if row == 0 || col == 0 || row == side - 1 || col == side - 1 {
                    cells[row * side + col] = Cell::Wall;
                }
            }
        }

        let mut env = Self {
            cells,
            side,
            physics: Physics::default(),
        };
        for slot in index::sample(rng, available, resource_count).into_iter() {
            let pos = Position::new(1 + slot / interior_size, 1 + slot % interior_size);
            env.set_cell(pos, Cell::Resource);
        }
        Ok(env)
    }

    pub fn from_config<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let physics = Physics::try_from(config)?;
        Ok(Self::new(config.interior_size, config.resource_count, rng)?.with_physics(physics))
    }

    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    pub fn physics(&self) -> Physics {
        self.physics
    }

    /// Side length including the border.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn interior_size(&self) -> usize {
        self.side - 2
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.side + pos.col]
    }

    pub(crate) fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row * self.side + pos.col] = cell;
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        (1..self.side - 1).contains(&pos.row) && (1..self.side - 1).contains(&pos.col)
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    pub fn place(&mut self, pos: Position) {
        self.set_cell(pos, Cell::Occupied);
    }

    /// Resources still on the grid.
    pub fn resources_remaining(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Resource).count()
    }

    /// Uniform rejection sampling over interior coordinates until an empty
    /// cell turns up. The caller guarantees at least one exists.
    pub fn random_spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let interior = self.interior_size();
        loop {
            let pos = Position::new(1 + rng.gen_range(0..interior), 1 + rng.gen_range(0..interior));
            if self.is_empty(pos) {
                return pos;
            }
        }
    }

    /// Adjacent cell kinds around an interior position.
    pub fn sense(&self, pos: Position) -> SensorReading {
        SensorReading(Direction::ALL.map(|dir| Sensed::from(self.cell(pos.step(dir)))))
    }

    /// Execute one move from `pos` and return the new position.
    ///
    /// Every outcome costs `move_cost` and counts as a survived turn. Walls
    /// leave the agent in place; a resource adds `resource_energy` to both
    /// energy and harvest before the move cost is taken.
    pub fn apply_move<R: Rng + ?Sized>(
        &mut self,
        pos: Position,
        action: Action,
        vitals: &mut Vitals,
        rng: &mut R,
    ) -> Position {
        let direction = match action {
            Action::Move(direction) => direction,
            Action::Random => Direction::random(rng),
        };
        let target = pos.step(direction);

        vitals.turns_survived += 1;
        match self.cell(target) {
            Cell::Wall => {
                vitals.energy -= self.physics.move_cost;
                return pos;
            }
            Cell::Resource => {
                vitals.energy = vitals.energy.saturating_add_unsigned(self.physics.resource_energy);
                vitals.energy -= self.physics.move_cost;
                vitals.harvested = vitals.harvested.saturating_add(self.physics.resource_energy);
            }
            Cell::Empty | Cell::Occupied => {
                vitals.energy -= self.physics.move_cost;
            }
        }

        self.set_cell(pos, Cell::Empty);
        self.place(target);
        target
    }
}
