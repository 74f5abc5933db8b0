use super::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// The four discrete moves an ant can choose in a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntAction {
    MoveForward,
    TurnLeft,
    TurnRight,
    DropPheromone,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
/// A single forager.
pub struct Ant {
    pub position: Vector2D,
    /// Radians, kept in (-π, π].
    pub heading: f32,
    pub colony_id: usize,
    pub carrying_food: bool,
    /// Tracked for observers; nothing consumes it yet.
    pub energy: f32,
}

impl Ant {
    #[must_use]
    pub fn new(position: Vector2D, heading: f32, colony_id: usize, energy: f32) -> Self {
        Self {
            position,
            heading,
            colony_id,
            carrying_food: false,
            energy,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
/// A nest and the ants that belong to it.
pub struct Colony {
    pub id: usize,
    pub position: Vector2D,
    pub food_collected: u32,
    /// Occupied prefix of `ants`.
    pub ants_alive: usize,
    pub ants: Vec<Ant>,
}

impl Colony {
    #[must_use]
    pub fn new(id: usize, position: Vector2D, capacity: usize) -> Self {
        Self {
            id,
            position,
            food_collected: 0,
            ants_alive: 0,
            ants: Vec::with_capacity(capacity),
        }
    }

    /// The living ants, in slot order.
    #[must_use]
    pub fn living(&self) -> &[Ant] {
        &self.ants[..self.ants_alive.min(self.ants.len())]
    }

    #[must_use]
    pub fn carrying_count(&self) -> usize {
        self.living().iter().filter(|a| a.carrying_food).count()
    }
}
