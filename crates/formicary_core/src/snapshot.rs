//! Read-only views handed to whatever draws or inspects the world.

use crate::world::World;
use formicary_data::{Pheromone, Vector2D};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColonySnapshot {
    pub id: usize,
    pub position: Vector2D,
    pub food_collected: u32,
    pub ants_alive: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AntSnapshot {
    pub position: Vector2D,
    pub heading: f32,
    pub carrying_food: bool,
    pub colony_id: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodSnapshot {
    pub position: Vector2D,
    pub amount: u32,
}

/// Everything a frame needs, copied out of the world.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub iteration: u64,
    pub elapsed: f32,
    pub width: f32,
    pub height: f32,
    pub colonies: Vec<ColonySnapshot>,
    pub ants: Vec<AntSnapshot>,
    /// Spent sources included; `amount == 0` means nothing to draw.
    pub food: Vec<FoodSnapshot>,
    pub pheromones: Vec<Pheromone>,
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(world: &World) -> Self {
        Self {
            iteration: world.iteration,
            elapsed: world.elapsed,
            width: world.config.world.width,
            height: world.config.world.height,
            colonies: world
                .colonies
                .iter()
                .map(|c| ColonySnapshot {
                    id: c.id,
                    position: c.position,
                    food_collected: c.food_collected,
                    ants_alive: c.ants_alive,
                })
                .collect(),
            ants: world
                .living_ants()
                .map(|a| AntSnapshot {
                    position: a.position,
                    heading: a.heading,
                    carrying_food: a.carrying_food,
                    colony_id: a.colony_id,
                })
                .collect(),
            food: world
                .food
                .iter()
                .map(|f| FoodSnapshot {
                    position: f.position,
                    amount: f.amount,
                })
                .collect(),
            pheromones: world.pheromones.iter().copied().collect(),
        }
    }
}

/// One ant's view in the flat layout learning agents expect.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub position: Vector2D,
    pub heading: f32,
    pub carrying_food: bool,
    /// Nearest live food regardless of vision; zero if none is left.
    pub closest_food: Vector2D,
    /// Strongest own-colony marker within vision range; zero if none.
    pub strongest_pheromone: Vector2D,
    pub colony: Vector2D,
}

impl Observation {
    pub const LEN: usize = 10;

    /// `[x, y, heading, carrying, food_x, food_y, trail_x, trail_y, nest_x, nest_y]`
    #[must_use]
    pub fn to_array(&self) -> [f32; Self::LEN] {
        [
            self.position.x,
            self.position.y,
            self.heading,
            if self.carrying_food { 1.0 } else { 0.0 },
            self.closest_food.x,
            self.closest_food.y,
            self.strongest_pheromone.x,
            self.strongest_pheromone.y,
            self.colony.x,
            self.colony.y,
        ]
    }
}
