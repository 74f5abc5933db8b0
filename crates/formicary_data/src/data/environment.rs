use super::vector::Vector2D;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
/// A pile of food units. An empty pile keeps its slot but is inert.
pub struct FoodSource {
    pub position: Vector2D,
    pub amount: u32,
}

impl FoodSource {
    #[must_use]
    pub fn new(position: Vector2D, amount: u32) -> Self {
        Self { position, amount }
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.amount == 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
/// A scent marker attractive only to ants of `colony_id`.
pub struct Pheromone {
    pub position: Vector2D,
    pub strength: f32,
    pub colony_id: usize,
}
