//! What an ant can sense from where it stands.

use crate::config::AntConfig;
use crate::geometry::angle_difference;
use crate::pheromone::PheromoneField;
use formicary_data::{Ant, Colony, FoodSource, Vector2D};

/// A disk of radius `range` clipped to `angle` radians centred on heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionCone {
    pub range: f32,
    /// Full field of view.
    pub angle: f32,
}

impl VisionCone {
    #[must_use]
    pub fn from_config(ant: &AntConfig) -> Self {
        Self {
            range: ant.vision_range,
            angle: ant.vision_angle,
        }
    }

    /// True iff `target` is within range and within half the field of view
    /// of the ant's heading.
    #[must_use]
    pub fn contains(&self, ant: &Ant, target: Vector2D) -> bool {
        let delta = target - ant.position;
        if delta.length_squared() > self.range * self.range {
            return false;
        }
        angle_difference(delta.angle(), ant.heading).abs() <= self.angle / 2.0
    }
}

/// Free-function form of [`VisionCone::contains`].
#[must_use]
pub fn is_in_vision(ant: &Ant, target: Vector2D, vision: &VisionCone) -> bool {
    vision.contains(ant, target)
}

/// The three questions a policy may ask about the world.
pub trait Perception {
    /// Bearing from the ant to its own colony.
    fn angle_to_colony(&self, ant: &Ant) -> f32;

    /// Displacement to the closest visible live food, or zero if none.
    ///
    /// Food lying exactly on the ant also yields zero and is therefore
    /// indistinguishable from "nothing in sight".
    fn closest_food_direction(&self, ant: &Ant) -> Vector2D;

    /// Bearing to the most attractive visible own-colony pheromone.
    fn strongest_pheromone_direction(&self, ant: &Ant) -> Option<f32>;
}

/// Read-only borrow of the parts of the world perception needs.
pub struct WorldView<'a> {
    pub colonies: &'a [Colony],
    pub food: &'a [FoodSource],
    pub pheromones: &'a PheromoneField,
    pub vision: VisionCone,
}

impl Perception for WorldView<'_> {
    fn angle_to_colony(&self, ant: &Ant) -> f32 {
        match self.colonies.get(ant.colony_id) {
            Some(colony) => (colony.position - ant.position).angle(),
            None => ant.heading,
        }
    }

    fn closest_food_direction(&self, ant: &Ant) -> Vector2D {
        let mut result = Vector2D::ZERO;
        let mut closest_sq = self.vision.range * self.vision.range;

        for food in self.food.iter().filter(|f| !f.is_depleted()) {
            let delta = food.position - ant.position;
            let distance_sq = delta.length_squared();
            if distance_sq < closest_sq && self.vision.contains(ant, food.position) {
                closest_sq = distance_sq;
                result = delta;
            }
        }

        result
    }

    fn strongest_pheromone_direction(&self, ant: &Ant) -> Option<f32> {
        self.pheromones.strongest_direction_towards(ant, &self.vision)
    }
}
