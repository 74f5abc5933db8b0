use crate::config::AppConfig;
use crate::error::{Result, SimError};
use crate::perception::{Perception, VisionCone, WorldView};
use crate::pheromone::PheromoneField;
use crate::snapshot::{Observation, WorldSnapshot};
use formicary_data::{Ant, Colony, FoodSource, Vector2D};
use rand_chacha::ChaCha8Rng;

pub mod init;
pub mod update;

pub use update::TickSummary;

/// The whole simulation: colonies with their ants, food and the shared
/// pheromone field, plus the generator every random choice draws from.
pub struct World {
    pub config: AppConfig,
    pub colonies: Vec<Colony>,
    pub food: Vec<FoodSource>,
    pub pheromones: PheromoneField,
    /// Seconds of frame time fed in through `update`.
    pub elapsed: f32,
    pub iteration: u64,
    pub rng: ChaCha8Rng,
}

impl World {
    #[must_use]
    pub fn vision(&self) -> VisionCone {
        VisionCone::from_config(&self.config.ant)
    }

    /// Borrowed perception over the current state.
    #[must_use]
    pub fn view(&self) -> WorldView<'_> {
        WorldView {
            colonies: &self.colonies,
            food: &self.food,
            pheromones: &self.pheromones,
            vision: self.vision(),
        }
    }

    pub fn living_ants(&self) -> impl Iterator<Item = &Ant> {
        self.colonies.iter().flat_map(Colony::living)
    }

    #[must_use]
    pub fn ant(&self, colony_id: usize, index: usize) -> Option<&Ant> {
        self.colonies.get(colony_id)?.living().get(index)
    }

    #[must_use]
    pub fn total_food_collected(&self) -> u32 {
        self.colonies.iter().map(|c| c.food_collected).sum()
    }

    #[must_use]
    pub fn food_remaining(&self) -> u32 {
        self.food.iter().map(|f| f.amount).sum()
    }

    /// Every food source is spent.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.food.iter().all(FoodSource::is_depleted)
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(self)
    }

    /// Ten-value summary of one ant's surroundings.
    pub fn observe(&self, colony_id: usize, index: usize) -> Result<Observation> {
        let colony = self
            .colonies
            .get(colony_id)
            .ok_or(SimError::UnknownColony(colony_id))?;
        let ant = colony.living().get(index).ok_or(SimError::UnknownAnt {
            colony: colony_id,
            index,
        })?;

        let closest_food = self
            .food
            .iter()
            .filter(|f| !f.is_depleted())
            .min_by(|a, b| {
                let da = ant.position.distance_squared(a.position);
                let db = ant.position.distance_squared(b.position);
                da.total_cmp(&db)
            })
            .map_or(Vector2D::ZERO, |f| f.position);

        let strongest = self
            .pheromones
            .strongest_within(ant.position, ant.colony_id, self.config.ant.vision_range)
            .unwrap_or(Vector2D::ZERO);

        Ok(Observation {
            position: ant.position,
            heading: ant.heading,
            carrying_food: ant.carrying_food,
            closest_food,
            strongest_pheromone: strongest,
            colony: colony.position,
        })
    }

    /// Bearing from an ant to its colony; shorthand for the perception query.
    #[must_use]
    pub fn angle_to_colony(&self, ant: &Ant) -> f32 {
        self.view().angle_to_colony(ant)
    }
}
