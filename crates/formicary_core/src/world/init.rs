use crate::config::{AppConfig, WorldConfig};
use crate::error::Result;
use crate::geometry::{random_float, wrap_angle};
use crate::pheromone::PheromoneField;
use crate::world::World;
use formicary_data::{
    Ant, Colony, FoodSource, Vector2D, MAX_ANTS_PER_COLONY, MAX_FOOD_SOURCES, MAX_PHEROMONES,
    NUM_COLONIES,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Nest positions: a quarter of the way in from each side, vertically centred.
#[must_use]
pub fn colony_positions(world: &WorldConfig) -> [Vector2D; NUM_COLONIES] {
    [
        Vector2D::new(world.width / 4.0, world.height / 2.0),
        Vector2D::new(3.0 * world.width / 4.0, world.height / 2.0),
    ]
}

/// Samples a food position at least `min_food_colony_distance` from every
/// nest. After `food_placement_attempts` misses the last sample is kept and
/// the second value is `false`.
pub fn sample_food_position<R: Rng + ?Sized>(
    rng: &mut R,
    nests: &[Vector2D],
    world: &WorldConfig,
) -> (Vector2D, bool) {
    let mut position = Vector2D::ZERO;
    for _ in 0..world.food_placement_attempts {
        position = Vector2D::new(
            random_float(rng, world.food_margin, world.width - world.food_margin),
            random_float(rng, world.food_margin, world.height - world.food_margin),
        );
        if nests
            .iter()
            .all(|nest| nest.distance(position) >= world.min_food_colony_distance)
        {
            return (position, true);
        }
    }
    (position, false)
}

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl World {
    /// Builds a fully populated world: both colonies at capacity and every
    /// food slot filled.
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut world = Self::new_empty(config)?;
        world.populate();
        Ok(world)
    }

    /// Nests only: no ants, no food, no pheromones.
    pub fn new_empty(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let rng = rng_for(config.world.seed);
        let pheromones = PheromoneField::new(MAX_PHEROMONES, config.pheromone.deposit_amount);
        let colonies = colony_positions(&config.world)
            .into_iter()
            .enumerate()
            .map(|(id, position)| Colony::new(id, position, MAX_ANTS_PER_COLONY))
            .collect();

        Ok(Self {
            config,
            colonies,
            food: Vec::with_capacity(MAX_FOOD_SOURCES),
            pheromones,
            elapsed: 0.0,
            iteration: 0,
            rng,
        })
    }

    /// Starts over. `Some(seed)` also reseeds; `None` keeps drawing from the
    /// current generator.
    pub fn reset(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.config.world.seed = Some(seed);
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        self.populate();
    }

    fn populate(&mut self) {
        self.elapsed = 0.0;
        self.iteration = 0;
        self.pheromones.clear();
        self.food.clear();

        let energy = self.config.ant.initial_energy;
        for colony in &mut self.colonies {
            colony.food_collected = 0;
            colony.ants.clear();
            for _ in 0..MAX_ANTS_PER_COLONY {
                let heading = wrap_angle(random_float(&mut self.rng, 0.0, TAU));
                colony
                    .ants
                    .push(Ant::new(colony.position, heading, colony.id, energy));
            }
            colony.ants_alive = colony.ants.len();
        }

        let nests: Vec<Vector2D> = self.colonies.iter().map(|c| c.position).collect();
        for index in 0..MAX_FOOD_SOURCES {
            let (position, clear) = sample_food_position(&mut self.rng, &nests, &self.config.world);
            if !clear {
                tracing::warn!(
                    food_source = index,
                    attempts = self.config.world.food_placement_attempts,
                    "Could not find a position clear of every colony, placing anyway"
                );
            }
            self.food
                .push(FoodSource::new(position, self.config.world.food_per_source));
        }

        tracing::debug!(
            seed = ?self.config.world.seed,
            ants = MAX_ANTS_PER_COLONY * self.colonies.len(),
            food_sources = self.food.len(),
            "World populated"
        );
    }

    /// Adds an ant to a colony if it has a free slot. Returns its index.
    pub fn spawn_ant(
        &mut self,
        colony_id: usize,
        position: Vector2D,
        heading: f32,
    ) -> Option<usize> {
        let energy = self.config.ant.initial_energy;
        let colony = self.colonies.get_mut(colony_id)?;
        if colony.ants_alive >= MAX_ANTS_PER_COLONY {
            return None;
        }
        colony.ants.truncate(colony.ants_alive);
        colony
            .ants
            .push(Ant::new(position, wrap_angle(heading), colony_id, energy));
        colony.ants_alive += 1;
        Some(colony.ants_alive - 1)
    }

    /// Adds a food source if a slot is free. Returns its index.
    pub fn add_food(&mut self, position: Vector2D, amount: u32) -> Option<usize> {
        if self.food.len() >= MAX_FOOD_SOURCES {
            return None;
        }
        self.food.push(FoodSource::new(position, amount));
        Some(self.food.len() - 1)
    }
}
