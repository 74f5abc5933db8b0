use crate::geometry::wrap_position;
use crate::perception::WorldView;
use crate::policy;
use crate::world::World;
use formicary_data::{AntAction, Vector2D};
use serde::{Deserialize, Serialize};

/// What happened during one tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub pickups: u32,
    pub deliveries: u32,
    /// Markers laid, by choice or on delivery.
    pub deposits: u32,
    pub expired: usize,
}

impl World {
    /// Advances the simulation by one tick.
    ///
    /// For every living ant, colony by colony and slot by slot:
    /// - the colony's policy picks an action, which is applied
    /// - an empty-handed ant touching live food picks up one unit
    /// - a laden ant touching its nest drops it off and marks the spot
    /// - the ant steps forward and wraps around the map edges
    ///
    /// Then the pheromone field ages once.
    ///
    /// # Arguments
    /// * `dt` - Frame time in seconds, added to `elapsed`
    pub fn update(&mut self, dt: f32) -> TickSummary {
        self.elapsed += dt;
        self.iteration += 1;

        let mut summary = TickSummary::default();
        let vision = self.vision();
        let ant_cfg = self.config.ant.clone();
        let (width, height) = (self.config.world.width, self.config.world.height);
        let pickup_reach = ant_cfg.radius + self.config.world.food_radius;
        let delivery_reach = ant_cfg.radius + self.config.world.colony_radius;

        for colony_id in 0..self.colonies.len() {
            let profile = *self.config.profile(colony_id);
            let nest = self.colonies[colony_id].position;
            let alive = self.colonies[colony_id].living().len();

            for slot in 0..alive {
                let mut ant = self.colonies[colony_id].ants[slot];

                let action = {
                    let view = WorldView {
                        colonies: &self.colonies,
                        food: &self.food,
                        pheromones: &self.pheromones,
                        vision,
                    };
                    policy::decide(&ant, &view, &profile, ant_cfg.steer_deadband, &mut self.rng)
                };
                if action == AntAction::DropPheromone {
                    summary.deposits += 1;
                }
                policy::execute(&mut ant, action, ant_cfg.turn_angle, &mut self.pheromones);

                if !ant.carrying_food {
                    if let Some(food) = self.food.iter_mut().find(|f| {
                        !f.is_depleted() && f.position.distance(ant.position) < pickup_reach
                    }) {
                        food.amount -= 1;
                        ant.carrying_food = true;
                        summary.pickups += 1;
                    }
                }

                if ant.carrying_food && nest.distance(ant.position) < delivery_reach {
                    ant.carrying_food = false;
                    self.colonies[colony_id].food_collected += 1;
                    self.pheromones.deposit(ant.position, ant.colony_id);
                    summary.deliveries += 1;
                    summary.deposits += 1;
                    tracing::trace!(
                        colony = colony_id,
                        ant = slot,
                        total = self.colonies[colony_id].food_collected,
                        "Food delivered"
                    );
                }

                ant.position += Vector2D::from_angle(ant.heading) * ant_cfg.speed;
                ant.position = wrap_position(ant.position, width, height);

                self.colonies[colony_id].ants[slot] = ant;
            }
        }

        summary.expired = self.pheromones.decay_all(self.config.pheromone.evaporation_rate);
        summary
    }
}
