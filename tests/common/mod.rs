pub mod macros;

use formicary_lib::model::config::{AppConfig, PolicyProfile};
use formicary_lib::model::vector::Vector2D;
use formicary_lib::model::world::World;

type WorldMod = Box<dyn FnOnce(&mut World)>;

/// Profile whose every roll misses: ants only steer or walk straight.
#[allow(dead_code)]
pub const QUIET: PolicyProfile = PolicyProfile {
    return_drop_chance: 0.0,
    follow_chance: 0.0,
    explore_drop_chance: 0.0,
    explore_left_chance: 0.0,
    explore_right_chance: 0.0,
};

/// Starts from nests only; ants, food and markers are placed explicitly.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    mods: Vec<WorldMod>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(0);
        Self {
            config,
            mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_quiet_policy(self) -> Self {
        self.with_config(|c| c.policy.profiles = [QUIET; 2])
    }

    pub fn with_ant(self, colony: usize, x: f32, y: f32, heading: f32) -> Self {
        self.with_ant_state(colony, x, y, heading, false)
    }

    pub fn with_carrying_ant(self, colony: usize, x: f32, y: f32, heading: f32) -> Self {
        self.with_ant_state(colony, x, y, heading, true)
    }

    fn with_ant_state(
        mut self,
        colony: usize,
        x: f32,
        y: f32,
        heading: f32,
        carrying: bool,
    ) -> Self {
        self.mods.push(Box::new(move |world| {
            let index = world
                .spawn_ant(colony, Vector2D::new(x, y), heading)
                .expect("colony has a free slot");
            world.colonies[colony].ants[index].carrying_food = carrying;
        }));
        self
    }

    pub fn with_food(mut self, x: f32, y: f32, amount: u32) -> Self {
        self.mods.push(Box::new(move |world| {
            world
                .add_food(Vector2D::new(x, y), amount)
                .expect("food slot available");
        }));
        self
    }

    pub fn with_pheromone(mut self, x: f32, y: f32, colony: usize) -> Self {
        self.mods.push(Box::new(move |world| {
            world.pheromones.deposit(Vector2D::new(x, y), colony);
        }));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new_empty(self.config).expect("valid test config");
        for m in self.mods {
            m(&mut world);
        }
        world
    }
}

/// A fully populated world with a fixed seed.
#[allow(dead_code)]
pub fn seeded_world(seed: u64) -> World {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    World::new(config).expect("default config is valid")
}
