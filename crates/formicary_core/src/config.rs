//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to a `config.toml` file. Every section
//! is optional in the file; missing keys fall back to the stock two-colony
//! forager settings.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags in the binary (seed only)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 800.0
//! height = 600.0
//! seed = 42
//!
//! [ant]
//! vision_range = 50.0
//!
//! [pheromone]
//! evaporation_rate = 0.001
//!
//! # one table per colony, in colony order
//! [[policy.profiles]]
//! return_drop_chance = 0.05
//! follow_chance = 0.8
//! explore_drop_chance = 0.1
//! explore_left_chance = 0.25
//! explore_right_chance = 0.25
//!
//! [[policy.profiles]]
//! return_drop_chance = 0.1
//! follow_chance = 0.4
//! explore_drop_chance = 0.05
//! explore_left_chance = 0.4
//! explore_right_chance = 0.4
//! ```

use crate::error::{ensure_config, Result};
use formicary_data::NUM_COLONIES;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;

/// Map extent, placement rules and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub seed: Option<u64>,
    pub food_per_source: u32,
    pub food_radius: f32,
    pub colony_radius: f32,
    /// Food is sampled this far inside each map edge.
    pub food_margin: f32,
    pub min_food_colony_distance: f32,
    pub food_placement_attempts: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            seed: None,
            food_per_source: 100,
            food_radius: 6.0,
            colony_radius: 20.0,
            food_margin: 50.0,
            min_food_colony_distance: 100.0,
            food_placement_attempts: 100,
        }
    }
}

/// Per-ant kinematics and senses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AntConfig {
    pub speed: f32,
    pub radius: f32,
    pub vision_range: f32,
    /// Full field of view in radians.
    pub vision_angle: f32,
    pub turn_angle: f32,
    /// Heading error (radians) tolerated before a turn is chosen.
    pub steer_deadband: f32,
    pub initial_energy: f32,
}

impl Default for AntConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            radius: 4.0,
            vision_range: 50.0,
            vision_angle: PI / 2.0,
            turn_angle: PI / 10.0,
            steer_deadband: 0.1,
            initial_energy: 100.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PheromoneConfig {
    pub deposit_amount: f32,
    /// Strength subtracted from every marker once per tick.
    pub evaporation_rate: f32,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            deposit_amount: 1.0,
            evaporation_rate: 0.001,
        }
    }
}

/// Behavioural thresholds for one colony. Every field is a probability.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolicyProfile {
    /// Chance to mark the trail while already lined up on the way home.
    pub return_drop_chance: f32,
    /// Chance to consult pheromones when no food is in sight.
    pub follow_chance: f32,
    pub explore_drop_chance: f32,
    pub explore_left_chance: f32,
    pub explore_right_chance: f32,
}

impl PolicyProfile {
    /// Colony 0: trusts trails.
    #[must_use]
    pub const fn forager() -> Self {
        Self {
            return_drop_chance: 1.0 / 20.0,
            follow_chance: 0.8,
            explore_drop_chance: 0.1,
            explore_left_chance: 0.25,
            explore_right_chance: 0.25,
        }
    }

    /// Colony 1: wanders more, follows less.
    #[must_use]
    pub const fn explorer() -> Self {
        Self {
            return_drop_chance: 1.0 / 10.0,
            follow_chance: 0.4,
            explore_drop_chance: 0.05,
            explore_left_chance: 0.4,
            explore_right_chance: 0.4,
        }
    }

    fn chances(&self) -> [(&'static str, f32); 5] {
        [
            ("return_drop_chance", self.return_drop_chance),
            ("follow_chance", self.follow_chance),
            ("explore_drop_chance", self.explore_drop_chance),
            ("explore_left_chance", self.explore_left_chance),
            ("explore_right_chance", self.explore_right_chance),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Indexed by colony id.
    pub profiles: [PolicyProfile; NUM_COLONIES],
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            profiles: [PolicyProfile::forager(), PolicyProfile::explorer()],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub ant: AntConfig,
    pub pheromone: PheromoneConfig,
    pub policy: PolicyConfig,
    pub target_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            ant: AntConfig::default(),
            pheromone: PheromoneConfig::default(),
            policy: PolicyConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if every parameter is usable, or the first failure.
    ///
    /// # Validation Rules
    /// - Map extents and radii must be positive and finite
    /// - The placement margin must leave a non-empty sampling window
    /// - Pheromone deposit must be positive, evaporation non-negative
    /// - Every policy chance must be in [0.0, 1.0]
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        ensure_config!(
            w.width.is_finite() && w.width > 0.0,
            "World width must be positive"
        );
        ensure_config!(
            w.height.is_finite() && w.height > 0.0,
            "World height must be positive"
        );
        ensure_config!(
            w.food_margin >= 0.0
                && 2.0 * w.food_margin < w.width
                && 2.0 * w.food_margin < w.height,
            "Food margin {} leaves no room on a {}x{} map",
            w.food_margin,
            w.width,
            w.height
        );
        ensure_config!(w.food_radius > 0.0, "Food radius must be positive");
        ensure_config!(w.colony_radius > 0.0, "Colony radius must be positive");
        ensure_config!(
            w.min_food_colony_distance >= 0.0,
            "Minimum food/colony distance must be non-negative"
        );
        ensure_config!(
            w.food_placement_attempts > 0,
            "Food placement needs at least one attempt"
        );

        let a = &self.ant;
        ensure_config!(
            a.speed.is_finite() && a.speed >= 0.0,
            "Ant speed must be non-negative"
        );
        ensure_config!(a.radius > 0.0, "Ant radius must be positive");
        ensure_config!(a.vision_range > 0.0, "Vision range must be positive");
        ensure_config!(
            a.vision_angle > 0.0 && a.vision_angle <= 2.0 * PI,
            "Vision angle must be in (0, 2π]"
        );
        ensure_config!(
            a.turn_angle.is_finite() && a.turn_angle > 0.0,
            "Turn angle must be positive"
        );
        ensure_config!(
            a.steer_deadband >= 0.0,
            "Steering deadband must be non-negative"
        );

        ensure_config!(
            self.pheromone.deposit_amount > 0.0,
            "Pheromone deposit amount must be positive"
        );
        ensure_config!(
            self.pheromone.evaporation_rate >= 0.0,
            "Pheromone evaporation rate must be non-negative"
        );

        for (colony, profile) in self.policy.profiles.iter().enumerate() {
            for (name, chance) in profile.chances() {
                ensure_config!(
                    (0.0..=1.0).contains(&chance),
                    "Colony {colony} {name} must be in [0.0, 1.0], got {chance}"
                );
            }
        }

        ensure_config!(self.target_fps > 0, "Target FPS must be positive");
        ensure_config!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a `config.toml` from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[must_use]
    pub fn profile(&self, colony_id: usize) -> &PolicyProfile {
        &self.policy.profiles[colony_id % NUM_COLONIES]
    }

    /// Frame delta the headless shell feeds to `World::update`.
    #[must_use]
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Stable hash of every behaviour-affecting parameter, seed excluded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut world = self.world.clone();
        world.seed = None;
        let mut hasher = Sha256::new();
        hasher.update(format!("{world:?}").as_bytes());
        hasher.update(format!("{:?}", self.ant).as_bytes());
        hasher.update(format!("{:?}", self.pheromone).as_bytes());
        hasher.update(format!("{:?}", self.policy).as_bytes());
        hex::encode(hasher.finalize())
    }
}
