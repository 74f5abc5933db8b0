//! Plain data records shared by the Formicary simulation crates.
//!
//! Nothing in here knows about randomness, configuration or the update loop;
//! it is the vocabulary the core and any rendering shell agree on.

pub mod data;

pub use data::entity::{Ant, AntAction, Colony};
pub use data::environment::{FoodSource, Pheromone};
pub use data::vector::Vector2D;

/// Number of colonies in a run.
pub const NUM_COLONIES: usize = 2;
/// Ant slots owned by each colony.
pub const MAX_ANTS_PER_COLONY: usize = 50;
/// Food source slots on the map.
pub const MAX_FOOD_SOURCES: usize = 20;
/// Upper bound of the shared pheromone field.
pub const MAX_PHEROMONES: usize = 5000;
