pub use formicary_core::{Perception, Result, SimError};
pub mod config {
    pub use formicary_core::config::*;
}
pub mod error {
    pub use formicary_core::error::*;
}
pub mod geometry {
    pub use formicary_core::geometry::*;
}
pub mod metrics {
    pub use formicary_core::metrics::*;
}
pub mod perception {
    pub use formicary_core::perception::*;
}
pub mod pheromone {
    pub use formicary_core::pheromone::*;
}
pub mod policy {
    pub use formicary_core::policy::*;
}
pub mod snapshot {
    pub use formicary_core::snapshot::*;
}
pub mod world {
    pub use formicary_core::world::*;
}
pub mod entity {
    pub use formicary_data::{Ant, AntAction, Colony};
}
pub mod environment {
    pub use formicary_data::{FoodSource, Pheromone};
}
pub mod vector {
    pub use formicary_data::Vector2D;
}
pub use formicary_data::{MAX_ANTS_PER_COLONY, MAX_FOOD_SOURCES, MAX_PHEROMONES, NUM_COLONIES};
