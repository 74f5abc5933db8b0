//! # Formicary Core
//!
//! The simulation engine for Formicary: two ant colonies foraging on a
//! wrapping 2D map and steering each other through pheromone trails.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Angle and plane helpers
//! - The shared, bounded pheromone field
//! - Vision-cone perception of food, trails and home
//! - The per-ant policy and its two built-in behavioural profiles
//! - The world update loop, snapshots and observations
//! - Configuration, errors, metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use formicary_core::config::AppConfig;
//! use formicary_core::world::World;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(config).expect("default config is valid");
//!
//! for _ in 0..120 {
//!     world.update(1.0 / 60.0);
//! }
//! assert_eq!(world.snapshot().iteration, 120);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Angle wrapping, wraparound and random sampling
pub mod geometry;
/// Run counters and tracing setup
pub mod metrics;
/// What an ant can see
pub mod perception;
/// Pheromone markers shared by every colony
pub mod pheromone;
/// Action selection and execution
pub mod policy;
/// Read-only world views for renderers and agents
pub mod snapshot;
/// World state, construction and the tick
pub mod world;

pub use config::{AppConfig, PolicyProfile};
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use perception::{Perception, VisionCone};
pub use pheromone::PheromoneField;
pub use world::{TickSummary, World};
