//! Core data structures for the Formicary simulation.

pub mod entity;
pub mod environment;
pub mod vector;
