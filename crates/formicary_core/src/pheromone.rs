//! Pheromone field shared by every colony.
//!
//! Markers live in one bounded, insertion-ordered collection and are told
//! apart by their colony id. When the field is full the oldest marker makes
//! room for the new one, whichever colony laid it.

use crate::perception::VisionCone;
use formicary_data::{Ant, Pheromone, Vector2D, MAX_PHEROMONES};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PheromoneField {
    markers: VecDeque<Pheromone>,
    capacity: usize,
    deposit_amount: f32,
}

impl Default for PheromoneField {
    fn default() -> Self {
        Self::new(MAX_PHEROMONES, 1.0)
    }
}

impl PheromoneField {
    #[must_use]
    pub fn new(capacity: usize, deposit_amount: f32) -> Self {
        Self {
            markers: VecDeque::with_capacity(capacity),
            capacity,
            deposit_amount,
        }
    }

    /// Lays a full-strength marker, evicting the oldest one when at capacity.
    pub fn deposit(&mut self, position: Vector2D, colony_id: usize) {
        if self.capacity == 0 {
            return;
        }
        if self.markers.len() >= self.capacity {
            self.markers.pop_front();
        }
        self.markers.push_back(Pheromone {
            position,
            strength: self.deposit_amount,
            colony_id,
        });
    }

    /// Ages every marker by `rate` and drops those at or below zero.
    /// Returns how many expired.
    pub fn decay_all(&mut self, rate: f32) -> usize {
        let before = self.markers.len();
        self.markers.retain_mut(|p| {
            p.strength -= rate;
            p.strength > 0.0
        });
        before - self.markers.len()
    }

    /// Bearing to the most attractive own-colony marker the ant can see.
    ///
    /// Each visible marker scores `strength / (distance² + 1)`; the first
    /// maximum encountered wins.
    #[must_use]
    pub fn strongest_direction_towards(&self, ant: &Ant, vision: &VisionCone) -> Option<f32> {
        let range_sq = vision.range * vision.range;
        let mut best_score = 0.0f32;
        let mut best_direction = None;

        for p in self.markers.iter().filter(|p| p.colony_id == ant.colony_id) {
            let delta = p.position - ant.position;
            let distance_sq = delta.length_squared();
            if distance_sq > range_sq || !vision.contains(ant, p.position) {
                continue;
            }
            let score = p.strength / (distance_sq + 1.0);
            if score > best_score {
                best_score = score;
                best_direction = Some(delta.angle());
            }
        }

        best_direction
    }

    /// Position of the highest-strength own-colony marker strictly inside
    /// `range`, ignoring heading.
    #[must_use]
    pub fn strongest_within(
        &self,
        position: Vector2D,
        colony_id: usize,
        range: f32,
    ) -> Option<Vector2D> {
        let mut best: Option<&Pheromone> = None;
        for p in &self.markers {
            if p.colony_id != colony_id || position.distance(p.position) >= range {
                continue;
            }
            if best.map_or(true, |b| p.strength > b.strength) {
                best = Some(p);
            }
        }
        best.map(|p| p.position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn count_for(&self, colony_id: usize) -> usize {
        self.markers.iter().filter(|p| p.colony_id == colony_id).count()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Pheromone> {
        self.markers.iter()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn cone() -> VisionCone {
        VisionCone {
            range: 50.0,
            angle: PI / 2.0,
        }
    }

    fn ant_at(x: f32, y: f32, heading: f32) -> Ant {
        Ant::new(Vector2D::new(x, y), heading, 0, 100.0)
    }

    #[test]
    fn test_deposit_at_capacity_evicts_oldest() {
        let mut field = PheromoneField::new(3, 1.0);
        for i in 0..3 {
            field.deposit(Vector2D::new(i as f32, 0.0), 0);
        }
        field.deposit(Vector2D::new(99.0, 0.0), 1);

        assert_eq!(field.len(), 3);
        let xs: Vec<f32> = field.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 99.0]);
    }

    #[test]
    fn test_decay_removes_expired_in_same_call() {
        let mut field = PheromoneField::new(10, 0.0025);
        field.deposit(Vector2D::ZERO, 0);
        assert_eq!(field.decay_all(0.001), 0);
        assert_eq!(field.decay_all(0.001), 0);
        assert_eq!(field.decay_all(0.001), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_exact_zero_strength_is_removed() {
        let mut field = PheromoneField::new(4, 0.5);
        field.deposit(Vector2D::ZERO, 0);
        assert_eq!(field.decay_all(0.5), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_strongest_direction_prefers_closer_marker() {
        let mut field = PheromoneField::new(10, 1.0);
        field.deposit(Vector2D::new(40.0, 0.0), 0);
        field.deposit(Vector2D::new(10.0, 0.0), 0);
        let dir = field.strongest_direction_towards(&ant_at(0.0, 0.0, 0.0), &cone());
        assert_eq!(dir, Some(0.0));
    }

    #[test]
    fn test_strongest_direction_ignores_other_colony_and_blind_spot() {
        let mut field = PheromoneField::new(10, 1.0);
        field.deposit(Vector2D::new(10.0, 0.0), 1);
        field.deposit(Vector2D::new(-10.0, 0.0), 0);
        field.deposit(Vector2D::new(0.0, 60.0), 0);
        let dir = field.strongest_direction_towards(&ant_at(0.0, 0.0, 0.0), &cone());
        assert_eq!(dir, None);
    }

    #[test]
    fn test_strongest_direction_tie_keeps_first() {
        let mut field = PheromoneField::new(10, 1.0);
        field.deposit(Vector2D::new(10.0, 5.0), 0);
        field.deposit(Vector2D::new(10.0, -5.0), 0);
        let dir = field
            .strongest_direction_towards(&ant_at(0.0, 0.0, 0.0), &cone())
            .unwrap();
        assert!(dir > 0.0);
    }

    #[test]
    fn test_strongest_within_ignores_heading() {
        let mut field = PheromoneField::new(10, 1.0);
        field.deposit(Vector2D::new(-10.0, 0.0), 0);
        field.decay_all(0.5);
        field.deposit(Vector2D::new(0.0, -20.0), 0);
        field.deposit(Vector2D::new(0.0, 80.0), 0);
        let pos = field.strongest_within(Vector2D::ZERO, 0, 50.0);
        assert_eq!(pos, Some(Vector2D::new(0.0, -20.0)));
        assert_eq!(field.strongest_within(Vector2D::ZERO, 1, 50.0), None);
    }
}
