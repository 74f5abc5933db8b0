//! Per-tick decision making for a single ant.
//!
//! One policy serves both colonies; only the [`PolicyProfile`] thresholds
//! differ. Every probability check consumes exactly one `f32` draw from the
//! supplied generator, and only when its branch is reached, so a seeded run
//! replays exactly.

use crate::config::PolicyProfile;
use crate::geometry::{angle_difference, wrap_angle};
use crate::perception::Perception;
use crate::pheromone::PheromoneField;
use formicary_data::{Ant, AntAction};
use rand::Rng;

/// Outcome of comparing the heading with a desired bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Turn(AntAction),
    OnCourse,
}

/// Turn toward `target` unless the error is within `deadband`.
#[must_use]
pub fn steer_towards(heading: f32, target: f32, deadband: f32) -> Steer {
    let error = angle_difference(target, heading);
    if error > deadband {
        Steer::Turn(AntAction::TurnRight)
    } else if error < -deadband {
        Steer::Turn(AntAction::TurnLeft)
    } else {
        Steer::OnCourse
    }
}

fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f32) -> bool {
    rng.gen::<f32>() < chance
}

fn steer_or_forward(heading: f32, target: f32, deadband: f32) -> AntAction {
    match steer_towards(heading, target, deadband) {
        Steer::Turn(action) => action,
        Steer::OnCourse => AntAction::MoveForward,
    }
}

/// Chooses this tick's action for `ant`.
pub fn decide<P, R>(
    ant: &Ant,
    senses: &P,
    profile: &PolicyProfile,
    deadband: f32,
    rng: &mut R,
) -> AntAction
where
    P: Perception + ?Sized,
    R: Rng + ?Sized,
{
    if ant.carrying_food {
        let home = senses.angle_to_colony(ant);
        return match steer_towards(ant.heading, home, deadband) {
            Steer::Turn(action) => action,
            Steer::OnCourse if roll(rng, profile.return_drop_chance) => AntAction::DropPheromone,
            Steer::OnCourse => AntAction::MoveForward,
        };
    }

    let food = senses.closest_food_direction(ant);
    if !food.is_zero() {
        return steer_or_forward(ant.heading, food.angle(), deadband);
    }

    if roll(rng, profile.follow_chance) {
        if let Some(bearing) = senses.strongest_pheromone_direction(ant) {
            return steer_or_forward(ant.heading, bearing, deadband);
        }
    }

    explore(profile, rng)
}

/// Random walk: drop, left, right, evaluated in that order, first hit wins.
pub fn explore<R: Rng + ?Sized>(profile: &PolicyProfile, rng: &mut R) -> AntAction {
    if roll(rng, profile.explore_drop_chance) {
        AntAction::DropPheromone
    } else if roll(rng, profile.explore_left_chance) {
        AntAction::TurnLeft
    } else if roll(rng, profile.explore_right_chance) {
        AntAction::TurnRight
    } else {
        AntAction::MoveForward
    }
}

/// Applies `action`. Forward motion is left to the world loop.
pub fn execute(ant: &mut Ant, action: AntAction, turn_angle: f32, field: &mut PheromoneField) {
    match action {
        AntAction::MoveForward => {}
        AntAction::TurnLeft => ant.heading = wrap_angle(ant.heading - turn_angle),
        AntAction::TurnRight => ant.heading = wrap_angle(ant.heading + turn_angle),
        AntAction::DropPheromone => field.deposit(ant.position, ant.colony_id),
    }
}
