//! Angle and plane helpers shared by perception, policy and the world loop.

use formicary_data::Vector2D;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Normalises `angle` into (-π, π].
///
/// Exact for already-normalised input, so applying it twice is a no-op.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle % TAU;
    if a > PI {
        a - TAU
    } else if a <= -PI {
        a + TAU
    } else {
        a
    }
}

/// Signed turn from `from` to `to`, in (-π, π]. Positive means turn right
/// (clockwise on screen, where y grows downwards).
#[must_use]
pub fn angle_difference(to: f32, from: f32) -> f32 {
    wrap_angle(to - from)
}

/// Uniform sample in `[min, max)`; degenerate ranges return `min`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}

/// Teleport wrap across the map edges. A coordinate that left the map on one
/// side re-enters on the opposite edge; the other coordinate is untouched.
#[must_use]
pub fn wrap_position(mut p: Vector2D, width: f32, height: f32) -> Vector2D {
    if p.x < 0.0 {
        p.x = width;
    } else if p.x > width {
        p.x = 0.0;
    }
    if p.y < 0.0 {
        p.y = height;
    } else if p.y > height {
        p.y = 0.0;
    }
    p
}
