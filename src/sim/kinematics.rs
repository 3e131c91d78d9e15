//! Ball kinematics
//!
//! The ball carries a heading and a scalar speed rather than a velocity
//! vector. Reflections only ever rewrite the heading.

use glam::Vec2;
use rand::Rng;

use crate::consts::LAUNCH_HALF_CONE;
use crate::velocity_from_angle;

/// Draw a serve heading uniformly from the ±60° cone around +x
pub fn launch_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-LAUNCH_HALF_CONE..=LAUNCH_HALF_CONE)
}

/// Displacement over `dt` effective seconds
#[inline]
pub fn displacement(speed: f32, angle: f32, dt: f32) -> Vec2 {
    if speed == 0.0 {
        return Vec2::ZERO;
    }
    velocity_from_angle(speed, angle) * dt
}

/// Heading after bouncing off a horizontal surface
#[inline]
pub fn mirror_vertical(angle: f32) -> f32 {
    -angle
}

/// Heading pointing the same way but towards -x
#[inline]
pub fn mirror_horizontal(angle: f32) -> f32 {
    std::f32::consts::PI - angle
}
