//! Garden Pong - a two-player paddle game played on a plane inside a 3D scene
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, round state)
//! - `scoreboard`: Score digit patterns and score colours
//! - `settings`: Difficulty presets and persisted preferences
//! - `game`: Host-facing facade driven once per rendered frame

pub mod error;
pub mod game;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use game::Pong;
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ball speed once launched (units per effective second)
    pub const LAUNCH_SPEED: f32 = 12.0;
    /// Half-width of the launch cone around the serve axis (±60°)
    pub const LAUNCH_HALF_CONE: f32 = std::f32::consts::FRAC_PI_3;

    /// Paddle x positions (left is mirrored)
    pub const PADDLE_X: f32 = 27.0;
    /// Paddle y position after a reset
    pub const PADDLE_DEFAULT_Y: f32 = 10.0;
    /// Distance a single move request shifts the paddle target
    pub const PADDLE_STEP: f32 = 0.5;
    /// Closest the paddle target may get to the upper/lower walls
    pub const PADDLE_WALL_MARGIN: f32 = 5.5;
    /// Fraction of the remaining distance a paddle covers each tick
    pub const PADDLE_EASING: f32 = 0.02;

    /// Ball spawn x (left is mirrored)
    pub const BALL_SPAWN_X: f32 = 25.5;
    /// Ball spawn y, level with the default paddle position
    pub const BALL_SPAWN_Y: f32 = 10.0;

    /// Ball is reflected once it gets this close to a wall centre line
    pub const WALL_CONTACT: f32 = 1.0;

    /// Face band: x extent measured from the paddle centre, outward
    pub const FACE_BAND_NEAR: f32 = 1.0;
    pub const FACE_BAND_FAR: f32 = 1.5;
    /// Face band half-height
    pub const FACE_HALF_HEIGHT: f32 = 6.0;
    /// Edge band half-width around the paddle centre
    pub const EDGE_BAND_HALF_WIDTH: f32 = 1.0;
    /// Edge band half-height
    pub const EDGE_HALF_HEIGHT: f32 = 6.5;
    /// Steepest outgoing angle from a face hit (80°)
    pub const FACE_MAX_ANGLE: f32 = 4.0 * std::f32::consts::PI / 9.0;

    /// Simulated seconds during which further reflections are ignored
    pub const BOUNCE_COOLDOWN: f32 = 0.1;

    /// Points needed to win a game
    pub const WIN_SCORE: u8 = 5;
}

/// Map `value` linearly from `[src_min, src_max]` onto `[dst_min, dst_max]`
///
/// Not clamped: values outside the source range extrapolate.
#[inline]
pub fn lerp_range(dst_min: f32, dst_max: f32, src_min: f32, src_max: f32, value: f32) -> f32 {
    let ratio = (dst_max - dst_min) / (src_max - src_min);
    dst_min + ratio * (value - src_min)
}

/// Convert a scalar speed and heading (radians) to a velocity vector
#[inline]
pub fn velocity_from_angle(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}
