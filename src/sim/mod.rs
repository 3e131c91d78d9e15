//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Randomness only through the generator the caller passes in
//! - Fixed evaluation order within a tick
//! - No rendering, audio or platform dependencies

pub mod bounds;
pub mod collision;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use bounds::{Band, Field, Rect};
pub use state::{
    Ball, GameEvent, GameState, MoveDirection, Paddle, RoundPhase, Scores, Side, Snapshot,
    Surface,
};
pub use tick::{request_launch, reset_round, tick};
