//! Collision detection and response
//!
//! Runs once per tick after the ball has moved. Reflections are suppressed
//! while the bounce cooldown is running so a ball that overlaps a band for
//! several ticks is only reflected once. Scoring (ball past a side wall) is
//! not gated by the cooldown.

use glam::Vec2;

use super::bounds::Field;
use super::kinematics::{mirror_horizontal, mirror_vertical};
use super::state::{GameEvent, GameState, Paddle, RoundPhase, Side, Surface};
use crate::consts::*;
use crate::lerp_range;

/// Whether the ball touches the upper or lower wall
pub fn wall_contact(ball: Vec2, field: &Field) -> bool {
    ball.y >= field.top() - WALL_CONTACT || ball.y <= field.bottom() + WALL_CONTACT
}

/// Which side scores, if the ball has reached a side wall
pub fn out_of_bounds(ball: Vec2, field: &Field) -> Option<Side> {
    if ball.x >= field.right.center.x - WALL_CONTACT {
        Some(Side::Left)
    } else if ball.x <= field.left.center.x + WALL_CONTACT {
        Some(Side::Right)
    } else {
        None
    }
}

/// Outgoing heading for a ball striking the face of `paddle` at height `ball_y`
///
/// The contact point is mapped linearly from the paddle's span onto ±80°,
/// so the further from the centre the ball lands, the steeper it leaves.
pub fn face_angle(paddle: &Paddle, ball_y: f32) -> f32 {
    let mapped = lerp_range(
        -FACE_MAX_ANGLE,
        FACE_MAX_ANGLE,
        paddle.y - FACE_HALF_HEIGHT,
        paddle.y + FACE_HALF_HEIGHT,
        ball_y,
    );
    match paddle.side {
        Side::Left => mapped,
        Side::Right => mirror_horizontal(mapped),
    }
}

/// Run every collision test for this tick, in order, and decay the cooldown
pub fn resolve(state: &mut GameState, dt: f32) {
    if !state.is_bounce_active() && wall_contact(state.ball.pos, &state.field) {
        state.ball.angle = mirror_vertical(state.ball.angle);
        bounce(state, Surface::Wall);
    }

    if let Some(scorer) = out_of_bounds(state.ball.pos, &state.field) {
        award_point(state, scorer);
    }

    // A wall hit this tick has already started the cooldown
    if !state.is_bounce_active() && state.phase != RoundPhase::RoundOver {
        for side in [Side::Right, Side::Left] {
            check_paddle(state, side);
        }
    }

    decay_cooldown(state, dt);
}

fn check_paddle(state: &mut GameState, side: Side) {
    let paddle = *state.paddle(side);
    let pos = state.ball.pos;

    if paddle.face_band().contains(pos) {
        state.ball.angle = face_angle(&paddle, pos.y);
        bounce(state, Surface::Face(side));
    }

    if paddle.edge_band().contains(pos) {
        state.ball.angle = mirror_vertical(state.ball.angle);
        bounce(state, Surface::Edge(side));
    }
}

fn bounce(state: &mut GameState, surface: Surface) {
    log::debug!(
        "Bounce off {:?} at ({:.2}, {:.2}), heading {:.3}",
        surface,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.angle
    );
    state.collided ^= true;
    state.bounce_cooldown = Some(0.0);
    state.events.push(GameEvent::Bounce { surface });
}

/// Give `scorer` a point and end the round
pub fn award_point(state: &mut GameState, scorer: Side) {
    let score = state.scores.award(scorer);
    state.serving = scorer.opponent();
    state.phase = RoundPhase::RoundOver;

    if score >= WIN_SCORE {
        state.game_over = true;
        log::info!("{} player wins the game", scorer.as_str());
        state.events.push(GameEvent::GameWon { winner: scorer });
    } else {
        log::info!(
            "{} player wins the round ({}-{})",
            scorer.as_str(),
            state.scores.left,
            state.scores.right
        );
        state.events.push(GameEvent::RoundWon { winner: scorer });
    }
}

/// Advance the cooldown clock; reflections are re-enabled once it expires
pub fn decay_cooldown(state: &mut GameState, dt: f32) {
    if let Some(elapsed) = state.bounce_cooldown {
        let elapsed = elapsed + dt;
        state.bounce_cooldown = if elapsed >= BOUNCE_COOLDOWN {
            None
        } else {
            Some(elapsed)
        };
    }
}
