//! Simulation tick
//!
//! Core game loop. Order within a tick is fixed so that replays with the
//! same inputs and seed are identical:
//! paddles → idle ball trailing → ball motion → collisions → round reset → score read-out.

use rand::Rng;

use super::bounds::Field;
use super::collision;
use super::state::{Ball, GameEvent, GameState, Paddle, RoundPhase, Side};
use crate::consts::{BOUNCE_COOLDOWN, WIN_SCORE};

/// Advance the game by `dt` effective seconds
///
/// While idle the ball moves by exactly the serving paddle's own easing step
/// (×1, in world units). A renderer that scales the paddle model ×3 sees the
/// same motion, so no ×3 factor appears here.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, dt: f32, rng: &mut R) {
    state.time_ticks += 1;

    // The parked ball copies the serving paddle's step so it stays on its face
    let trail = state.paddle(state.serving).easing_step();
    state.left.ease();
    state.right.ease();
    if state.phase == RoundPhase::Idle {
        state.ball.pos.y += trail;
    }

    state.ball.advance(dt);

    collision::resolve(state, dt);

    debug_assert!(
        state.scores.left < WIN_SCORE || state.game_over,
        "left score {} without game over",
        state.scores.left
    );
    debug_assert!(
        state.scores.right < WIN_SCORE || state.game_over,
        "right score {} without game over",
        state.scores.right
    );

    debug_assert!(
        state.bounce_cooldown.is_none_or(|t| t < BOUNCE_COOLDOWN),
        "bounce cooldown outlived its window"
    );

    if state.phase == RoundPhase::RoundOver {
        reset_round(state);
    }

    refresh_scoreboard(state, rng);
}

/// Serve the parked ball. No-op unless the round is idle.
pub fn request_launch<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> bool {
    if state.phase != RoundPhase::Idle {
        return false;
    }
    state.ball.launch(state.serving, rng);
    state.phase = RoundPhase::InPlay;
    log::info!(
        "{} player serves, heading {:.3}",
        state.serving.as_str(),
        state.ball.angle
    );
    state.events.push(GameEvent::Launched {
        angle: state.ball.angle,
    });
    true
}

/// Put paddles and ball back in their starting places after a point
///
/// Clears the scores too if the point ended the game.
pub fn reset_round(state: &mut GameState) {
    state.phase = RoundPhase::Idle;
    if state.game_over {
        state.scores.clear();
        state.game_over = false;
        log::info!("New game");
    }

    state.left = Paddle::new(Side::Left);
    state.right = Paddle::new(Side::Right);
    state.field = Field::STANDARD;
    state.ball = Ball::spawn(state.serving);
}

fn refresh_scoreboard<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    for side in [Side::Left, Side::Right] {
        let score = state.scores.get(side);
        let display = match side {
            Side::Left => &mut state.left_display,
            Side::Right => &mut state.right_display,
        };
        if let Some(color) = display.refresh(score, rng) {
            state
                .events
                .push(GameEvent::ScoreColorChanged { side, color });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{MoveDirection, Surface};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

    const DT: f32 = 16.0 / 500.0;

    fn new_state(seed: u64) -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        (state, rng)
    }

    #[test]
    fn test_tick_idle_to_in_play() {
        let (mut state, mut rng) = new_state(12345);

        // Tick without launch - should stay idle and parked
        tick(&mut state, DT, &mut rng);
        assert_eq!(state.phase, RoundPhase::Idle);
        assert_eq!(state.ball.pos, Vec2::new(-25.5, 10.0));

        assert!(request_launch(&mut state, &mut rng));
        assert_eq!(state.phase, RoundPhase::InPlay);
        assert_eq!(state.ball.speed, LAUNCH_SPEED);
        assert!((-FRAC_PI_3..=FRAC_PI_3).contains(&state.ball.angle));

        let x_before = state.ball.pos.x;
        tick(&mut state, DT, &mut rng);
        assert!(state.ball.pos.x > x_before);
    }

    #[test]
    fn test_launch_while_in_play_is_noop() {
        let (mut state, mut rng) = new_state(5);
        request_launch(&mut state, &mut rng);
        let (angle, speed) = (state.ball.angle, state.ball.speed);

        assert!(!request_launch(&mut state, &mut rng));
        assert_eq!(state.ball.angle, angle);
        assert_eq!(state.ball.speed, speed);
    }

    #[test]
    fn test_top_wall_bounce_in_tick() {
        let (mut state, mut rng) = new_state(8);
        state.phase = RoundPhase::InPlay;
        state.ball.pos = Vec2::new(0.0, state.field.top() - 0.5);
        state.ball.angle = FRAC_PI_4;
        state.ball.speed = LAUNCH_SPEED;

        tick(&mut state, DT, &mut rng);

        assert_eq!(state.ball.angle, -FRAC_PI_4);
        assert!(state.is_bounce_active());
        assert!(state.events.contains(&GameEvent::Bounce {
            surface: Surface::Wall
        }));
    }

    #[test]
    fn test_idle_ball_follows_serving_paddle() {
        let (mut state, mut rng) = new_state(9);
        for _ in 0..10 {
            state.request_paddle_move(Side::Left, MoveDirection::Up);
        }
        // Right paddle moves too but must not drag the ball
        for _ in 0..6 {
            state.request_paddle_move(Side::Right, MoveDirection::Down);
        }

        for _ in 0..200 {
            tick(&mut state, DT, &mut rng);
            assert!((state.ball.pos.y - state.left.y).abs() < 1e-4);
        }
        assert!(state.left.y > PADDLE_DEFAULT_Y);
        assert_eq!(state.ball.pos.x, -BALL_SPAWN_X);
    }

    #[test]
    fn test_idle_ball_follows_right_server() {
        let (mut state, mut rng) = new_state(13);
        request_launch(&mut state, &mut rng);
        state.ball.pos = Vec2::new(34.9, 10.0);
        state.ball.angle = 0.0;
        tick(&mut state, DT, &mut rng);
        assert_eq!(state.serving, Side::Right);
        assert_eq!(state.phase, RoundPhase::Idle);

        for _ in 0..8 {
            state.request_paddle_move(Side::Right, MoveDirection::Down);
        }
        // Left paddle moves the other way and must not drag the ball
        for _ in 0..8 {
            state.request_paddle_move(Side::Left, MoveDirection::Up);
        }

        for _ in 0..200 {
            tick(&mut state, DT, &mut rng);
            assert!((state.ball.pos.y - state.right.y).abs() < 1e-4);
        }
        assert!(state.right.y < PADDLE_DEFAULT_Y);
        assert!(state.left.y > PADDLE_DEFAULT_Y);
        assert_eq!(state.ball.pos.x, BALL_SPAWN_X);
    }

    #[test]
    fn test_point_resets_round() {
        let (mut state, mut rng) = new_state(10);
        request_launch(&mut state, &mut rng);
        state.left.y = 3.0;
        state.left.target_y = 0.0;
        state.ball.pos = Vec2::new(34.9, 12.0);
        state.ball.angle = 0.0;

        tick(&mut state, DT, &mut rng);

        assert_eq!(state.scores.left, 1);
        assert_eq!(state.phase, RoundPhase::Idle);
        assert_eq!(state.serving, Side::Right);
        assert_eq!(state.ball.pos, Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y));
        assert_eq!(state.ball.speed, 0.0);
        assert_eq!(state.left.y, PADDLE_DEFAULT_Y);
        assert_eq!(state.left.target_y, PADDLE_DEFAULT_Y);
        assert_eq!(state.right.y, PADDLE_DEFAULT_Y);
        assert!(state.events.contains(&GameEvent::RoundWon { winner: Side::Left }));
    }

    #[test]
    fn test_game_over_clears_scores() {
        let (mut state, mut rng) = new_state(11);
        request_launch(&mut state, &mut rng);
        state.scores.right = 4;
        state.scores.left = 2;
        state.ball.pos = Vec2::new(-34.9, 10.0);
        state.ball.angle = std::f32::consts::PI;

        tick(&mut state, DT, &mut rng);

        assert!(state.events.contains(&GameEvent::GameWon {
            winner: Side::Right
        }));
        assert!(!state.game_over);
        assert_eq!(state.scores.left, 0);
        assert_eq!(state.scores.right, 0);
        assert_eq!(state.serving, Side::Left);
        assert_eq!(state.ball.pos, Vec2::new(-BALL_SPAWN_X, BALL_SPAWN_Y));
    }

    #[test]
    fn test_score_change_recolours_panel() {
        let (mut state, mut rng) = new_state(12);
        let before = state.left_display.color;
        request_launch(&mut state, &mut rng);
        state.ball.pos = Vec2::new(34.9, 10.0);
        state.ball.angle = 0.0;

        tick(&mut state, DT, &mut rng);

        assert_eq!(state.left_display.shown, 1);
        assert_ne!(state.left_display.color, before);
        assert!(state.events.contains(&GameEvent::ScoreColorChanged {
            side: Side::Left,
            color: state.left_display.color,
        }));
        // Right score unchanged, right colour untouched
        assert_eq!(state.right_display.shown, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let (mut a, mut rng_a) = new_state(99999);
        let (mut b, mut rng_b) = new_state(99999);

        for state in [&mut a, &mut b] {
            state.request_paddle_move(Side::Left, MoveDirection::Down);
        }
        request_launch(&mut a, &mut rng_a);
        request_launch(&mut b, &mut rng_b);
        for _ in 0..2000 {
            tick(&mut a, DT, &mut rng_a);
            tick(&mut b, DT, &mut rng_b);
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.events, b.events);
    }

    proptest! {
        #[test]
        fn prop_paddle_targets_stay_in_range(moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..300)) {
            let (mut state, mut rng) = new_state(3);
            let field = state.field;
            for (left, up) in moves {
                let side = if left { Side::Left } else { Side::Right };
                let dir = if up { MoveDirection::Up } else { MoveDirection::Down };
                state.request_paddle_move(side, dir);
                tick(&mut state, DT, &mut rng);
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.target_y >= field.paddle_min());
                    prop_assert!(paddle.target_y <= field.paddle_max());
                }
            }
        }

        #[test]
        fn prop_left_serve_within_cone(seed in any::<u64>()) {
            let (mut state, mut rng) = new_state(seed);
            prop_assert!(request_launch(&mut state, &mut rng));
            prop_assert!((-FRAC_PI_3..=FRAC_PI_3).contains(&state.ball.angle));
        }
    }
}
