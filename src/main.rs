//! Garden Pong headless driver
//!
//! Runs a self-playing session at a fixed 60 Hz frame time and prints the
//! final snapshot as JSON. The 3D scene host links the library directly.
//!
//! Usage: garden-pong [settings.json] [frames]

use garden_pong::sim::{GameEvent, MoveDirection, RoundPhase, Side, Snapshot};
use garden_pong::{Pong, Settings};

const FRAME_MS: f32 = 1000.0 / 60.0;
const DEFAULT_FRAMES: u32 = 60 * 60 * 5;

fn main() {
    env_logger::init();
    log::info!("Garden Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| "garden-pong.json".to_string());
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load_or_default(&settings_path);
    let mut pong = Pong::new(settings);

    let mut games = 0u32;
    for _ in 0..frames {
        autopilot(&mut pong);
        pong.tick(FRAME_MS);

        for event in pong.drain_events() {
            if let GameEvent::GameWon { winner } = event {
                games += 1;
                log::info!("Game {} won by {}", games, winner.as_str());
            }
        }
    }

    log::info!("Played {} frames, {} games finished", frames, games);
    match serde_json::to_string_pretty(&pong.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

/// Serve whenever the ball is parked; each paddle chases the ball while it
/// heads its way and recentres otherwise.
fn autopilot(pong: &mut Pong) {
    let snap = pong.snapshot();
    if snap.phase == RoundPhase::Idle {
        pong.request_launch();
        return;
    }

    for side in [Side::Left, Side::Right] {
        let paddle = pong.state().paddle(side);
        let goal = if heading_towards(&snap, side) {
            snap.ball.y
        } else {
            garden_pong::consts::PADDLE_DEFAULT_Y
        };
        let error = goal - paddle.target_y;
        if error > 1.0 {
            pong.request_paddle_move(side, MoveDirection::Up);
        } else if error < -1.0 {
            pong.request_paddle_move(side, MoveDirection::Down);
        }
    }
}

fn heading_towards(snap: &Snapshot, side: Side) -> bool {
    let vx = snap.ball_angle.cos();
    match side {
        Side::Left => vx < 0.0,
        Side::Right => vx > 0.0,
    }
}
