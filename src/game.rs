//! Host-facing game facade
//!
//! The rendering/input layer owns one [`Pong`] and calls [`Pong::tick`] once
//! per frame with the frame's wall time. Key bindings map onto
//! [`Pong::request_launch`] and [`Pong::request_paddle_move`].
//!
//! Events are kept for one tick: hosts that never call
//! [`Pong::drain_events`] only ever hold the latest tick's events.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::{Difficulty, Settings};
use crate::sim::{self, GameEvent, GameState, MoveDirection, Side, Snapshot};

/// A running game plus the random source it draws from
pub struct Pong<R: Rng = Pcg32> {
    state: GameState,
    settings: Settings,
    rng: R,
    /// Events already queued when the previous tick finished
    stale_events: usize,
}

impl Pong<Pcg32> {
    /// Seeded from `settings.seed`, or from the OS when no seed is set
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Game initialized with seed {} ({})",
            seed,
            settings.difficulty.as_str()
        );
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Pong<R> {
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        Self {
            state: GameState::new(&mut rng),
            settings,
            rng,
            stale_events: 0,
        }
    }

    /// Advance by one rendered frame that took `elapsed_ms` of wall time
    pub fn tick(&mut self, elapsed_ms: f32) {
        let dt = self.settings.difficulty.scale(elapsed_ms);
        // Drop what the previous tick raised; keep requests made since then
        let stale = self.stale_events.min(self.state.events.len());
        self.state.events.drain(..stale);

        let first_new = self.state.events.len();
        sim::tick(&mut self.state, dt, &mut self.rng);
        self.stale_events = self.state.events.len();

        if self.settings.log_events {
            for event in &self.state.events[first_new..] {
                log::info!("tick {}: {:?}", self.state.time_ticks, event);
            }
        }
    }

    /// Start the round if the ball is parked; ignored otherwise
    pub fn request_launch(&mut self) -> bool {
        sim::request_launch(&mut self.state, &mut self.rng)
    }

    pub fn request_paddle_move(&mut self, side: Side, direction: MoveDirection) -> bool {
        self.state.request_paddle_move(side, direction)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.settings.difficulty {
            log::info!("Difficulty set to {}", difficulty.as_str());
        }
        self.settings.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.stale_events = 0;
        std::mem::take(&mut self.state.events)
    }
}
