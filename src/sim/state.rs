//! Game state and core simulation types
//!
//! Everything a round needs lives in one owned [`GameState`]; the host only
//! ever sees it through [`Snapshot`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{Band, Field};
use super::kinematics;
use crate::consts::*;
use crate::scoreboard::{ScoreColor, ScoreDisplay};

/// Which player a paddle, score or serve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// -1 for the left half of the field, +1 for the right
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Direction of a discrete paddle move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    fn delta(self) -> f32 {
        match self {
            MoveDirection::Up => PADDLE_STEP,
            MoveDirection::Down => -PADDLE_STEP,
        }
    }
}

/// Where in the round cycle the game is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball parked at the serving paddle, waiting for a launch request
    Idle,
    /// Ball in flight
    InPlay,
    /// A point was just scored; reset happens before the tick returns
    RoundOver,
}

/// Surface the ball reflected off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// Upper or lower wall
    Wall,
    /// Paddle face (angle depends on contact point)
    Face(Side),
    /// Paddle thin edge (mirror reflection)
    Edge(Side),
}

/// Things the host may want to react to (sound cues, HUD flashes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { angle: f32 },
    Bounce { surface: Surface },
    /// A point was scored without ending the game
    RoundWon { winner: Side },
    /// A point was scored that reached the winning score
    GameWon { winner: Side },
    ScoreColorChanged { side: Side, color: ScoreColor },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Heading in radians, 0 = towards +x
    pub angle: f32,
    /// Scalar speed; zero while parked
    pub speed: f32,
}

impl Ball {
    /// Ball parked next to the paddle on `side`
    pub fn spawn(side: Side) -> Self {
        Self {
            pos: Vec2::new(side.sign() * BALL_SPAWN_X, BALL_SPAWN_Y),
            angle: 0.0,
            speed: 0.0,
        }
    }

    /// Give the parked ball a heading away from `server` and the launch speed
    pub fn launch<R: Rng + ?Sized>(&mut self, server: Side, rng: &mut R) {
        let cone = kinematics::launch_angle(rng);
        self.angle = match server {
            Side::Left => cone,
            Side::Right => kinematics::mirror_horizontal(cone),
        };
        self.speed = LAUNCH_SPEED;
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += kinematics::displacement(self.speed, self.angle, dt);
    }

    pub fn velocity(&self) -> Vec2 {
        crate::velocity_from_angle(self.speed, self.angle)
    }
}

/// A player's paddle. Moves along y only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    /// Current (rendered) position
    pub y: f32,
    /// Position the paddle is easing towards
    pub target_y: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            x: side.sign() * PADDLE_X,
            y: PADDLE_DEFAULT_Y,
            target_y: PADDLE_DEFAULT_Y,
        }
    }

    /// Shift the target one step, unless that would leave the allowed range
    ///
    /// Returns whether the target moved.
    pub fn request_move(&mut self, direction: MoveDirection, field: &Field) -> bool {
        let next = self.target_y + direction.delta();
        if next < field.paddle_min() || next > field.paddle_max() {
            return false;
        }
        self.target_y = next;
        true
    }

    /// Step this tick's easing would apply, without applying it
    pub fn easing_step(&self) -> f32 {
        if self.y == self.target_y {
            0.0
        } else {
            (self.target_y - self.y) * PADDLE_EASING
        }
    }

    /// Ease towards the target; returns the step taken
    pub fn ease(&mut self) -> f32 {
        let step = self.easing_step();
        self.y += step;
        step
    }

    /// Zone in front of the paddle face (towards the field centre)
    pub fn face_band(&self) -> Band {
        let (x_min, x_max) = match self.side {
            Side::Left => (self.x + FACE_BAND_NEAR, self.x + FACE_BAND_FAR),
            Side::Right => (self.x - FACE_BAND_FAR, self.x - FACE_BAND_NEAR),
        };
        Band::new(x_min, x_max, self.y, FACE_HALF_HEIGHT)
    }

    /// Zone at the paddle's own depth, hit on its thin ends
    pub fn edge_band(&self) -> Band {
        Band::new(
            self.x - EDGE_BAND_HALF_WIDTH,
            self.x + EDGE_BAND_HALF_WIDTH,
            self.y,
            EDGE_HALF_HEIGHT,
        )
    }
}

/// Points for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u8,
    pub right: u8,
}

impl Scores {
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point for `side`, returning the new value
    pub fn award(&mut self, side: Side) -> u8 {
        let score = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *score += 1;
        *score
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub scores: Scores,
    pub phase: RoundPhase,
    /// Set when a score reaches [`WIN_SCORE`]; cleared by the round reset
    pub game_over: bool,
    /// Cosmetic flag flipped on every reflection (ball material swap)
    pub collided: bool,
    /// Simulated time since the last reflection, while reflections are suppressed
    pub bounce_cooldown: Option<f32>,
    /// Paddle that loses the point serves the next round
    pub serving: Side,
    pub left_display: ScoreDisplay,
    pub right_display: ScoreDisplay,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game, left paddle serving. Draws the initial score colours.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let serving = Side::Left;
        Self {
            field: Field::STANDARD,
            ball: Ball::spawn(serving),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            scores: Scores::default(),
            phase: RoundPhase::Idle,
            game_over: false,
            collided: false,
            bounce_cooldown: None,
            serving,
            left_display: ScoreDisplay::new(rng),
            right_display: ScoreDisplay::new(rng),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn display(&self, side: Side) -> &ScoreDisplay {
        match side {
            Side::Left => &self.left_display,
            Side::Right => &self.right_display,
        }
    }

    pub fn is_bounce_active(&self) -> bool {
        self.bounce_cooldown.is_some()
    }

    /// Move a paddle's target one step; silently ignored at the limits
    pub fn request_paddle_move(&mut self, side: Side, direction: MoveDirection) -> bool {
        let field = self.field;
        self.paddle_mut(side).request_move(direction, &field)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.pos,
            ball_angle: self.ball.angle,
            ball_speed: self.ball.speed,
            left_paddle_y: self.left.y,
            right_paddle_y: self.right.y,
            scores: self.scores,
            left_color: self.left_display.color,
            right_color: self.right_display.color,
            phase: self.phase,
            game_over: self.game_over,
            collided: self.collided,
            serving: self.serving,
        }
    }
}

/// Read-only view handed to rendering and audio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Vec2,
    pub ball_angle: f32,
    pub ball_speed: f32,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub scores: Scores,
    pub left_color: ScoreColor,
    pub right_color: ScoreColor,
    pub phase: RoundPhase,
    pub game_over: bool,
    pub collided: bool,
    pub serving: Side,
}
