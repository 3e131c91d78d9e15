//! Score read-out: digit patterns on a 5x3 grid of cubes, plus score colours
//!
//! Each digit is drawn by lighting a subset of 15 cells. Cell `i` lives at
//! column `i % 3`, row `i / 3`, with row 0 at the top.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cells in the score grid
pub const CELL_COUNT: usize = 15;
/// Columns in the score grid
pub const GRID_COLUMNS: usize = 3;

const DIGIT_0: &[u8] = &[0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 13, 14];
const DIGIT_1: &[u8] = &[1, 4, 7, 10, 13];
const DIGIT_2: &[u8] = &[0, 1, 2, 5, 6, 7, 8, 9, 12, 13, 14];
const DIGIT_3: &[u8] = &[0, 1, 2, 5, 6, 7, 8, 11, 12, 13, 14];
const DIGIT_4: &[u8] = &[0, 2, 3, 5, 6, 7, 8, 11, 14];

/// Lit cells for a score of 0..=4
///
/// A game ends the moment a score reaches 5 and scores reset in the same
/// tick, so there is no pattern beyond 4.
pub fn lit_cells(score: u8) -> Option<&'static [u8]> {
    match score {
        0 => Some(DIGIT_0),
        1 => Some(DIGIT_1),
        2 => Some(DIGIT_2),
        3 => Some(DIGIT_3),
        4 => Some(DIGIT_4),
        _ => None,
    }
}

/// Planar offset of a cell from the panel centre, in scene units
pub fn cell_offset(index: u8) -> (f32, f32) {
    let col = (index as usize % GRID_COLUMNS) as f32;
    let row = (index as usize / GRID_COLUMNS) as f32;
    ((col - 1.0) * 2.0, (2.0 - row) * 2.0)
}

/// Where each player's score panel sits in the scene
pub fn panel_anchor(side: crate::sim::Side) -> glam::Vec3 {
    glam::Vec3::new(side.sign() * 34.0, 25.0, 5.0)
}

/// Palette the score digits cycle through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreColor {
    Red,
    Yellow,
    Green,
    Aqua,
    Purple,
    Pink,
}

impl ScoreColor {
    pub const ALL: [ScoreColor; 6] = [
        ScoreColor::Red,
        ScoreColor::Yellow,
        ScoreColor::Green,
        ScoreColor::Aqua,
        ScoreColor::Purple,
        ScoreColor::Pink,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            ScoreColor::Red => "#f56e64",
            ScoreColor::Yellow => "#f7ee94",
            ScoreColor::Green => "#85f578",
            ScoreColor::Aqua => "#7af0e4",
            ScoreColor::Purple => "#bb84f5",
            ScoreColor::Pink => "#ffa3d6",
        }
    }

    /// Linear 0..1 RGB
    pub fn rgb(&self) -> [f32; 3] {
        let packed = match self {
            ScoreColor::Red => 0xf56e64u32,
            ScoreColor::Yellow => 0xf7ee94,
            ScoreColor::Green => 0x85f578,
            ScoreColor::Aqua => 0x7af0e4,
            ScoreColor::Purple => 0xbb84f5,
            ScoreColor::Pink => 0xffa3d6,
        };
        [
            ((packed >> 16) & 0xff) as f32 / 255.0,
            ((packed >> 8) & 0xff) as f32 / 255.0,
            (packed & 0xff) as f32 / 255.0,
        ]
    }

    /// Uniform draw from the palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ScoreColor {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Draw colours until one differs from `exclude`
pub fn pick_color<R: Rng + ?Sized>(rng: &mut R, exclude: ScoreColor) -> ScoreColor {
    loop {
        let color = ScoreColor::random(rng);
        if color != exclude {
            return color;
        }
    }
}

/// Display state for one player's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    /// Score value the panel last showed
    pub shown: u8,
    pub color: ScoreColor,
}

impl ScoreDisplay {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            shown: 0,
            color: ScoreColor::random(rng),
        }
    }

    /// Track `score`; recolour when it changed since the last call
    pub fn refresh<R: Rng + ?Sized>(&mut self, score: u8, rng: &mut R) -> Option<ScoreColor> {
        if score == self.shown {
            return None;
        }
        self.shown = score;
        self.color = pick_color(rng, self.color);
        Some(self.color)
    }

    pub fn cells(&self) -> &'static [u8] {
        lit_cells(self.shown).unwrap_or(&[])
    }
}
