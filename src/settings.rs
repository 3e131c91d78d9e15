//! Game settings and preferences
//!
//! Stored as JSON next to the binary. A missing or broken file never stops
//! the game; it falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Difficulty presets. Each divides the raw frame time (ms) into effective
/// simulation seconds, so a smaller divisor plays faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Milliseconds of frame time per effective simulation second
    pub fn divisor(&self) -> f32 {
        match self {
            Difficulty::Easy => 1000.0,
            Difficulty::Medium => 500.0,
            Difficulty::Hard => 200.0,
        }
    }

    /// Effective dt for a frame that took `elapsed_ms`
    pub fn scale(&self, elapsed_ms: f32) -> f32 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0.0;
        }
        elapsed_ms / self.divisor()
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Fixed RNG seed for reproducible sessions; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log every game event at info level
    #[serde(default)]
    pub log_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
            log_events: false,
        }
    }
}

impl Settings {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_divisors() {
        assert_eq!(Difficulty::Easy.divisor(), 1000.0);
        assert_eq!(Difficulty::Medium.divisor(), 500.0);
        assert_eq!(Difficulty::Hard.divisor(), 200.0);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_harder_is_faster() {
        let frame = 16.0;
        assert!(Difficulty::Hard.scale(frame) > Difficulty::Medium.scale(frame));
        assert!(Difficulty::Medium.scale(frame) > Difficulty::Easy.scale(frame));
    }

    #[test]
    fn test_with_difficulty_keeps_other_defaults() {
        let settings = Settings::with_difficulty(Difficulty::Hard);
        let defaults = Settings::default();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, defaults.seed);
        assert_eq!(settings.log_events, defaults.log_events);
    }

    #[test]
    fn test_bad_elapsed_is_zero() {
        assert_eq!(Difficulty::Medium.scale(-3.0), 0.0);
        assert_eq!(Difficulty::Medium.scale(f32::NAN), 0.0);
        assert_eq!(Difficulty::Medium.scale(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("insane"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"Hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, None);
        assert!(!settings.log_events);
    }
}
