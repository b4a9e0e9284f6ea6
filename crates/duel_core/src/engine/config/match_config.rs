//! Match rules and timing

use serde::{Deserialize, Serialize};

/// Timed-match difficulty. Harder matches are shorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Match length in seconds
    pub fn match_length_sec(self) -> f32 {
        match self {
            Difficulty::Easy => 90.0,
            Difficulty::Medium => 60.0,
            Difficulty::Hard => 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Timed(Difficulty),
    /// Never ends
    Practice,
}

impl GameMode {
    /// Match length in seconds, `None` for practice.
    pub fn match_length_sec(self) -> Option<f32> {
        match self {
            GameMode::Timed(difficulty) => Some(difficulty.match_length_sec()),
            GameMode::Practice => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub mode: GameMode,
    /// Lockout after a kick (default: 0.5 s)
    pub kick_cooldown_sec: f32,
    /// Goal latch auto-clears after this long (default: 3 s)
    pub goal_celebration_sec: f32,
    /// Power charge gained per second while held (default: 120)
    pub power_charge_rate: f32,
    /// Seed for the match noise source
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Timed(Difficulty::Medium),
            kick_cooldown_sec: 0.5,
            goal_celebration_sec: 3.0,
            power_charge_rate: 120.0,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_lengths() {
        assert_eq!(GameMode::Timed(Difficulty::Easy).match_length_sec(), Some(90.0));
        assert_eq!(GameMode::Timed(Difficulty::Medium).match_length_sec(), Some(60.0));
        assert_eq!(GameMode::Timed(Difficulty::Hard).match_length_sec(), Some(45.0));
        assert_eq!(GameMode::Practice.match_length_sec(), None);
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&GameMode::Timed(Difficulty::Hard)).unwrap();
        assert_eq!(json, r#"{"timed":"hard"}"#);
        let parsed: GameMode = serde_json::from_str(r#""practice""#).unwrap();
        assert_eq!(parsed, GameMode::Practice);
    }
}
