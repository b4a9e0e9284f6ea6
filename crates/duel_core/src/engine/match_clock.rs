//! Match clock and run state
//!
//! Time comes only from the step's Δt (accumulated in `World::elapsed`), so
//! a paused or single-stepped driver stays deterministic.

use super::config::GameMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchClock {
    mode: GameMode,
    paused: bool,
    game_over: bool,
}

impl MatchClock {
    pub fn new(mode: GameMode) -> Self {
        Self { mode, paused: false, game_over: false }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The step is skipped entirely while this is true.
    pub fn is_halted(&self) -> bool {
        self.paused || self.game_over
    }

    /// Seconds left, `None` in practice mode.
    pub fn remaining(&self, elapsed: f32) -> Option<f32> {
        self.mode.match_length_sec().map(|length| (length - elapsed).max(0.0))
    }

    /// Mark full time once the match length is reached. Returns `true` only
    /// on the step that ends the match.
    pub fn check_full_time(&mut self, elapsed: f32) -> bool {
        if self.game_over {
            return false;
        }
        match self.mode.match_length_sec() {
            Some(length) if elapsed >= length => {
                self.game_over = true;
                true
            }
            _ => false,
        }
    }
}
