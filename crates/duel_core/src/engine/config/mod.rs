//! # Engine Configuration
//!
//! Tunables that a host may change between matches. Fixed physics
//! coefficients live in [`super::physics_constants`].
//!
//! ## Usage
//! ```rust
//! use duel_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let practice = EngineConfig::practice();
//! assert!(config.validate().is_ok());
//! assert!(practice.validate().is_ok());
//! ```

mod field_config;
mod match_config;
mod stamina_config;

pub use field_config::FieldConfig;
pub use match_config::{Difficulty, GameMode, MatchConfig};
pub use stamina_config::StaminaConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub stamina: StaminaConfig,
    #[serde(default, rename = "match")]
    pub match_rules: MatchConfig,
}

impl EngineConfig {
    /// Timed arcade match (default)
    pub fn arcade() -> Self {
        Self::default()
    }

    /// Endless practice session
    pub fn practice() -> Self {
        let mut cfg = Self::default();
        cfg.match_rules.mode = GameMode::Practice;
        cfg
    }

    /// For tests: practice mode with a fixed seed
    pub fn deterministic() -> Self {
        let mut cfg = Self::practice();
        cfg.match_rules.seed = 0;
        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject configurations the simulation cannot keep its invariants under.
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        positive("field.half_width", field.half_width)?;
        positive("field.half_length", field.half_length)?;
        positive("field.goal_half_width", field.goal_half_width)?;
        positive("field.goal_depth", field.goal_depth)?;
        if field.goal_half_width > field.half_width {
            return Err(ConfigError::invalid("field.goal_half_width", "wider than the field"));
        }
        if field.wall_gap_half_width < field.goal_half_width
            || field.wall_gap_half_width > field.half_width
        {
            return Err(ConfigError::invalid(
                "field.wall_gap_half_width",
                "must lie between goal_half_width and half_width",
            ));
        }
        // the goal-line wall and net are built at -half_length
        let line_offset = field.goal_line_z + field.half_length;
        if !line_offset.is_finite() || line_offset.abs() > 1e-3 {
            return Err(ConfigError::invalid("field.goal_line_z", "must equal -half_length"));
        }

        let stamina = &self.stamina;
        positive("stamina.max", stamina.max)?;
        if stamina.max > 100.0 {
            return Err(ConfigError::invalid("stamina.max", "must not exceed 100"));
        }
        positive("stamina.nominal_tick_sec", stamina.nominal_tick_sec)?;
        positive("stamina.drain_per_tick", stamina.drain_per_tick)?;
        positive("stamina.regen_per_tick", stamina.regen_per_tick)?;
        if !(0.0..=stamina.max).contains(&stamina.sprint_floor) {
            return Err(ConfigError::invalid("stamina.sprint_floor", "outside [0, max]"));
        }

        let rules = &self.match_rules;
        positive("match.power_charge_rate", rules.power_charge_rate)?;
        non_negative("match.kick_cooldown_sec", rules.kick_cooldown_sec)?;
        non_negative("match.goal_celebration_sec", rules.goal_celebration_sec)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be non-negative, got {value}")))
    }
}

// ========== Tests ==========
