//! Stamina Configuration

use serde::{Deserialize, Serialize};

/// Sprint stamina parameters.
///
/// Rates are expressed per nominal frame and scaled by `dt / nominal_tick_sec`
/// so a 30 fps driver drains exactly as fast as a 60 fps one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// Upper bound of the stat (default: 100)
    pub max: f32,
    /// Sprint only engages above this value (default: 10)
    pub sprint_floor: f32,
    /// Drain per nominal tick while sprinting (default: 0.5)
    pub drain_per_tick: f32,
    /// Regeneration per nominal tick otherwise (default: 0.2)
    pub regen_per_tick: f32,
    /// Nominal tick length (default: 1/60 s)
    pub nominal_tick_sec: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max: 100.0,
            sprint_floor: 10.0,
            drain_per_tick: 0.5,
            regen_per_tick: 0.2,
            nominal_tick_sec: 1.0 / 60.0,
        }
    }
}

impl StaminaConfig {
    /// Drain per second
    pub fn drain_rate(&self) -> f32 {
        self.drain_per_tick / self.nominal_tick_sec
    }

    /// Regeneration per second
    pub fn regen_rate(&self) -> f32 {
        self.regen_per_tick / self.nominal_tick_sec
    }
}
