//! Sprint stamina
//!
//! Sprint engages only above the floor and drops the moment stamina is
//! insufficient; there is no explicit recovery lockout.

use super::config::StaminaConfig;
use super::world::Player;

/// Drain or regenerate stamina for one step and set `sprint_active`.
pub fn update_stamina(player: &mut Player, sprint_requested: bool, dt: f32, cfg: &StaminaConfig) {
    if sprint_requested && player.stamina > cfg.sprint_floor {
        player.sprint_active = true;
        player.stamina -= cfg.drain_rate() * dt;
    } else {
        player.sprint_active = false;
        player.stamina += cfg.regen_rate() * dt;
    }
    player.stamina = player.stamina.clamp(0.0, cfg.max);
}
