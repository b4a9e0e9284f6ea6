//! Player locomotion
//!
//! Direct kinematic control: the attacker moves at jog or sprint speed along
//! the intent direction, no inertia. Idle frames keep the last facing.

use super::config::FieldConfig;
use super::coordinates::{add, scale, try_normalize};
use super::intent::Intent;
use super::physics_constants::player::{SPRINT_SPEED, WALK_SPEED};
use super::world::Player;

/// Move the player for one step.
///
/// Must run after [`super::stamina::update_stamina`] so `sprint_active` is
/// current. Records the pre-move position as the dribble anchor.
pub fn update_player_motion(player: &mut Player, intent: &Intent, dt: f32, field: &FieldConfig) {
    player.previous_position = player.position;
    player.speed = if player.sprint_active { SPRINT_SPEED } else { WALK_SPEED };

    match try_normalize(intent.movement()) {
        Some(direction) => {
            player.velocity = scale(direction, player.speed);
            player.position = field.clamp(add(player.position, scale(player.velocity, dt)));
            player.facing = direction;
        }
        None => {
            player.velocity = (0.0, 0.0);
        }
    }
}
