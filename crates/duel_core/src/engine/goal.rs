//! Goal detection
//!
//! Edge-triggered: a crossing scores once, then the latch holds until the
//! celebration countdown (or the host) clears it.

use super::config::FieldConfig;
use super::physics_constants::goal::CROSSBAR_HEIGHT;
use super::world::{Ball, World};

/// Whether the ball is over the goal line, between the posts, under the bar.
pub fn is_goal_crossing(ball: &Ball, field: &FieldConfig) -> bool {
    ball.position.1 < field.goal_line_z
        && ball.position.0.abs() < field.goal_half_width
        && ball.height < CROSSBAR_HEIGHT
}

/// Score a goal if the ball crossed and the latch is clear.
///
/// On a goal the score increments, the latch is set, and the ball goes back
/// to the kickoff spot at rest. Returns the new score.
pub fn check_goal(world: &mut World) -> Option<u32> {
    if world.goal_latch || !is_goal_crossing(&world.ball, &world.field) {
        return None;
    }
    world.score += 1;
    world.goal_latch = true;
    world.ball.reset_to_kickoff();
    Some(world.score)
}

/// Advance the celebration countdown; clears the latch when it runs out.
/// Returns `true` on the tick the latch is cleared.
pub fn tick_celebration(world: &mut World, dt: f32) -> bool {
    if world.goal_celebration.tick(dt) {
        world.goal_latch = false;
        true
    } else {
        false
    }
}
