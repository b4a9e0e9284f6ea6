//! Field boundary reflection
//!
//! Stylized arcade walls: hard impacts come back livelier than they went in,
//! pop the ball up and pick up a little sideways kick. Corners are livelier
//! still. Order is fixed: side walls, back walls, corner bonus.

use super::collision::{contact_distance, CONTACT_DISTANCE};
use super::config::FieldConfig;
use super::coordinates::FieldPos;
use super::noise::NoiseSource;
use super::physics_constants::{collision, wall};
use super::world::Ball;

/// Which walls the ball hit this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    pub side: bool,
    pub back: bool,
    pub corner: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.back
    }
}

/// Reflect a velocity component off a wall. Returns (new component, lift,
/// orthogonal deflection).
fn reflect_component(component: f32, noise: &mut dyn NoiseSource) -> (f32, f32, f32) {
    let impact = component.abs();
    let mut reflected = -component * wall::DAMPING;
    if impact > wall::LIVELY_THRESHOLD {
        reflected *= wall::ELASTICITY;
        let lift = (impact * wall::LIFT_PER_SPEED).min(wall::MAX_LIFT);
        (reflected, lift, noise.symmetric(wall::DEFLECTION))
    } else {
        (reflected, 0.0, 0.0)
    }
}

pub fn reflect_off_walls(
    ball: &mut Ball,
    field: &FieldConfig,
    noise: &mut dyn NoiseSource,
) -> WallContact {
    let mut contact = WallContact::default();

    // Side walls
    if ball.position.0.abs() > field.half_width {
        let (vx, lift, deflection) = reflect_component(ball.velocity.0, noise);
        ball.velocity.0 = vx;
        ball.velocity.1 += deflection;
        ball.vertical_velocity += lift;
        ball.position.0 = ball.position.0.clamp(-field.half_width, field.half_width);
        contact.side = true;
    }

    // Back walls; the goal-line wall has a gap for the goal mouth, which is
    // closed off by the net behind it.
    let (x, z) = ball.position;
    let far_wall = z > field.half_length;
    let goal_wall = z < -field.half_length && x.abs() > field.wall_gap_half_width;
    let net = z < field.net_z() && x.abs() <= field.wall_gap_half_width;
    if far_wall || goal_wall || net {
        let (vz, lift, deflection) = reflect_component(ball.velocity.1, noise);
        ball.velocity.1 = vz;
        ball.velocity.0 += deflection;
        ball.vertical_velocity += lift;
        ball.position.1 = if net {
            field.net_z()
        } else {
            ball.position.1.clamp(-field.half_length, field.half_length)
        };
        contact.back = true;
    }

    // Corner bonus
    let (x, z) = ball.position;
    if contact.any()
        && x.abs() > field.half_width * wall::CORNER_ZONE
        && z.abs() > field.half_length * wall::CORNER_ZONE
    {
        ball.velocity.0 *= wall::CORNER_MULTIPLIER;
        ball.velocity.1 *= wall::CORNER_MULTIPLIER;
        ball.vertical_velocity += wall::CORNER_LIFT;
        contact.corner = true;
    }

    contact
}

/// Pull the ball back inside the walls (and net) without touching its
/// velocity.
pub fn contain(ball: &mut Ball, field: &FieldConfig) {
    let x = ball.position.0.clamp(-field.half_width, field.half_width);
    ball.position = (x, ball.position.1.clamp(back_limit(x, field), field.half_length));
}

/// Contain the ball after a contact with the character at `character`.
///
/// A character standing against a wall can push the ball through it, and
/// clamping alone would drop the ball back inside the character. The ball
/// is clamped and then slid along the wall it was pinned to until it is a
/// full contact distance from the character again.
pub fn contain_clear_of(ball: &mut Ball, field: &FieldConfig, character: FieldPos) {
    let before = ball.position;
    contain(ball, field);
    if contact_distance(character, ball) >= CONTACT_DISTANCE {
        return;
    }

    let planar = (CONTACT_DISTANCE * CONTACT_DISTANCE - ball.height * ball.height).max(0.0);
    let needed = planar.sqrt() + collision::SEPARATION_EPSILON;
    let (x, z) = ball.position;
    if x != before.0 {
        let gap = x - character.0;
        ball.position.1 =
            slide_clear(z, character.1, gap, needed, back_limit(x, field), field.half_length);
    } else if z != before.1 {
        let limit = if z < -field.half_length {
            field.wall_gap_half_width
        } else {
            field.half_width
        };
        let gap = z - character.1;
        ball.position.0 = slide_clear(x, character.0, gap, needed, -limit, limit);
    }
}

/// Lowest z the ball may reach at lateral position `x`.
fn back_limit(x: f32, field: &FieldConfig) -> f32 {
    if x.abs() <= field.wall_gap_half_width {
        field.net_z()
    } else {
        -field.half_length
    }
}

/// Position along a wall, `needed` away from `center` given a fixed
/// perpendicular `gap`. Keeps the ball on its current side of the character
/// unless that side runs out of wall.
fn slide_clear(along: f32, center: f32, gap: f32, needed: f32, min: f32, max: f32) -> f32 {
    let offset = (needed * needed - gap * gap).max(0.0).sqrt();
    let side = if along < center { -1.0 } else { 1.0 };
    let preferred = center + side * offset;
    if (min..=max).contains(&preferred) {
        preferred
    } else {
        (center - side * offset).clamp(min, max)
    }
}
