//! Character–ball collision
//!
//! Characters and the ball are spheres of radius 0.5; characters stand on
//! the ground. On overlap the ball is pushed clear and its velocity becomes
//! a blend of a specular bounce and the character's push direction.

use tracing::trace;

use super::coordinates::{add, dot, length, scale, sub, try_normalize, Vec2};
use super::noise::NoiseSource;
use super::physics_constants::{ball as ball_const, collision};
use super::world::Ball;

/// How the colliding character is moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterMotion {
    /// Attacker: unit movement direction (zero when idle) and effective speed
    Player { direction: Vec2, speed: f32 },
    /// AI character pushing back into the ball at a fixed speed
    Opponent { speed: f32 },
}

/// Contact details after a resolved collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactOutcome {
    pub normal: Vec2,
    pub impact_force: f32,
}

/// Center distance at which a character touches the ball.
pub const CONTACT_DISTANCE: f32 = collision::CHARACTER_RADIUS + ball_const::RADIUS;

/// 3D center distance between a grounded character and the ball.
pub fn contact_distance(character: (f32, f32), ball: &Ball) -> f32 {
    let planar = length(sub(ball.position, character));
    (planar * planar + ball.height * ball.height).sqrt()
}

/// Resolve one character against the ball. `None` when they do not touch.
pub fn resolve_contact(
    ball: &mut Ball,
    character: (f32, f32),
    motion: CharacterMotion,
    noise: &mut dyn NoiseSource,
) -> Option<ContactOutcome> {
    if ball.height >= collision::MAX_CONTACT_HEIGHT
        || contact_distance(character, ball) >= CONTACT_DISTANCE
    {
        return None;
    }

    let normal = try_normalize(sub(ball.position, character))
        .or_else(|| try_normalize(scale(ball.velocity, -1.0)))
        .unwrap_or((0.0, 1.0));

    // Planar separation that puts the 3D centers a full contact distance apart
    let clear_planar = (CONTACT_DISTANCE * CONTACT_DISTANCE - ball.height * ball.height)
        .max(0.0)
        .sqrt();
    ball.position = add(character, scale(normal, clear_planar + collision::SEPARATION_EPSILON));

    let (push_dir, push_speed) = match motion {
        CharacterMotion::Player { direction, speed } => (direction, speed),
        CharacterMotion::Opponent { speed } => (scale(normal, -1.0), speed),
    };
    let impact_force = push_speed * dot(push_dir, normal).abs().max(collision::MIN_ALIGNMENT);

    let incoming = ball.velocity;
    let reflection = sub(incoming, scale(normal, 2.0 * dot(incoming, normal)));
    let influence =
        (1.0 - impact_force / collision::REFLECTION_FALLOFF).max(collision::MIN_REFLECTION);
    let blended = add(scale(reflection, influence), scale(push_dir, 1.0 - influence));

    let new_speed = length(incoming) * collision::SPEED_RETENTION + impact_force;
    let direction = try_normalize(blended).unwrap_or(normal);
    ball.velocity = scale(direction, new_speed);

    if ball.vertical_velocity < collision::POP_THRESHOLD {
        ball.vertical_velocity =
            collision::POP_BASE + noise.range(0.0, impact_force * collision::POP_PER_IMPACT);
    }

    trace!(?normal, impact_force, velocity = ?ball.velocity, "ball contact");
    Some(ContactOutcome { normal, impact_force })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::noise::{ScriptedNoise, ZeroNoise};

    const SHOVE: CharacterMotion = CharacterMotion::Opponent { speed: 4.0 };

    fn ball(pos: (f32, f32), vel: (f32, f32)) -> Ball {
        let mut b = Ball::at_kickoff();
        b.position = pos;
        b.velocity = vel;
        b
    }

    #[test]
    fn test_no_contact_when_apart() {
        let mut b = ball((0.0, 1.2), (0.0, 0.0));
        let hit = resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ZeroNoise);
        assert!(hit.is_none());
    }

    #[test]
    fn test_no_contact_when_high() {
        let mut b = ball((0.0, 0.2), (0.0, 0.0));
        b.height = 1.6;
        let hit = resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ZeroNoise);
        assert!(hit.is_none());
    }

    #[test]
    fn test_push_out_clears_overlap() {
        let mut b = ball((0.3, 0.4), (0.0, 0.0));
        b.height = 0.4;
        let motion = CharacterMotion::Opponent { speed: 3.0 };
        resolve_contact(&mut b, (0.0, 0.0), motion, &mut ZeroNoise).unwrap();
        assert!(contact_distance((0.0, 0.0), &b) >= CONTACT_DISTANCE - 1e-4);
    }

    #[test]
    fn test_opponent_impact_and_speed() {
        let mut b = ball((0.0, 0.5), (0.0, -10.0));
        let out = resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ZeroNoise).unwrap();
        assert_eq!(out.normal, (0.0, 1.0));
        assert!((out.impact_force - 4.0).abs() < 1e-5);
        // incoming 10 * 0.8 + impact 4
        assert!((length(b.velocity) - 12.0).abs() < 1e-3);
        assert_eq!(b.vertical_velocity, collision::POP_BASE);
    }

    #[test]
    fn test_player_push_direction_dominates_hard_hit() {
        let mut b = ball((0.0, -0.8), (0.0, 0.0));
        let motion = CharacterMotion::Player { direction: (0.0, -1.0), speed: 12.0 };
        let out = resolve_contact(&mut b, (0.0, 0.0), motion, &mut ZeroNoise).unwrap();
        assert!((out.impact_force - 12.0).abs() < 1e-5);
        assert!(b.velocity.1 < -11.9);
    }

    #[test]
    fn test_idle_player_minimum_alignment() {
        let mut b = ball((0.5, 0.0), (0.0, 0.0));
        let motion = CharacterMotion::Player { direction: (0.0, 0.0), speed: 5.0 };
        let out = resolve_contact(&mut b, (0.0, 0.0), motion, &mut ZeroNoise).unwrap();
        assert!((out.impact_force - 1.5).abs() < 1e-5);
        // zero blend falls back to the contact normal
        assert!((b.velocity.0 - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_high_vertical_velocity_not_overwritten() {
        let mut b = ball((0.0, 0.5), (0.0, 0.0));
        b.vertical_velocity = 3.0;
        resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ZeroNoise).unwrap();
        assert_eq!(b.vertical_velocity, 3.0);
    }

    #[test]
    fn test_pop_up_scales_with_impact() {
        let mut b = ball((0.0, 0.5), (0.0, 0.0));
        resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ScriptedNoise::new(vec![1.0])).unwrap();
        // base 1 plus the top of [0, 4 * 0.5)
        assert!((b.vertical_velocity - 3.0).abs() < 1e-5);

        let mut b = ball((0.0, 0.5), (0.0, 0.0));
        resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ScriptedNoise::new(vec![0.5])).unwrap();
        assert!((b.vertical_velocity - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_center_overlap() {
        let mut b = ball((0.0, 0.0), (0.0, 0.0));
        resolve_contact(&mut b, (0.0, 0.0), SHOVE, &mut ZeroNoise).unwrap();
        assert!(b.position.1 > 0.99);
        assert!(contact_distance((0.0, 0.0), &b) >= CONTACT_DISTANCE - 1e-4);
    }
}
