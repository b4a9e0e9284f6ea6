//! Defender steering
//!
//! Priority-ordered target selection:
//! 1. chase a loose ball the attacker just touched in our half
//! 2. shadow a deep ball from goal side
//! 3. cut between a nearby attacker and the ball
//! 4. hold a loose shadow around midfield

use crate::engine::config::FieldConfig;
use crate::engine::coordinates::{add, distance, facing_radians, length, scale, sub, FieldPos};
use crate::engine::physics_constants::defender::*;
use crate::engine::world::{Ball, Opponent, Player, Toucher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenderMode {
    Chase,
    DeepShadow,
    Intercept,
    LooseShadow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenderPlan {
    pub mode: DefenderMode,
    pub target: FieldPos,
    pub speed: f32,
}

pub fn defender_plan(defender: &Opponent, player: &Player, ball: &Ball) -> DefenderPlan {
    let (bx, bz) = ball.position;

    let (mode, target, speed) = if ball.last_toucher == Toucher::Player
        && distance(defender.position, ball.position) < CHASE_RADIUS
        && bz < 0.0
    {
        (DefenderMode::Chase, ball.position, CHASE_SPEED)
    } else if bz < DEEP_BALL_Z {
        let z = (bz + DEEP_SHADOW_Z_OFFSET).max(DEEP_SHADOW_MIN_Z);
        (DefenderMode::DeepShadow, (bx * DEEP_SHADOW_X_SCALE, z), BASE_SPEED)
    } else if distance(defender.position, player.position) < INTERCEPT_RADIUS
        && player.position.1 < 0.0
    {
        let midpoint = scale(add(player.position, ball.position), 0.5);
        (DefenderMode::Intercept, midpoint, BASE_SPEED)
    } else {
        let z = bz.clamp(-LOOSE_SHADOW_Z_BAND, LOOSE_SHADOW_Z_BAND);
        (DefenderMode::LooseShadow, (bx * LOOSE_SHADOW_X_SCALE, z), BASE_SPEED)
    };

    DefenderPlan { mode, target: (target.0, target.1.min(MAX_TARGET_Z)), speed }
}

/// Move toward the plan target without overshooting it.
pub fn steer_defender(defender: &mut Opponent, plan: &DefenderPlan, dt: f32, field: &FieldConfig) {
    let to_target = sub(plan.target, defender.position);
    let dist = length(to_target);
    if dist > 0.0 {
        let step = (plan.speed * dt).min(dist);
        defender.position = add(defender.position, scale(to_target, step / dist));
    }

    let clamped = field.clamp(defender.position);
    defender.position = (clamped.0, clamped.1.max(MIN_Z));

    if dist > FACING_THRESHOLD {
        defender.facing = facing_radians(to_target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(ball_pos: (f32, f32), toucher: Toucher) -> (Opponent, Player, Ball) {
        let defender = Opponent::new(START);
        let player = Player::new(100.0);
        let mut ball = Ball::at_kickoff();
        ball.position = ball_pos;
        ball.last_toucher = toucher;
        (defender, player, ball)
    }

    #[test]
    fn test_chases_player_touched_ball() {
        let (d, p, b) = setup((3.0, -2.0), Toucher::Player);
        let plan = defender_plan(&d, &p, &b);
        assert_eq!(plan.mode, DefenderMode::Chase);
        assert_eq!(plan.target, (3.0, -2.0));
        assert_eq!(plan.speed, CHASE_SPEED);
    }

    #[test]
    fn test_deep_ball_shadow() {
        let (d, p, b) = setup((10.0, -14.0), Toucher::Goalkeeper);
        let plan = defender_plan(&d, &p, &b);
        assert_eq!(plan.mode, DefenderMode::DeepShadow);
        assert!((plan.target.0 - 7.0).abs() < 1e-5);
        assert_eq!(plan.target.1, -10.0);
    }

    #[test]
    fn test_intercepts_nearby_attacker() {
        let (d, mut p, b) = setup((2.0, -2.0), Toucher::None);
        p.position = (4.0, -1.0);
        let plan = defender_plan(&d, &p, &b);
        assert_eq!(plan.mode, DefenderMode::Intercept);
        assert_eq!(plan.target, (3.0, -1.5));
    }

    #[test]
    fn test_loose_shadow_never_past_midfield() {
        let (d, p, b) = setup((10.0, 10.0), Toucher::None);
        let plan = defender_plan(&d, &p, &b);
        assert_eq!(plan.mode, DefenderMode::LooseShadow);
        assert!((plan.target.0 - 3.0).abs() < 1e-5);
        assert_eq!(plan.target.1, 0.0);
    }

    #[test]
    fn test_steer_moves_at_speed() {
        let field = FieldConfig::default();
        let mut d = Opponent::new((0.0, -5.0));
        let plan = DefenderPlan { mode: DefenderMode::LooseShadow, target: (0.0, 0.0), speed: 4.0 };
        steer_defender(&mut d, &plan, 0.5, &field);
        assert!((d.position.1 + 3.0).abs() < 1e-5);
        assert!((d.facing.abs() - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_steer_does_not_overshoot_or_jitter() {
        let field = FieldConfig::default();
        let mut d = Opponent::new((0.0, -0.05));
        d.facing = 1.0;
        let plan = DefenderPlan { mode: DefenderMode::LooseShadow, target: (0.0, 0.0), speed: 4.0 };
        steer_defender(&mut d, &plan, 0.5, &field);
        assert_eq!(d.position, (0.0, 0.0));
        assert_eq!(d.facing, 1.0);
    }

    #[test]
    fn test_never_retreats_past_floor() {
        let field = FieldConfig::default();
        let mut d = Opponent::new((0.0, -11.9));
        let plan = DefenderPlan { mode: DefenderMode::Chase, target: (0.0, -15.0), speed: 4.5 };
        steer_defender(&mut d, &plan, 1.0, &field);
        assert_eq!(d.position.1, MIN_Z);
    }
}
