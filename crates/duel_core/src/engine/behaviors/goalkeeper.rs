//! Goalkeeper steering
//!
//! The keeper slides along its line (x only). It sways idly while the ball
//! is far away and tracks it once the ball is near goal, diving toward the
//! projected crossing point of a fast shot it is already lined up with.

use crate::engine::config::FieldConfig;
use crate::engine::coordinates::{facing_radians, length, sub};
use crate::engine::physics_constants::goalkeeper::*;
use crate::engine::world::{Ball, Opponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeeperMode {
    Idle,
    /// Ball moving toward goal; `diving` for a fast, aligned shot
    Shot { diving: bool },
    /// Ball near goal but not a shot
    Shading,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeeperPlan {
    pub mode: KeeperMode,
    pub target_x: f32,
    pub speed: f32,
}

pub fn goalkeeper_plan(keeper: &Opponent, ball: &Ball, elapsed: f32) -> KeeperPlan {
    let (bx, bz) = ball.position;
    if bz >= TRACKING_Z {
        return KeeperPlan {
            mode: KeeperMode::Idle,
            target_x: (elapsed * IDLE_FREQUENCY).sin() * IDLE_AMPLITUDE,
            speed: BASE_SPEED,
        };
    }

    let (vx, vz) = ball.velocity;
    let (mode, target_x, speed) = if vz < SHOT_VZ {
        let predicted_x = bx + vx * PREDICTION_SEC;
        let diving = vz.abs() > FAST_SHOT_VZ && (keeper.position.0 - bx).abs() < DIVE_ALIGNMENT;
        let speed = if diving { DIVE_SPEED } else { BASE_SPEED };
        (KeeperMode::Shot { diving }, predicted_x, speed)
    } else {
        (KeeperMode::Shading, bx * SHADE_X_SCALE, BASE_SPEED)
    };

    KeeperPlan { mode, target_x: target_x.clamp(-MAX_X, MAX_X), speed }
}

/// Exponential approach toward the plan's x; always face the ball.
pub fn steer_goalkeeper(
    keeper: &mut Opponent,
    plan: &KeeperPlan,
    ball: &Ball,
    dt: f32,
    field: &FieldConfig,
) {
    let blend = (plan.speed * dt).clamp(0.0, 1.0);
    let x = keeper.position.0 + (plan.target_x - keeper.position.0) * blend;
    keeper.position = field.clamp((x, keeper.position.1));

    let to_ball = sub(ball.position, keeper.position);
    if length(to_ball) > FACING_THRESHOLD {
        keeper.facing = facing_radians(to_ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(pos: (f32, f32), vel: (f32, f32)) -> Ball {
        let mut b = Ball::at_kickoff();
        b.position = pos;
        b.velocity = vel;
        b
    }

    #[test]
    fn test_idle_sway() {
        let keeper = Opponent::new(START);
        let plan = goalkeeper_plan(&keeper, &ball((0.0, 5.0), (0.0, 0.0)), 0.0);
        assert_eq!(plan.mode, KeeperMode::Idle);
        assert_eq!(plan.target_x, 0.0);

        let t = std::f32::consts::FRAC_PI_2 / IDLE_FREQUENCY;
        let plan = goalkeeper_plan(&keeper, &ball((0.0, 5.0), (0.0, 0.0)), t);
        assert!((plan.target_x - IDLE_AMPLITUDE).abs() < 1e-4);
    }

    #[test]
    fn test_tracks_shot_prediction() {
        let keeper = Opponent::new(START);
        let plan = goalkeeper_plan(&keeper, &ball((1.0, -9.0), (2.0, -5.0)), 0.0);
        assert_eq!(plan.mode, KeeperMode::Shot { diving: false });
        assert_eq!(plan.target_x, 2.0);
        assert_eq!(plan.speed, BASE_SPEED);
    }

    #[test]
    fn test_dives_at_fast_aligned_shot() {
        let keeper = Opponent::new(START);
        let plan = goalkeeper_plan(&keeper, &ball((1.0, -9.0), (4.0, -20.0)), 0.0);
        assert_eq!(plan.mode, KeeperMode::Shot { diving: true });
        assert_eq!(plan.speed, DIVE_SPEED);
        assert_eq!(plan.target_x, 3.0);
    }

    #[test]
    fn test_no_dive_when_misaligned() {
        let keeper = Opponent::new(START);
        let plan = goalkeeper_plan(&keeper, &ball((6.0, -9.0), (0.0, -20.0)), 0.0);
        assert_eq!(plan.mode, KeeperMode::Shot { diving: false });
        assert_eq!(plan.target_x, MAX_X);
    }

    #[test]
    fn test_shading_stays_in_goal_mouth() {
        let keeper = Opponent::new(START);
        let plan = goalkeeper_plan(&keeper, &ball((20.0, -10.0), (0.0, 0.0)), 0.0);
        assert_eq!(plan.mode, KeeperMode::Shading);
        assert_eq!(plan.target_x, MAX_X);
    }

    #[test]
    fn test_steer_exponential_and_faces_ball() {
        let field = FieldConfig::default();
        let mut keeper = Opponent::new(START);
        let plan = KeeperPlan { mode: KeeperMode::Shading, target_x: 4.0, speed: BASE_SPEED };
        let b = ball((4.0, -9.0), (0.0, 0.0));
        steer_goalkeeper(&mut keeper, &plan, &b, 0.1, &field);
        assert!((keeper.position.0 - 1.2).abs() < 1e-5);
        assert_eq!(keeper.position.1, START.1);
        assert!(keeper.facing > 0.0);
    }

    #[test]
    fn test_long_step_does_not_overshoot() {
        let field = FieldConfig::default();
        let mut keeper = Opponent::new(START);
        let plan = KeeperPlan {
            mode: KeeperMode::Shot { diving: true },
            target_x: -4.0,
            speed: DIVE_SPEED,
        };
        steer_goalkeeper(&mut keeper, &plan, &ball((0.0, 0.0), (0.0, 0.0)), 1.0, &field);
        assert_eq!(keeper.position.0, -4.0);
    }
}
