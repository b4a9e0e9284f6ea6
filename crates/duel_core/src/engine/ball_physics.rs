//! Ball Physics
//!
//! The ball is in one of two regimes each step:
//! - **dribbled**: velocity is low-pass filtered toward a point just ahead
//!   of the player, height pinned to the ground
//! - **free**: kicked, rolling or airborne; friction, gravity and bounce
//!
//! Position integration and the roll cue run in both regimes; wall
//! reflection lives in [`super::boundary`].

use tracing::trace;

use super::coordinates::{add, distance, length, lerp, scale, sub, try_normalize, Vec2};
use super::noise::NoiseSource;
use super::physics_constants::{ball as ball_const, bounce, dribble, kick};
use super::power_charge::{ChargeRelease, MAX_CHARGE};
use super::world::{Ball, Player};

/// Result of a successful kick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickOutcome {
    pub power: f32,
    pub lift: f32,
}

// ===========================================
// Dribble control
// ===========================================

/// Whether the player takes the ball under control this step.
///
/// `was_charging` is the charge state at the start of the step, so the
/// release frame of a kick never snaps the ball back into a dribble.
pub fn can_control(player: &Player, ball: &Ball, was_charging: bool) -> bool {
    distance(player.position, ball.position) < dribble::LOOSE_CONTROL_ZONE
        && ball.height < dribble::MAX_CONTROL_HEIGHT
        && !was_charging
}

/// Control quality in [0, 1]: 1 inside the perfect zone, falling linearly
/// to 0 at the edge of the loose zone.
pub fn control_quality(distance_to_ball: f32) -> f32 {
    let span = dribble::LOOSE_CONTROL_ZONE - dribble::PERFECT_CONTROL_ZONE;
    ((dribble::LOOSE_CONTROL_ZONE - distance_to_ball) / span).clamp(0.0, 1.0)
}

/// Lead distance of the ball in front of a player moving at `speed`.
pub fn dribble_distance(speed: f32) -> f32 {
    (speed * dribble::SPEED_LEAD + dribble::MIN_DISTANCE)
        .clamp(dribble::MIN_DISTANCE, dribble::MAX_DISTANCE)
}

/// Steer the ball toward the dribble target for one step.
pub fn apply_dribble(ball: &mut Ball, player: &Player, noise: &mut dyn NoiseSource) {
    let dist = distance(player.position, ball.position);
    let quality = control_quality(dist);
    let perfect = dist < dribble::PERFECT_CONTROL_ZONE;
    let gain = lerp(dribble::LOOSE_GAIN, dribble::PERFECT_GAIN, quality);

    let player_speed = length(player.velocity);
    let lead = scale(player.facing, dribble_distance(player_speed));
    let target = add(player.previous_position, lead);
    let correction = scale(sub(target, ball.position), gain);
    let mut desired = add(player.velocity, correction);

    let jitter = (1.0 - quality) * player_speed * dribble::JITTER_SCALE;
    if jitter > 0.0 {
        desired = add(desired, (noise.symmetric(jitter), noise.symmetric(jitter)));
    }

    let smoothing = if perfect { dribble::PERFECT_SMOOTHING } else { dribble::LOOSE_SMOOTHING };
    ball.velocity = add(ball.velocity, scale(sub(desired, ball.velocity), smoothing));
    ball.height = 0.0;
    ball.vertical_velocity = 0.0;

    trace!(quality, gain, ?target, velocity = ?ball.velocity, "dribble");
}

// ===========================================
// Kick
// ===========================================

/// Kick the ball if the release happened within reach and outside the lockout.
///
/// Weaker kicks get more direction variance; charges above the lift
/// threshold loft the ball, the rest stay near the ground.
pub fn try_kick(
    ball: &mut Ball,
    player: &Player,
    release: ChargeRelease,
    noise: &mut dyn NoiseSource,
) -> Option<KickOutcome> {
    if !release.kick_released
        || !player.can_kick()
        || distance(player.position, ball.position) >= kick::MAX_DISTANCE
        || ball.height >= kick::MAX_HEIGHT
    {
        return None;
    }

    let charge = release.charge.clamp(0.0, MAX_CHARGE);
    let charge01 = charge / MAX_CHARGE;
    let power = kick::BASE_POWER + charge01 * kick::CHARGE_POWER;

    let variance = (1.0 - charge01) * kick::MAX_VARIANCE;
    let jittered = (
        player.facing.0 + noise.symmetric(variance),
        player.facing.1 + noise.symmetric(variance),
    );
    let direction = try_normalize(jittered).unwrap_or(player.facing);
    ball.velocity = scale(direction, power);

    let lift = if charge > kick::LIFT_THRESHOLD {
        let above = (charge - kick::LIFT_THRESHOLD) / (MAX_CHARGE - kick::LIFT_THRESHOLD);
        let lift_power = kick::LIFT_BASE + above * kick::LIFT_RANGE;
        (lift_power + noise.symmetric(kick::LIFT_NOISE)).max(0.0)
    } else {
        noise.range(0.0, kick::GROUND_HOP_MAX)
    };
    ball.vertical_velocity = lift;

    Some(KickOutcome { power, lift })
}

// ===========================================
// Free flight
// ===========================================

/// Friction, gravity and ground bounce for a ball nobody controls.
pub fn apply_free_flight(ball: &mut Ball, dt: f32) {
    let speed = length(ball.velocity);
    let base = if ball.height > 0.0 {
        ball_const::AIR_FRICTION
    } else {
        ball_const::GROUND_FRICTION
    };
    let speed_drag = (speed * ball_const::SPEED_DRAG_RATE).min(1.0) * ball_const::SPEED_DRAG_MAX;
    ball.velocity = scale(ball.velocity, base - speed_drag);

    if ball.is_airborne() {
        ball.vertical_velocity -= ball_const::GRAVITY * dt;
        ball.height += ball.vertical_velocity * dt;

        if ball.height <= 0.0 && ball.vertical_velocity < 0.0 {
            ball.height = 0.0;
            let impact = ball.vertical_velocity.abs();
            let restitution =
                bounce::RESTITUTION * (impact / bounce::FULL_RESTITUTION_SPEED).min(1.0);
            ball.vertical_velocity = impact * restitution;
            if ball.vertical_velocity.abs() < bounce::REST_THRESHOLD {
                ball.vertical_velocity = 0.0;
            }
            ball.velocity = scale(ball.velocity, bounce::HORIZONTAL_DAMPING);
        }
    }
    ball.height = ball.height.max(0.0);
}

/// Move the ball by its velocity and update the roll cue.
pub fn integrate_position(ball: &mut Ball, dt: f32) {
    ball.position = add(ball.position, scale(ball.velocity, dt));

    let speed = length(ball.velocity);
    if speed > ball_const::ROLL_MIN_SPEED {
        ball.roll_axis = roll_axis(ball.velocity);
        ball.roll_angle =
            (ball.roll_angle + speed * dt * ball_const::ROLL_RATE) % std::f32::consts::TAU;
    }
}

/// Horizontal axis the ball spins around when moving along `velocity`.
fn roll_axis(velocity: Vec2) -> Vec2 {
    try_normalize((-velocity.1, velocity.0)).unwrap_or((0.0, 0.0))
}
