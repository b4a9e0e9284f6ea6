//! Physics constants for the duel simulation
//!
//! Arcade tuning, not physical accuracy. Field geometry and rates that a
//! match may want to change live in [`super::config`]; everything here is
//! fixed for every match.

// ============================================================
// Time
// ============================================================
pub mod time {
    /// Largest Δt a single step integrates (s). Longer frames are clamped.
    pub const MAX_STEP_SEC: f32 = 0.1;
}

// ============================================================
// Player locomotion
// ============================================================
pub mod player {
    /// Jog speed (units/s)
    pub const WALK_SPEED: f32 = 5.0;
    /// Sprint speed (units/s)
    pub const SPRINT_SPEED: f32 = 8.0;
    /// Extra impact multiplier for a sprinting player hitting the ball
    pub const SPRINT_IMPACT_MULTIPLIER: f32 = 1.5;
}

// ============================================================
// Dribble control
// ============================================================
pub mod dribble {
    /// Ball enters dribble control inside this radius
    pub const LOOSE_CONTROL_ZONE: f32 = 1.5;
    /// Full-quality control inside this radius
    pub const PERFECT_CONTROL_ZONE: f32 = 0.8;
    /// Ball must be lower than this to be controlled
    pub const MAX_CONTROL_HEIGHT: f32 = 1.0;

    /// Proportional correction gain at perfect control
    pub const PERFECT_GAIN: f32 = 2.0;
    /// Proportional correction gain at loose control
    pub const LOOSE_GAIN: f32 = 1.0;

    /// Per-frame low-pass factor toward the desired velocity
    pub const PERFECT_SMOOTHING: f32 = 0.15;
    pub const LOOSE_SMOOTHING: f32 = 0.08;

    /// Ball lead in front of the player: speed * SPEED_LEAD + MIN_DISTANCE
    pub const SPEED_LEAD: f32 = 0.15;
    pub const MIN_DISTANCE: f32 = 0.5;
    pub const MAX_DISTANCE: f32 = 1.5;

    /// Jitter amplitude per unit of (1 - quality) * player speed
    pub const JITTER_SCALE: f32 = 0.1;
}

// ============================================================
// Kick
// ============================================================
pub mod kick {
    /// Ball must be within this distance for a release to kick
    pub const MAX_DISTANCE: f32 = 2.0;
    /// Ball must be lower than this to be kicked
    pub const MAX_HEIGHT: f32 = 1.0;

    /// kick power = BASE_POWER + charge01 * CHARGE_POWER
    pub const BASE_POWER: f32 = 10.0;
    pub const CHARGE_POWER: f32 = 25.0;

    /// Direction jitter per axis at zero charge
    pub const MAX_VARIANCE: f32 = 0.2;

    /// Charge above which the ball is lofted
    pub const LIFT_THRESHOLD: f32 = 50.0;
    /// lift = LIFT_BASE + (charge - 50) / 50 * LIFT_RANGE
    pub const LIFT_BASE: f32 = 5.0;
    pub const LIFT_RANGE: f32 = 12.0;
    /// Lift noise for lofted kicks
    pub const LIFT_NOISE: f32 = 1.0;
    /// Upper bound of the hop on a low-power kick
    pub const GROUND_HOP_MAX: f32 = 3.0;
}

// ============================================================
// Ball flight
// ============================================================
pub mod ball {
    /// Gravity (units/s²)
    pub const GRAVITY: f32 = 9.8;
    /// Per-frame friction while rolling
    pub const GROUND_FRICTION: f32 = 0.98;
    /// Per-frame friction while airborne
    pub const AIR_FRICTION: f32 = 0.995;
    /// Speed-dependent extra drag: min(1, speed * SPEED_DRAG_RATE) * SPEED_DRAG_MAX
    pub const SPEED_DRAG_RATE: f32 = 0.1;
    pub const SPEED_DRAG_MAX: f32 = 0.02;
    /// Roll cue angular rate per unit of speed (visual only)
    pub const ROLL_RATE: f32 = 2.0;
    /// Below this planar speed the roll cue is suppressed
    pub const ROLL_MIN_SPEED: f32 = 0.1;
    /// Ball radius
    pub const RADIUS: f32 = 0.5;
}

/// Ground bounce
pub mod bounce {
    /// Base coefficient of restitution
    pub const RESTITUTION: f32 = 0.7;
    /// Impact speed at which restitution reaches its full value
    pub const FULL_RESTITUTION_SPEED: f32 = 10.0;
    /// Rebounds slower than this are snapped to rest
    pub const REST_THRESHOLD: f32 = 1.0;
    /// Horizontal damping on each ground contact
    pub const HORIZONTAL_DAMPING: f32 = 0.85;
}

/// Field boundary reflection
pub mod wall {
    /// Velocity retained on reflection
    pub const DAMPING: f32 = 0.8;
    /// Impacts faster than this get the lively bounce
    pub const LIVELY_THRESHOLD: f32 = 0.5;
    /// Lively bounce amplification
    pub const ELASTICITY: f32 = 1.2;
    /// Vertical boost per unit of impact speed
    pub const LIFT_PER_SPEED: f32 = 0.15;
    /// Cap on the vertical boost from one wall impact
    pub const MAX_LIFT: f32 = 4.0;
    /// Random deflection applied to the orthogonal component
    pub const DEFLECTION: f32 = 0.5;

    /// Fraction of each half-extent beyond which the ball is "in the corner"
    pub const CORNER_ZONE: f32 = 0.9;
    /// Extra multiplier on both components in a corner bounce
    pub const CORNER_MULTIPLIER: f32 = 1.3;
    /// Extra vertical boost in a corner bounce
    pub const CORNER_LIFT: f32 = 2.0;
}

// ============================================================
// Character–ball contact
// ============================================================
pub mod collision {
    /// Character body radius
    pub const CHARACTER_RADIUS: f32 = 0.5;
    /// Contact is ignored above this ball height
    pub const MAX_CONTACT_HEIGHT: f32 = 1.5;
    /// Extra separation after push-out
    pub const SEPARATION_EPSILON: f32 = 0.01;
    /// Minimum alignment factor for impact force
    pub const MIN_ALIGNMENT: f32 = 0.3;
    /// Impact force at which reflection influence bottoms out
    pub const REFLECTION_FALLOFF: f32 = 5.0;
    /// Floor for reflection influence
    pub const MIN_REFLECTION: f32 = 0.2;
    /// Incoming speed retained after contact
    pub const SPEED_RETENTION: f32 = 0.8;
    /// Pop-up is applied only when vertical velocity is below this
    pub const POP_THRESHOLD: f32 = 2.0;
    /// Minimum pop-up vertical velocity
    pub const POP_BASE: f32 = 1.0;
    /// Pop-up noise amplitude per unit of impact force
    pub const POP_PER_IMPACT: f32 = 0.5;
}

// ============================================================
// Goal
// ============================================================
pub mod goal {
    /// Ball must be lower than the crossbar to count
    pub const CROSSBAR_HEIGHT: f32 = 2.5;
    /// Kickoff spot after a goal (x, z)
    pub const KICKOFF: (f32, f32) = (0.0, 10.0);
}

// ============================================================
// AI
// ============================================================
pub mod defender {
    /// Starting spot (x, z)
    pub const START: (f32, f32) = (5.0, -5.0);
    /// Base steering speed
    pub const BASE_SPEED: f32 = 4.0;
    /// Speed while chasing a ball the attacker just touched
    pub const CHASE_SPEED: f32 = 4.5;
    /// Chase only balls closer than this
    pub const CHASE_RADIUS: f32 = 8.0;
    /// Deep-ball threshold for the defensive shadow
    pub const DEEP_BALL_Z: f32 = -5.0;
    /// Defensive shadow: x scale, z offset and z floor
    pub const DEEP_SHADOW_X_SCALE: f32 = 0.7;
    pub const DEEP_SHADOW_Z_OFFSET: f32 = 3.0;
    pub const DEEP_SHADOW_MIN_Z: f32 = -10.0;
    /// Attacker proximity that triggers an intercept
    pub const INTERCEPT_RADIUS: f32 = 7.0;
    /// Loose shadow: x scale and z band
    pub const LOOSE_SHADOW_X_SCALE: f32 = 0.3;
    pub const LOOSE_SHADOW_Z_BAND: f32 = 2.0;
    /// Target never advances past this z
    pub const MAX_TARGET_Z: f32 = 0.0;
    /// Defender never retreats behind this z
    pub const MIN_Z: f32 = -12.0;
    /// Facing updates only for direction vectors longer than this
    pub const FACING_THRESHOLD: f32 = 0.1;
    /// Contact speed used for ball deflection
    pub const CONTACT_SPEED: f32 = 4.0;
}

pub mod goalkeeper {
    /// Starting spot (x, z); z is fixed for the whole match
    pub const START: (f32, f32) = (0.0, -12.0);
    /// Base approach rate
    pub const BASE_SPEED: f32 = 3.0;
    /// Approach rate when diving at a fast, aligned shot
    pub const DIVE_SPEED: f32 = 6.0;
    /// Tracking engages when the ball is deeper than this z
    pub const TRACKING_Z: f32 = -8.0;
    /// Look-ahead used to project the ball (s)
    pub const PREDICTION_SEC: f32 = 0.5;
    /// Ball z-velocity below this counts as a shot on goal
    pub const SHOT_VZ: f32 = -1.0;
    /// |vz| above this counts as a fast shot
    pub const FAST_SHOT_VZ: f32 = 8.0;
    /// Keeper must be within this x distance to dive
    pub const DIVE_ALIGNMENT: f32 = 3.0;
    /// Positional shading toward a non-shooting ball
    pub const SHADE_X_SCALE: f32 = 0.7;
    /// Keeper never leaves |x| <= MAX_X
    pub const MAX_X: f32 = 4.0;
    /// Idle sway: sin(elapsed * IDLE_FREQUENCY) * IDLE_AMPLITUDE
    pub const IDLE_FREQUENCY: f32 = 0.3;
    pub const IDLE_AMPLITUDE: f32 = 2.0;
    /// Facing updates only for direction vectors longer than this
    pub const FACING_THRESHOLD: f32 = 0.1;
    /// Contact speed used for ball deflection
    pub const CONTACT_SPEED: f32 = 3.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_charge_kick_power() {
        assert_eq!(kick::BASE_POWER + kick::CHARGE_POWER, 35.0);
    }

    #[test]
    fn test_control_zones_nested() {
        assert!(dribble::PERFECT_CONTROL_ZONE < dribble::LOOSE_CONTROL_ZONE);
        assert!(dribble::LOOSE_CONTROL_ZONE < kick::MAX_DISTANCE);
        assert!(dribble::LOOSE_GAIN < dribble::PERFECT_GAIN);
    }

    #[test]
    fn test_contact_radius_sum() {
        assert_eq!(collision::CHARACTER_RADIUS + ball::RADIUS, 1.0);
    }
}
