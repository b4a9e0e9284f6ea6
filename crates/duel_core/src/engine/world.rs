//! World state
//!
//! Everything the step function mutates lives here as explicit typed
//! fields. Lifetime is one match; [`World::new`] is the kickoff layout.

use serde::{Deserialize, Serialize};

use super::config::FieldConfig;
use super::coordinates::{facing_radians, FieldPos, Vec2};
use super::physics_constants::{defender, goal, goalkeeper};

/// Player kickoff spot (x, z)
pub const PLAYER_START: FieldPos = (0.0, 5.0);

/// Who most recently controlled or deflected the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toucher {
    #[default]
    None,
    Player,
    Defender,
    Goalkeeper,
}

/// Simulation-time countdown, advanced only by the step's Δt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn start(&mut self, duration_sec: f32) {
        self.remaining = duration_sec.max(0.0);
    }

    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advance by `dt`. Returns `true` on the tick the countdown expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        !self.is_running()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: FieldPos,
    /// Unit heading; only replaced by a non-zero movement intent
    pub facing: Vec2,
    pub stamina: f32,
    pub sprint_active: bool,
    /// Position at the start of this step (dribble anchor)
    pub previous_position: FieldPos,
    /// Velocity applied this step (zero when idle)
    pub velocity: Vec2,
    /// Movement speed selected this step, also used for contact impact
    pub speed: f32,
    /// Kick lockout
    pub kick_cooldown: Countdown,
}

impl Player {
    pub fn new(stamina: f32) -> Self {
        Self {
            position: PLAYER_START,
            facing: (0.0, -1.0),
            stamina,
            sprint_active: false,
            previous_position: PLAYER_START,
            velocity: (0.0, 0.0),
            speed: 0.0,
            kick_cooldown: Countdown::default(),
        }
    }

    pub fn can_kick(&self) -> bool {
        !self.kick_cooldown.is_running()
    }

    pub fn facing_radians(&self) -> f32 {
        facing_radians(self.facing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: FieldPos,
    /// Height above the ground, never negative
    pub height: f32,
    pub velocity: Vec2,
    pub vertical_velocity: f32,
    pub last_toucher: Toucher,
    /// Rolling cue for renderers, not physics state
    pub roll_axis: Vec2,
    pub roll_angle: f32,
}

impl Ball {
    pub fn at_kickoff() -> Self {
        Self {
            position: goal::KICKOFF,
            height: 0.0,
            velocity: (0.0, 0.0),
            vertical_velocity: 0.0,
            last_toucher: Toucher::None,
            roll_axis: (0.0, 0.0),
            roll_angle: 0.0,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.height > 0.0 || self.vertical_velocity != 0.0
    }

    /// Back to the kickoff spot at rest. The last toucher is kept.
    pub fn reset_to_kickoff(&mut self) {
        self.position = goal::KICKOFF;
        self.height = 0.0;
        self.velocity = (0.0, 0.0);
        self.vertical_velocity = 0.0;
        self.roll_angle = 0.0;
    }
}

/// AI-controlled defender or goalkeeper. Holds no memory beyond pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub position: FieldPos,
    /// Heading in radians (see [`facing_radians`])
    pub facing: f32,
}

impl Opponent {
    pub fn new(position: FieldPos) -> Self {
        Self { position, facing: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerChargeState {
    pub charging: bool,
    /// 0..=100
    pub charge: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub field: FieldConfig,
    pub player: Player,
    pub ball: Ball,
    pub defender: Opponent,
    pub goalkeeper: Opponent,
    pub power: PowerChargeState,
    /// Ball is slaved to the player this step
    pub dribbling: bool,
    pub score: u32,
    /// Set on a goal, cleared after the celebration
    pub goal_latch: bool,
    pub goal_celebration: Countdown,
    /// Simulation time of all non-skipped steps
    pub elapsed: f32,
}

impl World {
    pub fn new(field: FieldConfig, max_stamina: f32) -> Self {
        Self {
            field,
            player: Player::new(max_stamina),
            ball: Ball::at_kickoff(),
            defender: Opponent::new(defender::START),
            goalkeeper: Opponent::new(goalkeeper::START),
            power: PowerChargeState::default(),
            dribbling: false,
            score: 0,
            goal_latch: false,
            goal_celebration: Countdown::default(),
            elapsed: 0.0,
        }
    }
}
