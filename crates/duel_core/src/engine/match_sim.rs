//! # Match Engine
//!
//! Owns the [`World`] and runs one ordered, synchronous step per frame.
//!
//! ## Step order
//! 1. skip entirely while paused or after full time
//! 2. countdowns (kick lockout, goal celebration), elapsed time
//! 3. stamina, player motion, power charge
//! 4. ball: dribble or kick/free flight, integrate, walls
//! 5. goal check
//! 6. character contacts (player, defender, goalkeeper), each followed by
//!    containment that keeps the ball clear of that character
//! 7. defender and goalkeeper steering
//! 8. full-time check, snapshot
//!
//! Values from the previous frame that later stages depend on (charge
//! state, player pre-move position) are captured before anything is
//! written for this step.

use tracing::{debug, warn};

use super::ball_physics::{
    apply_dribble, apply_free_flight, can_control, integrate_position, try_kick,
};
use super::behaviors::{defender_plan, goalkeeper_plan, steer_defender, steer_goalkeeper};
use super::boundary::{contain_clear_of, reflect_off_walls};
use super::collision::{resolve_contact, CharacterMotion};
use super::config::EngineConfig;
use super::coordinates::normalize_or_zero;
use super::events::MatchEvent;
use super::goal::{check_goal, tick_celebration};
use super::intent::Intent;
use super::match_clock::MatchClock;
use super::noise::{NoiseSource, SeededNoise};
use super::physics_constants::{defender, goalkeeper, player, time};
use super::player_motion::update_player_motion;
use super::power_charge::{update_power_charge, ChargeRelease};
use super::snapshot::Snapshot;
use super::stamina::update_stamina;
use super::world::{Toucher, World};

#[derive(Debug)]
pub struct MatchEngine {
    config: EngineConfig,
    world: World,
    clock: MatchClock,
    noise: Box<dyn NoiseSource>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Kickoff layout with ChaCha8 noise seeded from `config.match_rules.seed`.
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.match_rules.seed;
        Self::with_noise(config, Box::new(SeededNoise::new(seed)))
    }

    pub fn with_noise(config: EngineConfig, noise: Box<dyn NoiseSource>) -> Self {
        debug!(
            mode = ?config.match_rules.mode,
            seed = config.match_rules.seed,
            "match engine created"
        );
        Self {
            world: World::new(config.field, config.stamina.max),
            clock: MatchClock::new(config.match_rules.mode),
            config,
            noise,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct state access for hosts and test setups.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, &self.clock, Vec::new())
    }

    pub fn pause(&mut self) {
        self.clock.set_paused(true);
    }

    pub fn resume(&mut self) {
        self.clock.set_paused(false);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn is_game_over(&self) -> bool {
        self.clock.is_game_over()
    }

    /// Back to kickoff with score and clock reset. The noise stream is not
    /// reseeded.
    pub fn new_match(&mut self) {
        self.world = World::new(self.config.field, self.config.stamina.max);
        self.clock = MatchClock::new(self.config.match_rules.mode);
        self.events.clear();
        debug!("new match");
    }

    /// Clear the goal latch now, for hosts that run their own celebration.
    pub fn clear_goal_latch(&mut self) {
        self.world.goal_latch = false;
        self.world.goal_celebration.cancel();
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32, intent: Intent) -> Snapshot {
        if self.clock.is_halted() {
            return self.snapshot();
        }

        let dt = sanitize_dt(dt);
        let intent = intent.sanitized();
        let was_charging = self.world.power.charging;

        self.tick_countdowns(dt);
        self.update_player(&intent, dt);
        let release = update_power_charge(
            &mut self.world.power,
            intent.kick_held,
            self.world.player.can_kick(),
            self.world.player.sprint_active,
            self.config.match_rules.power_charge_rate,
            dt,
        );

        self.update_ball(was_charging, release, dt);
        self.update_goal();
        self.resolve_contacts();
        self.update_opponents(dt);

        if self.clock.check_full_time(self.world.elapsed) {
            debug!(final_score = self.world.score, "full time");
            self.events.push(MatchEvent::FullTime { final_score: self.world.score });
        }

        let events = std::mem::take(&mut self.events);
        Snapshot::capture(&self.world, &self.clock, events)
    }

    fn tick_countdowns(&mut self, dt: f32) {
        self.world.player.kick_cooldown.tick(dt);
        if tick_celebration(&mut self.world, dt) {
            self.events.push(MatchEvent::GoalCelebrationEnded);
        }
        self.world.elapsed += dt;
    }

    fn update_player(&mut self, intent: &Intent, dt: f32) {
        let player = &mut self.world.player;
        update_stamina(player, intent.sprint, dt, &self.config.stamina);
        update_player_motion(player, intent, dt, &self.world.field);
    }

    fn update_ball(&mut self, was_charging: bool, release: Option<ChargeRelease>, dt: f32) {
        let world = &mut self.world;
        world.dribbling = can_control(&world.player, &world.ball, was_charging);

        if world.dribbling {
            apply_dribble(&mut world.ball, &world.player, self.noise.as_mut());
            self.touch(Toucher::Player);
        } else {
            if let Some(release) = release {
                let kick = try_kick(&mut world.ball, &world.player, release, self.noise.as_mut());
                if let Some(kick) = kick {
                    world.player.kick_cooldown.start(self.config.match_rules.kick_cooldown_sec);
                    debug!(power = kick.power, lift = kick.lift, "kick");
                    self.events.push(MatchEvent::Kicked { power: kick.power, lift: kick.lift });
                    self.touch(Toucher::Player);
                }
            }
            apply_free_flight(&mut self.world.ball, dt);
        }

        let world = &mut self.world;
        integrate_position(&mut world.ball, dt);
        reflect_off_walls(&mut world.ball, &world.field, self.noise.as_mut());
    }

    fn update_goal(&mut self) {
        if let Some(new_score) = check_goal(&mut self.world) {
            let celebration = self.config.match_rules.goal_celebration_sec;
            if celebration > 0.0 {
                self.world.goal_celebration.start(celebration);
            }
            debug!(new_score, "goal");
            self.events.push(MatchEvent::GoalScored { new_score });
        }
    }

    fn resolve_contacts(&mut self) {
        let world = &mut self.world;

        if !world.dribbling {
            let speed = if world.player.sprint_active {
                world.player.speed * player::SPRINT_IMPACT_MULTIPLIER
            } else {
                world.player.speed
            };
            let motion = CharacterMotion::Player {
                direction: normalize_or_zero(world.player.velocity),
                speed,
            };
            let position = world.player.position;
            if resolve_contact(&mut world.ball, position, motion, self.noise.as_mut()).is_some() {
                contain_clear_of(&mut world.ball, &world.field, position);
                self.touch(Toucher::Player);
            }
        }

        let contacts = [
            (self.world.defender.position, defender::CONTACT_SPEED, Toucher::Defender),
            (self.world.goalkeeper.position, goalkeeper::CONTACT_SPEED, Toucher::Goalkeeper),
        ];
        for (position, speed, owner) in contacts {
            let motion = CharacterMotion::Opponent { speed };
            let ball = &mut self.world.ball;
            if resolve_contact(ball, position, motion, self.noise.as_mut()).is_some() {
                contain_clear_of(ball, &self.world.field, position);
                self.touch(owner);
            }
        }
    }

    fn update_opponents(&mut self, dt: f32) {
        let world = &mut self.world;

        let plan = defender_plan(&world.defender, &world.player, &world.ball);
        steer_defender(&mut world.defender, &plan, dt, &world.field);

        let plan = goalkeeper_plan(&world.goalkeeper, &world.ball, world.elapsed);
        steer_goalkeeper(&mut world.goalkeeper, &plan, &world.ball, dt, &world.field);
    }

    /// Record the last toucher; emits an event only when ownership changes.
    fn touch(&mut self, owner: Toucher) {
        if self.world.ball.last_toucher != owner {
            self.world.ball.last_toucher = owner;
            debug!(?owner, "touch changed");
            self.events.push(MatchEvent::TouchChanged { owner });
        }
    }
}

/// Non-finite or negative steps do nothing; long stalls are capped.
fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        warn!(dt, "invalid frame delta, treating as zero");
        return 0.0;
    }
    dt.min(time::MAX_STEP_SEC)
}
