//! Read-only step output
//!
//! Renderers and the HUD read this after the step; they never touch
//! [`World`] directly.

use serde::Serialize;

use super::events::MatchEvent;
use super::match_clock::MatchClock;
use super::world::{Opponent, Toucher, World};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacterView {
    pub x: f32,
    pub z: f32,
    /// Radians, 0 facing the defended goal
    pub facing: f32,
}

impl From<&Opponent> for CharacterView {
    fn from(o: &Opponent) -> Self {
        Self { x: o.position.0, z: o.position.1, facing: o.facing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub z: f32,
    pub height: f32,
    pub roll_axis: (f32, f32),
    pub roll_angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: CharacterView,
    pub defender: CharacterView,
    pub goalkeeper: CharacterView,
    pub ball: BallView,
    pub stamina: f32,
    pub power_charge: f32,
    pub charging: bool,
    pub sprint_active: bool,
    pub dribbling: bool,
    pub can_kick: bool,
    pub last_toucher: Toucher,
    pub score: u32,
    pub goal_latch: bool,
    pub elapsed: f32,
    pub remaining: Option<f32>,
    pub paused: bool,
    pub game_over: bool,
    pub events: Vec<MatchEvent>,
}

impl Snapshot {
    pub fn capture(world: &World, clock: &MatchClock, events: Vec<MatchEvent>) -> Self {
        let player = &world.player;
        let ball = &world.ball;
        Self {
            player: CharacterView {
                x: player.position.0,
                z: player.position.1,
                facing: player.facing_radians(),
            },
            defender: CharacterView::from(&world.defender),
            goalkeeper: CharacterView::from(&world.goalkeeper),
            ball: BallView {
                x: ball.position.0,
                z: ball.position.1,
                height: ball.height,
                roll_axis: ball.roll_axis,
                roll_angle: ball.roll_angle,
            },
            stamina: player.stamina,
            power_charge: world.power.charge,
            charging: world.power.charging,
            sprint_active: player.sprint_active,
            dribbling: world.dribbling,
            can_kick: player.can_kick(),
            last_toucher: ball.last_toucher,
            score: world.score,
            goal_latch: world.goal_latch,
            elapsed: world.elapsed,
            remaining: clock.remaining(world.elapsed),
            paused: clock.is_paused(),
            game_over: clock.is_game_over(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{FieldConfig, GameMode};

    #[test]
    fn test_capture_kickoff() {
        let world = World::new(FieldConfig::default(), 100.0);
        let clock = MatchClock::new(GameMode::Practice);
        let snap = Snapshot::capture(&world, &clock, vec![]);
        assert_eq!((snap.player.x, snap.player.z), (0.0, 5.0));
        assert_eq!(snap.player.facing, 0.0);
        assert_eq!((snap.ball.x, snap.ball.z, snap.ball.height), (0.0, 10.0, 0.0));
        assert_eq!(snap.stamina, 100.0);
        assert_eq!(snap.remaining, None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(FieldConfig::default(), 100.0);
        let clock = MatchClock::new(GameMode::Practice);
        let snap = Snapshot::capture(&world, &clock, vec![MatchEvent::GoalScored { new_score: 1 }]);
        let json: serde_json::Value = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["last_toucher"], "none");
        assert_eq!(json["events"][0]["type"], "goal_scored");
        assert_eq!(json["ball"]["z"], 10.0);
    }
}
