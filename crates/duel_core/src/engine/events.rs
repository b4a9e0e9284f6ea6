use serde::{Deserialize, Serialize};

use super::world::Toucher;

/// Discrete outputs of a step, drained into the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    GoalScored { new_score: u32 },
    TouchChanged { owner: Toucher },
    Kicked { power: f32, lift: f32 },
    GoalCelebrationEnded,
    FullTime { final_score: u32 },
}
