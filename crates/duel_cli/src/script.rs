//! Input scripts for headless runs
//!
//! A script is a JSON array of segments, each holding a key state for a
//! number of frames:
//!
//! ```json
//! [
//!   {"frames": 30, "down": true},
//!   {"frames": 60, "up": true, "kick": false},
//!   {"frames": 45, "kick": true},
//!   {"frames": 1}
//! ]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use duel_core::{InputLayout, Intent, IntentResolver, KeyState};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Segment {
    pub frames: u32,
    #[serde(flatten)]
    pub keys: KeyState,
    /// Optional analog stick, `(x, y)` with y > 0 forward
    #[serde(default)]
    pub joystick: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    segments: Vec<Segment>,
    layout: InputLayout,
}

impl Script {
    pub fn from_json(json: &str, layout: InputLayout) -> Result<Self> {
        let segments: Vec<Segment> = serde_json::from_str(json).context("invalid input script")?;
        Ok(Self { segments, layout })
    }

    pub fn load(path: &Path, layout: InputLayout) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::from_json(&json, layout)
    }

    /// Back off to pick up the ball, dribble toward goal, then charge and shoot.
    pub fn demo() -> Self {
        let keys = |up, down, kick| KeyState { up, down, kick, ..KeyState::default() };
        let segment = |frames, keys| Segment { frames, keys, joystick: (0.0, 0.0) };
        Self {
            segments: vec![
                segment(50, keys(false, true, false)),
                segment(240, keys(true, false, false)),
                segment(45, keys(false, false, true)),
                segment(1, keys(false, false, false)),
                segment(120, keys(false, false, false)),
            ],
            layout: InputLayout::Desktop,
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// One resolved intent per frame, in order.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.segments.iter().flat_map(move |s| {
            let intent = IntentResolver::resolve(s.keys, s.joystick, self.layout);
            std::iter::repeat(intent).take(s.frames as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let script = Script::from_json(
            r#"[{"frames": 2, "up": true}, {"frames": 1, "kick": true, "sprint": true}]"#,
            InputLayout::Desktop,
        )
        .unwrap();
        let intents: Vec<Intent> = script.intents().collect();
        assert_eq!(intents.len(), 3);
        assert_eq!(intents[0].move_z, -1);
        assert!(intents[2].kick_held && intents[2].sprint);
        assert!(!intents[2].is_moving());
    }

    #[test]
    fn test_touch_layout_uses_joystick() {
        let script = Script::from_json(
            r#"[{"frames": 1, "left": true, "joystick": [0.5, -0.5]}]"#,
            InputLayout::Touch,
        )
        .unwrap();
        let intent = script.intents().next().unwrap();
        assert_eq!((intent.move_x, intent.move_z), (1, 1));
    }

    #[test]
    fn test_rejects_missing_frames() {
        assert!(Script::from_json(r#"[{"up": true}]"#, InputLayout::Desktop).is_err());
    }

    #[test]
    fn test_demo_length() {
        assert_eq!(Script::demo().total_frames(), 456);
    }
}
