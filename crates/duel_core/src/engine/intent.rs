//! Normalized per-frame input intent
//!
//! The core consumes only [`Intent`]. [`IntentResolver`] folds raw key and
//! joystick state into it for hosts that do not want their own mapping.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    /// -1 left, 0, +1 right
    pub move_x: i8,
    /// -1 toward the defended goal, 0, +1 back
    pub move_z: i8,
    pub sprint: bool,
    pub kick_held: bool,
}

impl Intent {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Axis values folded to their sign.
    pub fn sanitized(self) -> Self {
        Self { move_x: self.move_x.signum(), move_z: self.move_z.signum(), ..self }
    }

    pub fn is_moving(&self) -> bool {
        self.move_x != 0 || self.move_z != 0
    }

    /// Raw (unnormalized) movement vector
    pub fn movement(&self) -> (f32, f32) {
        (self.move_x as f32, self.move_z as f32)
    }
}

/// Raw key flags from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub kick: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputLayout {
    /// Keys and joystick both steer
    #[default]
    Desktop,
    /// Only the on-screen joystick steers
    Touch,
}

pub struct IntentResolver;

impl IntentResolver {
    /// `joystick` is `(x, y)` with y > 0 pushing forward.
    pub fn resolve(keys: KeyState, joystick: (f32, f32), layout: InputLayout) -> Intent {
        let (jx, jy) = joystick;
        let steer_keys = layout == InputLayout::Desktop;

        let mut move_x = 0i8;
        let mut move_z = 0i8;
        if (steer_keys && keys.up) || jy > 0.0 {
            move_z -= 1;
        }
        if (steer_keys && keys.down) || jy < 0.0 {
            move_z += 1;
        }
        if (steer_keys && keys.left) || jx < 0.0 {
            move_x -= 1;
        }
        if (steer_keys && keys.right) || jx > 0.0 {
            move_x += 1;
        }

        Intent { move_x, move_z, sprint: keys.sprint, kick_held: keys.kick }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_key_moves_forward() {
        let keys = KeyState { up: true, ..KeyState::default() };
        let intent = IntentResolver::resolve(keys, (0.0, 0.0), InputLayout::Desktop);
        assert_eq!(intent.move_z, -1);
        assert_eq!(intent.move_x, 0);
    }

    #[test]
    fn test_conflicting_keys_cancel() {
        let keys =
            KeyState { up: true, down: true, left: true, right: true, ..KeyState::default() };
        let intent = IntentResolver::resolve(keys, (0.0, 0.0), InputLayout::Desktop);
        assert!(!intent.is_moving());
    }

    #[test]
    fn test_touch_layout_ignores_movement_keys() {
        let keys = KeyState { left: true, kick: true, ..KeyState::default() };
        let intent = IntentResolver::resolve(keys, (0.0, 0.6), InputLayout::Touch);
        assert_eq!(intent.move_x, 0);
        assert_eq!(intent.move_z, -1);
        assert!(intent.kick_held);
    }

    #[test]
    fn test_sanitized_clamps_axes() {
        let intent = Intent { move_x: 5, move_z: -3, ..Intent::idle() }.sanitized();
        assert_eq!((intent.move_x, intent.move_z), (1, -1));
    }
}
