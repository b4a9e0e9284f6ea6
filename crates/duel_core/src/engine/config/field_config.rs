//! Field geometry

use serde::{Deserialize, Serialize};

/// Static field bounds, immutable for a match.
///
/// Coordinates are centered on the kickoff circle: x runs touchline to
/// touchline, z runs from the defended goal (negative) to the attacker's
/// end (positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Half of the field width along x (default: 25)
    pub half_width: f32,
    /// Half of the field length along z (default: 15)
    pub half_length: f32,
    /// Half of the goal mouth used for scoring (default: 5)
    pub goal_half_width: f32,
    /// z of the goal line (default: -15)
    pub goal_line_z: f32,
    /// Half of the back-wall span that lets the ball through (default: 5)
    pub wall_gap_half_width: f32,
    /// Depth of the net behind the goal line (default: 1)
    pub goal_depth: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            half_width: 25.0,
            half_length: 15.0,
            goal_half_width: 5.0,
            goal_line_z: -15.0,
            wall_gap_half_width: 5.0,
            goal_depth: 1.0,
        }
    }
}

impl FieldConfig {
    /// Clamp a planar position inside the playable area.
    #[inline]
    pub fn clamp(&self, pos: (f32, f32)) -> (f32, f32) {
        (
            pos.0.clamp(-self.half_width, self.half_width),
            pos.1.clamp(-self.half_length, self.half_length),
        )
    }

    /// Whether a planar position lies inside the playable area.
    #[inline]
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0.abs() <= self.half_width && pos.1.abs() <= self.half_length
    }

    /// Deepest z the ball can reach behind the goal line.
    #[inline]
    pub fn net_z(&self) -> f32 {
        self.goal_line_z - self.goal_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_inside() {
        let field = FieldConfig::default();
        assert_eq!(field.clamp((30.0, -20.0)), (25.0, -15.0));
        assert_eq!(field.clamp((1.0, 2.0)), (1.0, 2.0));
    }

    #[test]
    fn test_net_behind_goal_line() {
        let field = FieldConfig::default();
        assert_eq!(field.net_z(), -16.0);
        assert!(!field.contains((0.0, -15.5)));
    }
}
