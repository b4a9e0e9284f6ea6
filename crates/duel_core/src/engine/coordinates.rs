//! Planar vector helpers
//!
//! The pitch is the x/z ground plane; height (y) is tracked separately on
//! the ball only. Positions and velocities are plain `(x, z)` tuples.

/// Position on the ground plane
/// - .0 = x (touchline to touchline)
/// - .1 = z (defended goal negative, attacker's end positive)
pub type FieldPos = (f32, f32);

/// Planar vector (velocity, direction)
pub type Vec2 = (f32, f32);

/// Vectors shorter than this are treated as zero
pub const EPSILON: f32 = 1e-4;

#[inline]
pub fn length(v: Vec2) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

#[inline]
pub fn distance(a: FieldPos, b: FieldPos) -> f32 {
    length(sub(a, b))
}

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    (a.0 + b.0, a.1 + b.1)
}

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    (a.0 - b.0, a.1 - b.1)
}

#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    (v.0 * s, v.1 * s)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.0 * b.0 + a.1 * b.1
}

/// Unit vector, or `None` for a (near) zero-length input.
#[inline]
pub fn try_normalize(v: Vec2) -> Option<Vec2> {
    let len = length(v);
    if len < EPSILON || !len.is_finite() {
        None
    } else {
        Some((v.0 / len, v.1 / len))
    }
}

/// Unit vector, or zero for a (near) zero-length input.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    try_normalize(v).unwrap_or((0.0, 0.0))
}

/// Heading in radians for a planar direction.
///
/// 0 faces toward -z (the defended goal), positive angles turn toward +x.
#[inline]
pub fn facing_radians(dir: Vec2) -> f32 {
    dir.0.atan2(-dir.1)
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_not_normalized() {
        assert_eq!(try_normalize((0.0, 0.0)), None);
        assert_eq!(normalize_or_zero((0.0, 0.0)), (0.0, 0.0));
    }

    #[test]
    fn test_normalize_diagonal() {
        let n = try_normalize((1.0, -1.0)).unwrap();
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n.0 - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_facing_forward_is_zero() {
        assert_eq!(facing_radians((0.0, -1.0)), 0.0);
        assert!((facing_radians((1.0, 0.0)) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((facing_radians((0.0, 1.0)).abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    }
}
