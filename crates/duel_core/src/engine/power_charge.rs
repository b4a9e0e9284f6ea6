//! Power charge
//!
//! Hold to charge, release to kick. Charging starts at 0 on the first held
//! frame, accumulates from the second, and is blocked while sprinting or
//! during the kick lockout.

use super::world::PowerChargeState;

/// Emitted on the frame charging stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeRelease {
    /// Charge at the moment of release (0..=100)
    pub charge: f32,
    /// The kick input was let go; false when sprint or lockout cut the charge
    pub kick_released: bool,
}

pub const MAX_CHARGE: f32 = 100.0;

/// Advance the charge state machine by one step.
pub fn update_power_charge(
    state: &mut PowerChargeState,
    kick_held: bool,
    can_kick: bool,
    sprint_active: bool,
    charge_rate: f32,
    dt: f32,
) -> Option<ChargeRelease> {
    if kick_held && can_kick && !sprint_active {
        if state.charging {
            state.charge = (state.charge + charge_rate * dt).clamp(0.0, MAX_CHARGE);
        } else {
            state.charging = true;
            state.charge = 0.0;
        }
        None
    } else if state.charging {
        let release = ChargeRelease { charge: state.charge, kick_released: !kick_held };
        state.charging = false;
        state.charge = 0.0;
        Some(release)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const RATE: f32 = 120.0;

    #[test]
    fn test_first_frame_starts_at_zero() {
        let mut s = PowerChargeState { charging: false, charge: 42.0 };
        assert!(update_power_charge(&mut s, true, true, false, RATE, DT).is_none());
        assert!(s.charging);
        assert_eq!(s.charge, 0.0);
    }

    #[test]
    fn test_charge_saturates() {
        let mut s = PowerChargeState::default();
        for _ in 0..120 {
            update_power_charge(&mut s, true, true, false, RATE, DT);
        }
        assert_eq!(s.charge, MAX_CHARGE);
    }

    #[test]
    fn test_release_reports_charge_and_resets() {
        let mut s = PowerChargeState::default();
        update_power_charge(&mut s, true, true, false, RATE, DT);
        update_power_charge(&mut s, true, true, false, RATE, 0.25);
        let release = update_power_charge(&mut s, false, true, false, RATE, DT).unwrap();
        assert!((release.charge - 30.0).abs() < 1e-4);
        assert!(release.kick_released);
        assert!(!s.charging);
        assert_eq!(s.charge, 0.0);
    }

    #[test]
    fn test_sprint_interrupts_charge() {
        let mut s = PowerChargeState::default();
        update_power_charge(&mut s, true, true, false, RATE, DT);
        let release = update_power_charge(&mut s, true, true, true, RATE, DT).unwrap();
        assert!(!release.kick_released);
        assert!(!s.charging);
    }

    #[test]
    fn test_locked_out_never_charges() {
        let mut s = PowerChargeState::default();
        assert!(update_power_charge(&mut s, true, false, false, RATE, DT).is_none());
        assert!(!s.charging);
    }
}
