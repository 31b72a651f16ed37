//! Player jump physics
//!
//! Explicit Euler with the position step taken from the pre-update velocity.
//! Landing is only detected once the height is already negative at the
//! start of a step, so the player dips briefly below the ground and lands
//! one frame late.

use serde::{Deserialize, Serialize};

use super::rope::clamp_delta;

/// Vertical state of the jumping player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub airborne: bool,
    /// Vertical velocity, positive is up
    pub velocity: f32,
    /// Height above the ground (may dip below 0 for one frame before landing)
    pub height: f32,
    /// Constant vertical acceleration, negative
    pub gravity: f32,
    /// Velocity given by a jump
    pub jump_impulse: f32,
}

impl PlayerState {
    /// Grounded player
    pub fn new(gravity: f32, jump_impulse: f32) -> Self {
        Self {
            airborne: false,
            velocity: 0.0,
            height: 0.0,
            gravity,
            jump_impulse,
        }
    }

    /// Start a jump; returns false (and changes nothing) if already airborne
    pub fn trigger_jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = self.jump_impulse;
        self.height = 0.0;
        true
    }

    /// Advance the jump by `delta_ms`; returns true on the frame the player lands
    pub fn integrate(&mut self, delta_ms: f32) -> bool {
        if !self.airborne {
            return false;
        }

        if self.height < 0.0 {
            self.land();
            return true;
        }

        let dt = clamp_delta(delta_ms) / 1000.0;
        let new_height = self.height + self.velocity * dt;
        self.velocity += self.gravity * dt;
        self.height = new_height;
        false
    }

    fn land(&mut self) {
        self.airborne = false;
        self.height = 0.0;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRAME_MS, GRAVITY, JUMP_IMPULSE};

    fn player() -> PlayerState {
        PlayerState::new(GRAVITY, JUMP_IMPULSE)
    }

    #[test]
    fn test_trigger_jump_from_ground() {
        let mut p = player();
        assert!(p.trigger_jump());
        assert!(p.airborne);
        assert_eq!(p.velocity, JUMP_IMPULSE);
        assert_eq!(p.height, 0.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut p = player();
        p.trigger_jump();
        p.integrate(100.0);
        let before = p;
        assert!(!p.trigger_jump());
        assert_eq!(p, before);
    }

    #[test]
    fn test_position_uses_pre_update_velocity() {
        let mut p = player();
        p.trigger_jump();
        p.integrate(100.0);
        // 0 + 2.0 * 0.1, not (2.0 - 0.5) * 0.1
        assert!((p.height - 0.2).abs() < 1e-6);
        assert!((p.velocity - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_jump_lands_with_zeroed_state() {
        let mut p = player();
        p.trigger_jump();

        let mut landed_at = None;
        for frame in 0..1000 {
            if p.integrate(FRAME_MS) {
                landed_at = Some(frame);
                break;
            }
        }

        assert!(landed_at.is_some(), "jump never landed");
        assert!(!p.airborne);
        assert_eq!(p.velocity, 0.0);
        assert_eq!(p.height, 0.0);
    }

    #[test]
    fn test_sub_zero_excursion_before_landing() {
        let mut p = player();
        p.trigger_jump();

        let mut lowest = 0.0f32;
        while p.airborne {
            p.integrate(FRAME_MS);
            lowest = lowest.min(p.height);
        }
        // One frame was spent below the ground before the landing frame
        assert!(lowest < 0.0);
    }

    #[test]
    fn test_large_delta_lands_after_dipping_below_ground() {
        let mut p = player();
        p.trigger_jump();
        // Height moves with the pre-update velocity, so a long stall throws
        // the player up first while gravity already points the velocity down
        assert!(!p.integrate(10_000.0));
        assert!(p.height > 0.0);
        assert!(p.velocity < 0.0);

        let mut frames = 0;
        while p.height >= 0.0 {
            assert!(!p.integrate(FRAME_MS));
            frames += 1;
            assert!(frames < 100_000, "player never came down");
        }
        assert!(p.airborne);

        assert!(p.integrate(FRAME_MS));
        assert!(!p.airborne);
        assert_eq!(p.height, 0.0);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_integrate_grounded_is_noop() {
        let mut p = player();
        assert!(!p.integrate(FRAME_MS));
        assert_eq!(p, player());
    }
}
