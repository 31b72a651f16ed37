//! Rope rotation
//!
//! The rope sweeps a full circle around the player. Its angular speed grows
//! by a fixed amount every frame for the whole session, so the game gets
//! steadily harder and never eases off.

use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Rotation state of the rope (or any spinning prop)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RopeState {
    /// Current angle in degrees, always in [0, 360)
    pub angle_degrees: f32,
    /// Angular speed in degrees/second
    pub angular_speed: f32,
    /// Added to `angular_speed` on every advance
    pub speed_increment: f32,
}

impl RopeState {
    /// Rope starting at angle 0 with the given speed and per-frame speed-up
    pub fn new(angular_speed: f32, speed_increment: f32) -> Self {
        Self {
            angle_degrees: 0.0,
            angular_speed,
            speed_increment,
        }
    }

    /// Spinner that keeps a constant speed
    pub fn constant(angular_speed: f32) -> Self {
        Self::new(angular_speed, 0.0)
    }

    /// Advance the angle by `delta_ms` of travel, then speed up
    ///
    /// Negative or non-finite deltas count as zero elapsed time; the speed-up
    /// still applies because it is per call, not per unit time.
    pub fn advance(&mut self, delta_ms: f32) {
        let delta_ms = clamp_delta(delta_ms);
        // Whole laps are dropped in f64 so huge deltas cannot overflow
        let travel = (self.angular_speed as f64 * delta_ms as f64 / 1000.0) % 360.0;
        self.angle_degrees = normalize_degrees(self.angle_degrees + travel as f32);
        self.angular_speed += self.speed_increment;
    }
}

/// Clamp a frame delta to a usable non-negative value
#[inline]
pub fn clamp_delta(delta_ms: f32) -> f32 {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    }
}
