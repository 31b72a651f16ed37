//! Ground-plane camera heading

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Heading of the scene camera, turned by discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Heading in degrees, in [0, 360)
    pub angle_degrees: f32,
    /// Degrees per rotate event
    pub step: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        use crate::consts::{CAMERA_START_ANGLE, CAMERA_STEP};
        Self::new(CAMERA_START_ANGLE, CAMERA_STEP)
    }
}

impl CameraState {
    pub fn new(angle_degrees: f32, step: f32) -> Self {
        Self {
            angle_degrees: normalize_degrees(angle_degrees),
            step,
        }
    }

    /// Apply a net number of rotate events (negative = left)
    pub fn turn(&mut self, steps: i32) {
        if steps != 0 {
            self.angle_degrees = normalize_degrees(self.angle_degrees + steps as f32 * self.step);
        }
    }

    /// Unit look direction on the ground plane
    pub fn direction(&self) -> Vec3 {
        let theta = self.angle_degrees.to_radians();
        Vec3::new(theta.cos(), 0.0, theta.sin())
    }
}
