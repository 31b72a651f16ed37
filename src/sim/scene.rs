//! Spinning block scene
//!
//! A ground plane with solid blocks turning at a constant speed around the
//! vertical axis, viewed by a camera the player can turn left and right.
//! The scene has no end condition.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::camera::CameraState;
use super::rope::RopeState;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Frame parameters for the scene renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    /// Block rotation around the vertical axis (degrees)
    pub spin_degrees: f32,
    pub camera_angle_degrees: f32,
    /// Unit look direction on the ground plane
    pub camera_direction: Vec3,
}

/// State of the spinning scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    pub spinner: RopeState,
    pub camera: CameraState,
    pub time_ticks: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl SceneState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spinner: RopeState::constant(tuning.scene_spin_speed),
            camera: CameraState::new(tuning.camera_start_angle, tuning.camera_step),
            time_ticks: 0,
        }
    }

    /// Apply camera input, then spin the blocks by `delta_ms`
    pub fn advance(&mut self, input: &TickInput, delta_ms: f32) {
        self.camera.turn(input.camera_steps);
        self.spinner.advance(delta_ms);
        self.time_ticks += 1;
    }

    pub fn frame(&self) -> SceneFrame {
        SceneFrame {
            spin_degrees: self.spinner.angle_degrees,
            camera_angle_degrees: self.camera.angle_degrees,
            camera_direction: self.camera.direction(),
        }
    }
}
