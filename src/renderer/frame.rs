//! Per-tick frame parameters for the jump rope game

use glam::Vec2;

use crate::consts::{PLAYER_REST_Y, ROPE_RADIUS};
use crate::polar_to_cartesian;
use crate::sim::GameState;

/// Everything the renderer needs to draw one jump rope frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeFrame {
    /// Rope rotation around the screen center (degrees)
    pub rope_angle_degrees: f32,
    /// Rope marker position (rotated, then pushed out to `ROPE_RADIUS`)
    pub rope_position: Vec2,
    /// Player height above the ground
    pub player_offset: f32,
    /// Player position in clip space
    pub player_position: Vec2,
    pub score: u32,
    /// Points earned this session (shown in the HUD)
    pub jumps_cleared: u32,
    pub over: bool,
}

impl RopeFrame {
    pub fn from_state(state: &GameState) -> Self {
        let angle = state.rope.angle_degrees;
        let offset = state.player.height;
        Self {
            rope_angle_degrees: angle,
            rope_position: polar_to_cartesian(ROPE_RADIUS, angle),
            player_offset: offset,
            player_position: Vec2::new(0.0, PLAYER_REST_Y + offset),
            score: state.score(),
            jumps_cleared: state.jumps_cleared(),
            over: state.is_over(),
        }
    }
}
