//! Rope/player collision
//!
//! The rope hits the player when it sweeps through the band around the
//! bottom of its circle while the player is not high enough to clear it.

use serde::{Deserialize, Serialize};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    /// Terminal, the rope caught the player
    Over,
}

/// Collision band and clearance, taken from tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerZone {
    /// Exclusive lower bound of the band (degrees)
    pub start: f32,
    /// Exclusive upper bound of the band (degrees)
    pub end: f32,
    /// Minimum height that clears the rope
    pub clearance: f32,
}

impl Default for DangerZone {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            start: DANGER_BAND_START,
            end: DANGER_BAND_END,
            clearance: CLEARANCE_HEIGHT,
        }
    }
}

impl DangerZone {
    /// `Over` iff the rope is inside the band and the player is below clearance
    pub fn check_game_over(&self, rope_angle: f32, player_height: f32) -> GameStatus {
        let in_band = rope_angle > self.start && rope_angle < self.end;
        if in_band && player_height < self.clearance {
            GameStatus::Over
        } else {
            GameStatus::Running
        }
    }
}

/// Check against the default band (255°, 285°) and 0.05 clearance
pub fn check_game_over(rope_angle: f32, player_height: f32) -> GameStatus {
    DangerZone::default().check_game_over(rope_angle, player_height)
}
