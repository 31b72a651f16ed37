//! Rope Jump - a jump rope timing game and a spinning scene demo
//!
//! Core modules:
//! - `sim`: Frame-time simulation (rope, jump physics, scoring, collision)
//! - `game_loop`: Per-frame session driver with clock and renderer seams
//! - `renderer`: Frame parameters handed to the drawing collaborator
//! - `platform`: Browser/native platform abstraction (time, input)
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use game_loop::{GameLoop, LoopPhase, Simulation};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame length at 60 fps (milliseconds)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Rope angular speed at session start (degrees/second)
    pub const ROPE_START_SPEED: f32 = 60.0;
    /// Added to the rope speed on every frame, never reset
    pub const ROPE_SPEED_INCREMENT: f32 = 0.15;

    /// Upward velocity given by a jump (units/second)
    pub const JUMP_IMPULSE: f32 = 2.0;
    /// Constant vertical acceleration (units/s²)
    pub const GRAVITY: f32 = -5.0;

    /// Armed latch scores once the rope passes this angle
    pub const SCORE_THRESHOLD: f32 = 270.0;
    /// Latch re-arms while the rope is below this angle
    pub const REARM_THRESHOLD: f32 = 269.0;

    /// Rope angles strictly inside this band can hit the player
    pub const DANGER_BAND_START: f32 = 255.0;
    pub const DANGER_BAND_END: f32 = 285.0;
    /// Player must be at least this high to clear the rope
    pub const CLEARANCE_HEIGHT: f32 = 0.05;

    /// Score at session start
    pub const INITIAL_SCORE: u32 = 1;

    /// Distance of the rope marker from the rotation center
    pub const ROPE_RADIUS: f32 = 0.7;
    /// Resting vertical position of the player
    pub const PLAYER_REST_Y: f32 = -0.6;

    /// Camera heading at scene start (degrees, looking down -z)
    pub const CAMERA_START_ANGLE: f32 = 270.0;
    /// Degrees turned per camera input event
    pub const CAMERA_STEP: f32 = 1.0;
    /// Spin speed of the scene blocks (degrees/second)
    pub const SCENE_SPIN_SPEED: f32 = 30.0;

    /// Autopilot jumps this many seconds of rope travel before the band
    pub const AUTOPILOT_LEAD_SECS: f32 = 0.1;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
