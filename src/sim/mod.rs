//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time arrives as a per-frame delta in milliseconds
//! - State is owned by the caller, nothing global
//! - One tick runs to completion before the next

pub mod camera;
pub mod collision;
pub mod player;
pub mod rope;
pub mod scene;
pub mod score;
pub mod state;
pub mod tick;

pub use camera::CameraState;
pub use collision::{DangerZone, GameStatus, check_game_over};
pub use player::PlayerState;
pub use rope::{RopeState, clamp_delta};
pub use scene::{SceneFrame, SceneState};
pub use score::ScoreLatch;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
