//! Game state and core simulation types
//!
//! Everything one jump rope session mutates lives here, owned by the game
//! loop for the lifetime of the session. Nothing is global.

use serde::{Deserialize, Serialize};

use super::collision::{DangerZone, GameStatus};
use super::player::PlayerState;
use super::rope::RopeState;
use super::score::ScoreLatch;
use crate::tuning::Tuning;

/// Notable things that happened during a tick (for logging and HUD effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    Scored { score: u32 },
    GameOver { score: u32 },
}

/// Complete state of a jump rope session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub rope: RopeState,
    pub latch: ScoreLatch,
    pub player: PlayerState,
    pub danger: DangerZone,
    pub status: GameStatus,
    /// Latch fires past this angle
    pub score_threshold: f32,
    /// Latch re-arms below this angle
    pub rearm_threshold: f32,
    /// Score the session started with
    pub initial_score: u32,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl GameState {
    /// Fresh session: rope at 0°, grounded player, latch armed
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rope: RopeState::new(tuning.rope_start_speed, tuning.rope_speed_increment),
            latch: ScoreLatch::new(tuning.initial_score),
            player: PlayerState::new(tuning.gravity, tuning.jump_impulse),
            danger: DangerZone {
                start: tuning.danger_band_start,
                end: tuning.danger_band_end,
                clearance: tuning.clearance_height,
            },
            status: GameStatus::Running,
            score_threshold: tuning.score_threshold,
            rearm_threshold: tuning.rearm_threshold,
            initial_score: tuning.initial_score,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.latch.score
    }

    /// Points earned this session (what the HUD shows)
    #[inline]
    pub fn jumps_cleared(&self) -> u32 {
        self.latch.score.saturating_sub(self.initial_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_session_from_defaults() {
        let state = GameState::default();
        assert_eq!(state.rope.angle_degrees, 0.0);
        assert_eq!(state.rope.angular_speed, ROPE_START_SPEED);
        assert!(state.latch.armed);
        assert_eq!(state.score(), INITIAL_SCORE);
        assert_eq!(state.jumps_cleared(), 0);
        assert!(!state.player.airborne);
        assert!(!state.is_over());
    }

    #[test]
    fn test_session_uses_tuning() {
        let tuning = Tuning {
            rope_start_speed: 90.0,
            initial_score: 0,
            clearance_height: 0.2,
            ..Tuning::default()
        };
        let state = GameState::new(&tuning);
        assert_eq!(state.rope.angular_speed, 90.0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.danger.clearance, 0.2);
    }
}
