//! Per-frame simulation tick
//!
//! Advances a jump rope session by one variable-length frame. The collision
//! check runs before anything moves, against the angle and height left by
//! the previous frame, so a hit is detected one frame after the rope enters
//! the band. The frame that detects the hit still moves the rope and the
//! player but can no longer score.

use super::collision::GameStatus;
use super::state::{GameEvent, GameState};
use crate::consts::AUTOPILOT_LEAD_SECS;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump requested since the last tick (edge-triggered)
    pub jump: bool,
    /// Net camera rotate events since the last tick (negative = left)
    pub camera_steps: i32,
    /// Idle/demo mode - the game jumps on its own
    pub autopilot: bool,
}

impl TickInput {
    /// Forget the one-shot inputs once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
        self.camera_steps = 0;
    }
}

/// Advance the session by `delta_ms`; returns false once the game is over
pub fn tick(state: &mut GameState, input: &TickInput, delta_ms: f32) -> bool {
    state.events.clear();

    if state.is_over() {
        return false;
    }

    let wants_jump = input.jump || (input.autopilot && autopilot_wants_jump(state));
    if wants_jump && state.player.trigger_jump() {
        state.events.push(GameEvent::Jumped);
    }

    // Check-before-move: uses last frame's angle and height
    state.status = state
        .danger
        .check_game_over(state.rope.angle_degrees, state.player.height);

    state.rope.advance(delta_ms);

    if state.status == GameStatus::Running
        && state.latch.check_and_score(
            state.rope.angle_degrees,
            state.rearm_threshold,
            state.score_threshold,
        )
    {
        state.events.push(GameEvent::Scored {
            score: state.latch.score,
        });
    }

    if state.player.airborne && state.player.integrate(delta_ms) {
        state.events.push(GameEvent::Landed);
    }

    state.time_ticks += 1;

    if state.is_over() {
        state.events.push(GameEvent::GameOver {
            score: state.latch.score,
        });
        return false;
    }

    true
}

/// Jump when grounded and the rope is about to enter the collision band
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.player.airborne {
        return false;
    }
    let start = state.danger.start;
    let lead = (state.rope.angular_speed * AUTOPILOT_LEAD_SECS).min(start);
    let angle = state.rope.angle_degrees;
    angle >= start - lead && angle <= start
}
