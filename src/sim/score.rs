//! Scoring latch
//!
//! A point is awarded the first time the rope passes the score threshold on
//! each lap. The latch disarms when it fires and only re-arms once the rope
//! is back in the low part of the circle, so a slow frame rate (several
//! frames past the threshold) or a fast one (skipping the re-arm gap) still
//! yields exactly one point per lap.

use serde::{Deserialize, Serialize};

/// One-shot scoring guard plus the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLatch {
    pub armed: bool,
    pub score: u32,
}

impl ScoreLatch {
    pub fn new(initial_score: u32) -> Self {
        Self {
            armed: true,
            score: initial_score,
        }
    }

    /// Update the latch for a new rope angle; returns true if a point was scored
    ///
    /// Re-arms while `0 < angle < rearm_threshold`, fires when armed and
    /// `angle > score_threshold`.
    pub fn check_and_score(
        &mut self,
        angle_degrees: f32,
        rearm_threshold: f32,
        score_threshold: f32,
    ) -> bool {
        if angle_degrees > 0.0 && angle_degrees < rearm_threshold {
            self.armed = true;
        }

        if self.armed && angle_degrees > score_threshold {
            self.score += 1;
            self.armed = false;
            return true;
        }

        false
    }
}
