//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from JSON. Missing fields keep
//! their defaults from [`crate::consts`]. On the web the document lives in
//! LocalStorage; natively it is a file named by `ROPE_JUMP_TUNING`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Rope ===
    /// Rope angular speed at session start (degrees/second)
    pub rope_start_speed: f32,
    /// Speed added on every frame
    pub rope_speed_increment: f32,

    // === Player ===
    /// Upward velocity of a jump
    pub jump_impulse: f32,
    /// Vertical acceleration (must be negative)
    pub gravity: f32,

    // === Scoring ===
    pub score_threshold: f32,
    pub rearm_threshold: f32,
    pub initial_score: u32,

    // === Collision ===
    pub danger_band_start: f32,
    pub danger_band_end: f32,
    pub clearance_height: f32,

    // === Scene ===
    pub camera_start_angle: f32,
    pub camera_step: f32,
    pub scene_spin_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rope_start_speed: ROPE_START_SPEED,
            rope_speed_increment: ROPE_SPEED_INCREMENT,

            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,

            score_threshold: SCORE_THRESHOLD,
            rearm_threshold: REARM_THRESHOLD,
            initial_score: INITIAL_SCORE,

            danger_band_start: DANGER_BAND_START,
            danger_band_end: DANGER_BAND_END,
            clearance_height: CLEARANCE_HEIGHT,

            camera_start_angle: CAMERA_START_ANGLE,
            camera_step: CAMERA_STEP,
            scene_spin_speed: SCENE_SPIN_SPEED,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidTuning {
        field,
        reason: reason.into(),
    }
}

fn check_angle(field: &'static str, value: f32) -> Result<()> {
    if (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is outside [0, 360)")))
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("rope_start_speed", self.rope_start_speed),
            ("rope_speed_increment", self.rope_speed_increment),
            ("jump_impulse", self.jump_impulse),
            ("gravity", self.gravity),
            ("clearance_height", self.clearance_height),
            ("camera_step", self.camera_step),
            ("scene_spin_speed", self.scene_spin_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.rope_start_speed < 0.0 {
            return Err(invalid("rope_start_speed", "must not be negative"));
        }
        // Speed may only ever grow
        if self.rope_speed_increment < 0.0 {
            return Err(invalid("rope_speed_increment", "must not be negative"));
        }
        if self.jump_impulse <= 0.0 {
            return Err(invalid("jump_impulse", "must be positive"));
        }
        if self.gravity >= 0.0 {
            return Err(invalid("gravity", "must be negative"));
        }

        check_angle("score_threshold", self.score_threshold)?;
        check_angle("rearm_threshold", self.rearm_threshold)?;
        if self.rearm_threshold > self.score_threshold {
            return Err(invalid(
                "rearm_threshold",
                "must not exceed score_threshold",
            ));
        }

        check_angle("danger_band_start", self.danger_band_start)?;
        check_angle("danger_band_end", self.danger_band_end)?;
        if self.danger_band_start >= self.danger_band_end {
            return Err(invalid(
                "danger_band_start",
                "must be below danger_band_end",
            ));
        }
        if self.clearance_height < 0.0 {
            return Err(invalid("clearance_height", "must not be negative"));
        }

        if !self.camera_start_angle.is_finite() {
            return Err(invalid("camera_start_angle", "must be finite"));
        }
        if self.camera_step <= 0.0 {
            return Err(invalid("camera_step", "must be positive"));
        }
        if self.scene_spin_speed < 0.0 {
            return Err(invalid("scene_spin_speed", "must not be negative"));
        }

        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "rope_jump_tuning";
    /// Names the tuning file on native builds
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_VAR: &'static str = "ROPE_JUMP_TUNING";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from the file named by `ROPE_JUMP_TUNING`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_path(std::path::Path::new(&path)) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Read and validate a tuning file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "jump_impulse": 3.0 }"#).unwrap();
        assert_eq!(tuning.jump_impulse, 3.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.initial_score, INITIAL_SCORE);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": 1.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_decelerating_rope() {
        let err = Tuning::from_json(r#"{ "rope_speed_increment": -0.1 }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "rope_speed_increment",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let err = Tuning::from_json(r#"{ "danger_band_start": 290.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "danger_band_start",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::TuningParse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_path_reads_tuning_file() {
        let path = std::env::temp_dir().join(format!("rope_jump_tuning_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "rope_start_speed": 90.0 }"#).unwrap();
        let loaded = Tuning::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().rope_start_speed, 90.0);

        assert_eq!(Tuning::ENV_VAR, "ROPE_JUMP_TUNING");
        let err = Tuning::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::TuningIo(_)));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&Tuning::default()).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }
}
