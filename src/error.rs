//! Crate-wide error type
//!
//! The simulation itself never fails; errors only come from configuration
//! and from the rendering collaborator refusing to start.

/// Errors surfaced at the edges of the game (config, renderer startup)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),

    #[error("Invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("Failed to read tuning file: {0}")]
    TuningIo(#[from] std::io::Error),

    #[error("Renderer unavailable: {0}")]
    RendererUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
