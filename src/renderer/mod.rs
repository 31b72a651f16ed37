//! Rendering collaborator
//!
//! The simulation never draws. Once per tick the game loop hands the
//! renderer a small frame of already-computed transform parameters.

pub mod frame;
pub mod headless;
pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::RopeFrame;
pub use headless::{LogRenderer, RecordingRenderer};
pub use scene::Polygon;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::error::Result;

/// Something that can draw frames of type `F`
pub trait Renderer<F> {
    /// Acquire drawing resources; an error keeps the loop from starting
    fn ready(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, frame: &F);
}
