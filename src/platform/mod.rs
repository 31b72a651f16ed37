//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic frame timestamps)
//! - Input events (keys to game events)

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
#[cfg(target_arch = "wasm32")]
pub use clock::PerformanceClock;
pub use input::InputEvent;
