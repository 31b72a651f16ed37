//! Renderers without a display

use std::fmt::Debug;

use super::Renderer;

/// Logs every frame at debug level and counts them
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames_drawn: u64,
}

impl<F: Debug> Renderer<F> for LogRenderer {
    fn draw(&mut self, frame: &F) {
        self.frames_drawn += 1;
        log::debug!("frame {}: {:?}", self.frames_drawn, frame);
    }
}

/// Keeps a copy of every frame it is asked to draw
#[derive(Debug)]
pub struct RecordingRenderer<F> {
    pub frames: Vec<F>,
    /// When set, `ready` fails with this message
    pub fail_with: Option<String>,
}

impl<F> Default for RecordingRenderer<F> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            fail_with: None,
        }
    }
}

impl<F> RecordingRenderer<F> {
    /// Renderer whose startup fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            frames: Vec::new(),
            fail_with: Some(message.into()),
        }
    }

    pub fn last(&self) -> Option<&F> {
        self.frames.last()
    }
}

impl<F: Clone> Renderer<F> for RecordingRenderer<F> {
    fn ready(&mut self) -> crate::Result<()> {
        match &self.fail_with {
            Some(message) => Err(crate::Error::RendererUnavailable(message.clone())),
            None => Ok(()),
        }
    }

    fn draw(&mut self, frame: &F) {
        self.frames.push(frame.clone());
    }
}
