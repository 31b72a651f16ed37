//! 2D canvas renderer for the browser build

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::{Renderer, RopeFrame, scene};
use crate::error::{Error, Result};
use crate::sim::SceneFrame;

/// Half-extent of the rope marker in clip space
const ROPE_HALF_SIZE: f32 = 0.05;
/// Half-extent of the player square in clip space
const PLAYER_HALF_SIZE: f32 = 0.1;

mod colors {
    pub const BACKGROUND: &str = "rgb(0, 0, 0)";
    pub const ROPE: &str = "rgb(0, 77, 179)";
    pub const PLAYER: &str = "rgb(0, 153, 102)";
    pub const SKY: &str = "rgb(26, 26, 38)";
    pub const GROUND: &str = "rgb(89, 64, 38)";
}

/// Draws the rope marker and player as squares (score into `#score`), or the
/// spinning scene as painter-sorted quads
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    score_el: Option<Element>,
    last_score: Option<u32>,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            ctx: None,
            score_el: None,
            last_score: None,
        }
    }

    /// Clip space ([-1, 1], y up) to canvas pixels
    fn to_pixels(&self, p: Vec2) -> (f64, f64) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        (w / 2.0 * (1.0 + p.x as f64), h / 2.0 * (1.0 - p.y as f64))
    }

    fn acquire(&mut self) -> Result<()> {
        let ctx = self
            .canvas
            .get_context("2d")
            .map_err(|_| Error::RendererUnavailable("2d context request failed".into()))?
            .ok_or_else(|| Error::RendererUnavailable("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::RendererUnavailable("unexpected context type".into()))?;
        self.ctx = Some(ctx);
        Ok(())
    }

    fn fill_square(&self, ctx: &CanvasRenderingContext2d, center: Vec2, half: f32, color: &str) {
        let (cx, cy) = self.to_pixels(center);
        let hx = half as f64 * self.canvas.width() as f64 / 2.0;
        let hy = half as f64 * self.canvas.height() as f64 / 2.0;
        ctx.set_fill_style_str(color);
        ctx.fill_rect(cx - hx, cy - hy, hx * 2.0, hy * 2.0);
    }
}

impl Renderer<RopeFrame> for CanvasRenderer {
    fn ready(&mut self) -> Result<()> {
        self.acquire()?;
        self.score_el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("score"));
        if self.score_el.is_none() {
            log::warn!("No #score element, HUD disabled");
        }
        Ok(())
    }

    fn draw(&mut self, frame: &RopeFrame) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.set_fill_style_str(colors::BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        self.fill_square(ctx, frame.rope_position, ROPE_HALF_SIZE, colors::ROPE);
        self.fill_square(ctx, frame.player_position, PLAYER_HALF_SIZE, colors::PLAYER);

        if self.last_score != Some(frame.jumps_cleared) {
            if let Some(el) = &self.score_el {
                el.set_text_content(Some(&frame.jumps_cleared.to_string()));
            }
            self.last_score = Some(frame.jumps_cleared);
        }
    }
}

impl Renderer<SceneFrame> for CanvasRenderer {
    fn ready(&mut self) -> Result<()> {
        self.acquire()
    }

    fn draw(&mut self, frame: &SceneFrame) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        // The camera stays level, so the horizon is the middle row
        ctx.set_fill_style_str(colors::SKY);
        ctx.fill_rect(0.0, 0.0, w, h / 2.0);
        ctx.set_fill_style_str(colors::GROUND);
        ctx.fill_rect(0.0, h / 2.0, w, h / 2.0);

        let aspect = if h > 0.0 { (w / h) as f32 } else { 1.0 };
        for polygon in scene::project(frame, aspect) {
            let [r, g, b] = polygon.color;
            ctx.set_fill_style_str(&format!("rgb({r}, {g}, {b})"));
            ctx.begin_path();
            for (i, point) in polygon.points.iter().enumerate() {
                let (x, y) = self.to_pixels(*point);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.close_path();
            ctx.fill();
        }
    }
}
