//! Canvas2D renderer: forwards tracked calls to a `CanvasRenderingContext2d`.
//!
//! Canvas methods that return `Result` only fail on invalid arguments
//! (non-finite numbers), which the tracker already rejects, so their errors
//! are discarded.

use std::f64::consts::TAU;
use strive_core::{DVec3, Surface};
use strive_render::Renderer;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Renderer for CanvasRenderer {
    fn surface(&self) -> Surface {
        Surface::planar(self.width, self.height)
    }

    fn translate(&mut self, dx: f64, dy: f64, _dz: Option<f64>) {
        let _ = self.ctx.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64, _axis: Option<DVec3>) {
        let _ = self.ctx.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64, _sz: f64) {
        let _ = self.ctx.scale(sx, sy);
    }

    fn native_push(&mut self) {
        self.ctx.save();
    }

    fn native_pop(&mut self) {
        self.ctx.restore();
    }

    fn reset_transform(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    fn draw_text(&mut self, value: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(value, x, y);
    }

    fn fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, diameter / 2.0, 0.0, TAU);
        self.ctx.fill();
        self.ctx.stroke();
    }
}
