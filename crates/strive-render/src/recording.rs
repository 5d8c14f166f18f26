//! Headless renderer that records every call and keeps a native transform
//! the way a real canvas does.
//!
//! Used by tests to check that the tracked basis and the renderer's own
//! transform agree, and by the headless demo to show what a frame draws.

use crate::renderer::Renderer;
use glam::{DMat4, DVec3, DVec4};
use kurbo::{Affine, Point};
use strive_core::{BasisMatrix, ColorMode, Dimensionality, Surface};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Translate {
        dx: f64,
        dy: f64,
        dz: Option<f64>,
    },
    Rotate {
        radians: f64,
        axis: Option<DVec3>,
    },
    Scale {
        sx: f64,
        sy: f64,
        sz: f64,
    },
    Push,
    Pop,
    ResetTransform,
    /// Text with its anchor in device space and whether glyphs end up upright.
    Text {
        value: String,
        x: f64,
        y: f64,
        device: Point,
        upright: bool,
    },
    Fill(String),
    Circle {
        x: f64,
        y: f64,
        diameter: f64,
        device: Point,
    },
    ColorMode(ColorMode),
    RefreshCamera,
}

/// The renderer's own column-vector transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeTransform {
    Planar(Affine),
    Spatial(DMat4),
}

impl NativeTransform {
    fn identity(dimensionality: Dimensionality) -> Self {
        match dimensionality {
            Dimensionality::Planar => Self::Planar(Affine::IDENTITY),
            Dimensionality::Spatial => Self::Spatial(DMat4::IDENTITY),
        }
    }

    fn apply(&self, x: f64, y: f64) -> Point {
        match self {
            Self::Planar(a) => *a * Point::new(x, y),
            Self::Spatial(m) => {
                let p = m.transform_point3(DVec3::new(x, y, 0.0));
                Point::new(p.x, p.y)
            }
        }
    }

    /// Whether the device y axis still points the same way as the local one.
    fn upright(&self) -> bool {
        match self {
            Self::Planar(a) => a.as_coeffs()[3] > 0.0,
            Self::Spatial(m) => m.y_axis.y > 0.0,
        }
    }
}

/// Recording renderer.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    surface: Surface,
    native: NativeTransform,
    saved: Vec<NativeTransform>,
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            native: NativeTransform::identity(surface.dimensionality),
            saved: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn planar(width: f64, height: f64) -> Self {
        Self::new(Surface::planar(width, height))
    }

    pub fn spatial(width: f64, height: f64) -> Self {
        Self::new(Surface::spatial(width, height))
    }

    /// Simulate a host resize or surface switch. Takes effect for the
    /// native transform at the next reset.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn native(&self) -> NativeTransform {
        self.native
    }

    /// Depth of the native save stack.
    pub fn native_depth(&self) -> usize {
        self.saved.len()
    }

    /// Recorded text calls as `(value, device anchor, upright)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, bool)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text {
                value,
                device,
                upright,
                ..
            } => Some((value.as_str(), *device, *upright)),
            _ => None,
        })
    }

    /// `true` when the native transform equals the tracked `basis` within
    /// `tolerance` (the basis is the transpose of the native matrix).
    pub fn native_matches(&self, basis: &BasisMatrix, tolerance: f64) -> bool {
        match (&self.native, basis) {
            (NativeTransform::Planar(native), BasisMatrix::Planar(_)) => {
                let Some(tracked) = basis.to_affine() else {
                    return false;
                };
                native
                    .as_coeffs()
                    .iter()
                    .zip(tracked.as_coeffs())
                    .all(|(n, t)| (n - t).abs() <= tolerance)
            }
            (NativeTransform::Spatial(native), BasisMatrix::Spatial(tracked)) => {
                native.abs_diff_eq(tracked.transpose(), tolerance)
            }
            _ => false,
        }
    }

    fn post_multiply(&mut self, planar: Affine, spatial: DMat4) {
        self.native = match self.native {
            NativeTransform::Planar(a) => NativeTransform::Planar(a * planar),
            NativeTransform::Spatial(m) => NativeTransform::Spatial(m * spatial),
        };
    }
}

impl Renderer for RecordingRenderer {
    fn surface(&self) -> Surface {
        self.surface
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) {
        self.calls.push(DrawCall::Translate { dx, dy, dz });
        self.post_multiply(
            Affine::translate((dx, dy)),
            DMat4::from_translation(DVec3::new(dx, dy, dz.unwrap_or(0.0))),
        );
    }

    fn rotate(&mut self, radians: f64, axis: Option<DVec3>) {
        self.calls.push(DrawCall::Rotate { radians, axis });
        let axis = axis.unwrap_or(DVec3::Z).normalize_or_zero();
        self.post_multiply(
            Affine::rotate(radians),
            DMat4::from_axis_angle(axis, radians),
        );
    }

    fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.calls.push(DrawCall::Scale { sx, sy, sz });
        self.post_multiply(
            Affine::scale_non_uniform(sx, sy),
            DMat4::from_diagonal(DVec4::new(sx, sy, sz, 1.0)),
        );
    }

    fn native_push(&mut self) {
        self.calls.push(DrawCall::Push);
        self.saved.push(self.native);
    }

    fn native_pop(&mut self) {
        self.calls.push(DrawCall::Pop);
        if let Some(native) = self.saved.pop() {
            self.native = native;
        }
    }

    fn reset_transform(&mut self) {
        self.calls.push(DrawCall::ResetTransform);
        self.native = NativeTransform::identity(self.surface.dimensionality);
    }

    fn draw_text(&mut self, value: &str, x: f64, y: f64) {
        log::trace!("TEXT {value:?} at ({x}, {y})");
        self.calls.push(DrawCall::Text {
            value: value.to_string(),
            x,
            y,
            device: self.native.apply(x, y),
            upright: self.native.upright(),
        });
    }

    fn fill(&mut self, color: &str) {
        self.calls.push(DrawCall::Fill(color.to_string()));
    }

    fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        log::trace!("CIRCLE ({x}, {y}) d={diameter}");
        self.calls.push(DrawCall::Circle {
            x,
            y,
            diameter,
            device: self.native.apply(x, y),
        });
    }

    fn set_color_mode(&mut self, mode: ColorMode) {
        self.calls.push(DrawCall::ColorMode(mode));
    }

    fn refresh_camera(&mut self) {
        self.calls.push(DrawCall::RefreshCamera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_on_empty_stack_keeps_transform() {
        let mut r = RecordingRenderer::planar(100.0, 100.0);
        r.translate(5.0, 5.0, None);
        r.native_pop();
        assert_eq!(r.native(), NativeTransform::Planar(Affine::translate((5.0, 5.0))));
    }

    #[test]
    fn text_reports_device_anchor() {
        let mut r = RecordingRenderer::planar(100.0, 100.0);
        r.translate(10.0, 20.0, None);
        r.scale(2.0, 2.0, 1.0);
        r.draw_text("hi", 1.0, 1.0);
        let (value, device, upright) = r.texts().next().unwrap();
        assert_eq!(value, "hi");
        assert_eq!(device, Point::new(12.0, 22.0));
        assert!(upright);
    }
}
