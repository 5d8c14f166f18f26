//! Capability interface of the host drawing API.
//!
//! The decorator in [`crate::tracked`] only ever talks to the host through
//! this trait. Implementations forward each call to their native context and
//! keep no transform state of their own beyond what the native context keeps.

use strive_core::{ColorMode, DVec3, Surface};

/// What the transform layer needs from an immediate-mode renderer.
pub trait Renderer {
    /// Current surface size and dimensionality.
    fn surface(&self) -> Surface;

    /// Native translate. `dz` is only passed on spatial surfaces.
    fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>);

    /// Native rotate. The angle is always in radians; `axis` is only passed
    /// on spatial surfaces.
    fn rotate(&mut self, radians: f64, axis: Option<DVec3>);

    /// Native scale with fully resolved per-axis factors.
    fn scale(&mut self, sx: f64, sy: f64, sz: f64);

    /// Save the native drawing state.
    fn native_push(&mut self);

    /// Restore the native drawing state saved by the matching push.
    fn native_pop(&mut self);

    /// Reset the native transform to identity (end of frame).
    fn reset_transform(&mut self);

    /// Draw `value` with its anchor at `(x, y)` in the current space.
    fn draw_text(&mut self, value: &str, x: f64, y: f64);

    /// Set the fill color used by subsequent shapes.
    fn fill(&mut self, color: &str);

    /// Draw a filled circle centred at `(x, y)`.
    fn circle(&mut self, x: f64, y: f64, diameter: f64);

    /// Switch color interpretation.
    fn set_color_mode(&mut self, _mode: ColorMode) {}

    /// Re-apply the camera position on 3D surfaces before drawing. Needed by
    /// hosts whose camera matrix goes stale after the ambient flip.
    fn refresh_camera(&mut self) {}
}
