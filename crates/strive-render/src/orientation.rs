//! Orientation guard: text that stays upright whatever the y direction.

use crate::renderer::Renderer;
use crate::tracked::TrackedRenderer;
use strive_core::Scale;

impl<R: Renderer> TrackedRenderer<R> {
    /// `true` iff the basis' vertical scale entry is negative.
    pub fn is_flipped(&self) -> bool {
        self.tracker.is_flipped()
    }

    /// Draw `value` anchored at logical `(x, y)` with upright glyphs.
    ///
    /// When the space is flipped the text is drawn inside a local
    /// counter-flip at `(x, -y)`, which lands on the same device position as
    /// `(x, y)` in the flipped space.
    pub fn responsive_text(&mut self, value: &str, x: f64, y: f64) {
        if !self.is_flipped() {
            self.inner.draw_text(value, x, y);
            return;
        }
        self.push();
        // scale(1, -1) has no zero factor and cannot fail.
        let _ = self.apply_scale(Scale::Planar(1.0, -1.0));
        self.inner.draw_text(value, x, -y);
        self.pop();
    }
}
