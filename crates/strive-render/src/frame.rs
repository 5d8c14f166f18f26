//! Three-phase frame contract.
//!
//! A host drives the decorator in this order:
//!
//! 1. [`TrackedRenderer::init`] once, after the surface exists.
//! 2. [`TrackedRenderer::pre_frame`] before the user's draw callback:
//!    composes the ambient coordinate flip and fixes up the 3D camera.
//! 3. The draw callback: any number of transforms, push/pop and pointer
//!    queries.
//! 4. [`TrackedRenderer::post_frame`] after the callback: hard reset of the
//!    basis, whatever the push/pop balance was.
//!
//! [`TrackedRenderer::frame`] runs steps 2–4 around a closure.

use crate::renderer::Renderer;
use crate::tracked::TrackedRenderer;
use strive_core::{CoordinateMode, Result, Scale, TransformError};

/// Where the decorator is in the frame contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// `init` has not run yet.
    Uninitialized,
    /// Between frames.
    Ready,
    /// Inside a draw callback.
    Drawing,
}

impl<R: Renderer> TrackedRenderer<R> {
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// One-time setup. Later calls are ignored.
    pub fn init(&mut self) {
        if self.phase != FramePhase::Uninitialized {
            log::debug!("init() called again, ignoring");
            return;
        }
        self.stack.clear();
        self.inner.reset_transform();
        self.tracker.reset(self.inner.surface().dimensionality);
        self.phase = FramePhase::Ready;
        log::debug!("frame lifecycle initialized");
    }

    /// Start a frame: compose the ambient coordinate flip and refresh the 3D
    /// camera. Fails with [`TransformError::FrameOrder`] before `init`.
    pub fn pre_frame(&mut self) -> Result<()> {
        match self.phase {
            FramePhase::Uninitialized => {
                return Err(TransformError::FrameOrder {
                    operation: "pre_frame",
                });
            }
            FramePhase::Drawing => {
                log::warn!("pre_frame() called inside a frame, closing the previous one");
                self.post_frame();
            }
            FramePhase::Ready => {}
        }

        let surface = self.inner.surface();
        self.phase = FramePhase::Drawing;
        if let Err(err) = self.apply_ambient_coordinate_flip(self.coordinate_mode, surface.height) {
            self.post_frame();
            return Err(err);
        }
        if surface.dimensionality.is_spatial() {
            self.inner.refresh_camera();
        }
        log::trace!("pre_frame ({:?})", self.coordinate_mode);
        Ok(())
    }

    /// End a frame. Unconditionally resets the basis to the identity of the
    /// surface's dimensionality; frames left open by unbalanced pushes are
    /// discarded together with their native state.
    pub fn post_frame(&mut self) {
        if self.phase != FramePhase::Drawing {
            log::warn!("post_frame() called outside a frame");
        }

        let mut dangling = 0;
        while let Some(frame) = self.stack.pop() {
            self.restore_style(frame.style());
            self.inner.native_pop();
            dangling += 1;
        }
        if dangling > 0 {
            log::debug!("discarded {dangling} unbalanced push() frame(s)");
        }

        self.inner.reset_transform();
        self.tracker.reset(self.inner.surface().dimensionality);
        if self.phase != FramePhase::Uninitialized {
            self.phase = FramePhase::Ready;
        }
    }

    /// Run one frame: `pre_frame`, `draw`, `post_frame`. The post-frame
    /// reset runs even when `draw` fails; the draw error is returned.
    pub fn frame<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.pre_frame()?;
        let result = draw(self);
        self.post_frame();
        result
    }

    /// Compose the ambient flip for `mode` through the tracked transforms,
    /// so the renderer receives it too. Planar surfaces also move the origin
    /// down by `height`; spatial ones only flip. Must stay in step with
    /// [`strive_core::BasisTracker::apply_ambient_flip`].
    pub fn apply_ambient_coordinate_flip(&mut self, mode: CoordinateMode, height: f64) -> Result<()> {
        if !mode.flips_vertically() {
            return Ok(());
        }
        self.apply_scale(Scale::Planar(1.0, -1.0))?;
        if !self.tracker.dimensionality().is_spatial() {
            self.apply_translate(0.0, -height, None)?;
        }
        Ok(())
    }
}
