//! `TrackedRenderer`: a decorator that mirrors every transform call into a
//! tracked basis before forwarding it to the wrapped renderer.
//!
//! The tracker validates first and the renderer only sees calls the tracker
//! accepted, so the two transforms never drift apart. Push/pop move the
//! tracked stack and the native state in lockstep.

use crate::frame::FramePhase;
use crate::renderer::Renderer;
use strive_core::{
    AngleMode, BasisMatrix, BasisTracker, ColorMode, CoordinateMapper, CoordinateMode, DVec3,
    LogicalPoint, PointerSample, Result, Scale, SketchConfig, StackFrame, StyleSnapshot, Surface,
    TransformError, TransformStack,
};

/// Renderer decorator owning the tracked basis, the transform stack and the
/// sketch modes.
#[derive(Debug)]
pub struct TrackedRenderer<R: Renderer> {
    pub(crate) inner: R,
    pub(crate) tracker: BasisTracker,
    pub(crate) stack: TransformStack,
    pub(crate) style: StyleSnapshot,
    pub(crate) coordinate_mode: CoordinateMode,
    pub(crate) angle_mode: AngleMode,
    pub(crate) phase: FramePhase,
}

impl<R: Renderer> TrackedRenderer<R> {
    /// Wrap `inner` with default sketch modes.
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, SketchConfig::default())
    }

    pub fn with_config(inner: R, config: SketchConfig) -> Self {
        let dimensionality = inner.surface().dimensionality;
        let mut tracked = Self {
            inner,
            tracker: BasisTracker::new(dimensionality),
            stack: TransformStack::new(),
            style: StyleSnapshot::default(),
            coordinate_mode: CoordinateMode::default(),
            angle_mode: AngleMode::default(),
            phase: FramePhase::Uninitialized,
        };
        tracked.apply_config(config);
        tracked
    }

    /// Apply every mode in `config`.
    pub fn apply_config(&mut self, config: SketchConfig) {
        self.coordinate_mode = config.coordinate_mode;
        self.angle_mode = config.angle_mode;
        self.set_color_mode(config.color_mode);
    }

    pub fn config(&self) -> SketchConfig {
        SketchConfig {
            coordinate_mode: self.coordinate_mode,
            angle_mode: self.angle_mode,
            color_mode: self.style.color_mode,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Direct access to the wrapped renderer for drawing calls that don't
    /// touch the transform. Transform calls made here bypass tracking.
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn surface(&self) -> Surface {
        self.inner.surface()
    }

    /// The live tracked basis.
    pub fn current_matrix(&self) -> &BasisMatrix {
        self.tracker.current()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    // ─── Modes ───────────────────────────────────────────────────────────

    /// Takes effect at the next pre-frame.
    pub fn set_coordinate_mode(&mut self, mode: CoordinateMode) {
        self.coordinate_mode = mode;
    }

    /// String form of [`Self::set_coordinate_mode`]. Unknown names are
    /// ignored and the previous mode is kept.
    pub fn set_coordinate_mode_str(&mut self, name: &str) {
        if let Some(mode) = CoordinateMode::from_name(name) {
            self.coordinate_mode = mode;
        }
    }

    pub fn coordinate_mode(&self) -> CoordinateMode {
        self.coordinate_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Color mode is part of the style captured by [`Self::push`].
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.style.color_mode = mode;
        self.inner.set_color_mode(mode);
    }

    pub fn color_mode(&self) -> ColorMode {
        self.style.color_mode
    }

    // ─── Transforms ──────────────────────────────────────────────────────

    /// Translate by `(dx, dy)` and, on 3D surfaces, `dz`.
    pub fn apply_translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) -> Result<()> {
        self.tracker.translate(dx, dy, dz)?;
        self.inner.translate(dx, dy, dz);
        Ok(())
    }

    /// Rotate by `angle` in the active angle mode. `axis` (3D only) defaults
    /// to +Z. The renderer receives the angle in radians.
    pub fn apply_rotate(&mut self, angle: f64, axis: Option<DVec3>) -> Result<()> {
        let radians = self.angle_mode.to_radians(angle);
        self.tracker.rotate(radians, axis)?;
        self.inner.rotate(radians, axis);
        Ok(())
    }

    pub fn apply_rotate_x(&mut self, angle: f64) -> Result<()> {
        self.apply_rotate(angle, Some(DVec3::X))
    }

    pub fn apply_rotate_y(&mut self, angle: f64) -> Result<()> {
        self.apply_rotate(angle, Some(DVec3::Y))
    }

    pub fn apply_rotate_z(&mut self, angle: f64) -> Result<()> {
        self.apply_rotate(angle, Some(DVec3::Z))
    }

    /// Scale by a [`Scale`] argument (`2.0`, `(1.0, -1.0)`, a vector, ...).
    ///
    /// A zero factor is forwarded like any other so tracker and renderer
    /// stay in sync, then reported as [`TransformError::ZeroScale`].
    pub fn apply_scale(&mut self, scale: impl Into<Scale>) -> Result<()> {
        let scale = scale.into();
        let result = self.tracker.scale(scale);
        if matches!(result, Ok(()) | Err(TransformError::ZeroScale { .. })) {
            let f = scale.factors();
            self.inner.scale(f.x, f.y, f.z);
        }
        result
    }

    // ─── Stack ───────────────────────────────────────────────────────────

    /// Save the basis, the style snapshot and the native state.
    pub fn push(&mut self) {
        self.stack
            .push(StackFrame::new(*self.tracker.current(), self.style));
        self.inner.native_push();
    }

    /// Restore the most recent [`Self::push`]. Popping an empty stack logs
    /// a warning and changes nothing.
    pub fn pop(&mut self) {
        let Some(frame) = self.stack.pop() else {
            log::warn!("pop() was called without matching push()");
            return;
        };
        self.tracker.restore(*frame.basis());
        self.restore_style(frame.style());
        self.inner.native_pop();
    }

    /// Put back a saved style. Changed fields are forwarded, since the
    /// renderer's native restore does not cover them.
    pub(crate) fn restore_style(&mut self, style: StyleSnapshot) {
        if style.color_mode != self.style.color_mode {
            self.inner.set_color_mode(style.color_mode);
        }
        self.style = style;
    }

    // ─── Pointer mapping ─────────────────────────────────────────────────

    /// Map a pointer sample into the current logical space. Inverts the
    /// basis as it is right now; fails with a math error when the basis is
    /// singular.
    pub fn map_pointer(&self, sample: PointerSample) -> Result<LogicalPoint> {
        CoordinateMapper::new(self.inner.surface()).map(sample, self.tracker.current())
    }

    /// Where a logical point currently lands on the device.
    pub fn forward(&self, point: LogicalPoint) -> PointerSample {
        CoordinateMapper::new(self.inner.surface()).forward(point, self.tracker.current())
    }
}
