//! Basis tracker: validates transform arguments and composes them into the
//! tracked basis.
//!
//! The tracker is pure math. Forwarding to the renderer happens in the
//! `strive-render` decorator, which calls the tracker first and forwards only
//! what the tracker accepted.

use crate::basis::BasisMatrix;
use crate::error::{Result, TransformError};
use crate::modes::{Axis, CoordinateMode, Dimensionality};
use glam::{DVec2, DVec3};

/// Scale argument. Resolved at the call site instead of by inspecting
/// argument types at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Same factor on every axis.
    Uniform(f64),
    /// Separate x and y factors, z stays 1.
    Planar(f64, f64),
    /// Separate factors on all three axes.
    Spatial(f64, f64, f64),
}

impl Scale {
    /// Per-axis factors `(x, y, z)`.
    pub fn factors(self) -> DVec3 {
        match self {
            Self::Uniform(s) => DVec3::splat(s),
            Self::Planar(x, y) => DVec3::new(x, y, 1.0),
            Self::Spatial(x, y, z) => DVec3::new(x, y, z),
        }
    }
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Self::Uniform(s)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Planar(x, y)
    }
}

impl From<(f64, f64, f64)> for Scale {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::Spatial(x, y, z)
    }
}

impl From<[f64; 2]> for Scale {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::Planar(x, y)
    }
}

impl From<[f64; 3]> for Scale {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::Spatial(x, y, z)
    }
}

impl From<DVec2> for Scale {
    fn from(v: DVec2) -> Self {
        Self::Planar(v.x, v.y)
    }
}

impl From<DVec3> for Scale {
    fn from(v: DVec3) -> Self {
        Self::Spatial(v.x, v.y, v.z)
    }
}

/// Owns the live basis and composes primitives into it.
#[derive(Debug, Clone)]
pub struct BasisTracker {
    basis: BasisMatrix,
}

impl BasisTracker {
    pub fn new(dimensionality: Dimensionality) -> Self {
        Self {
            basis: BasisMatrix::identity(dimensionality),
        }
    }

    /// The live basis.
    pub fn current(&self) -> &BasisMatrix {
        &self.basis
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.basis.dimensionality()
    }

    /// Replace the basis wholesale (stack restore).
    pub fn restore(&mut self, basis: BasisMatrix) {
        self.basis = basis;
    }

    /// Identity of the given dimensionality. The dimensionality may change
    /// here when the host switched surfaces between frames.
    pub fn reset(&mut self, dimensionality: Dimensionality) {
        self.basis = BasisMatrix::identity(dimensionality);
    }

    /// `true` when y grows in the opposite direction of device space.
    pub fn is_flipped(&self) -> bool {
        self.basis.y_scale() < 0.0
    }

    /// Compose a translation. `dz` is only legal on spatial surfaces.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: Option<f64>) -> Result<()> {
        let dims = self.dimensionality();
        if dz.is_some() && !dims.is_spatial() {
            return Err(TransformError::RequiresSpatial {
                operation: "translate(z)",
            });
        }
        let delta = DVec3::new(dx, dy, dz.unwrap_or(0.0));
        if !delta.is_finite() {
            return Err(TransformError::NonFinite {
                operation: "translate",
            });
        }
        log::trace!("compose translate {delta:?}");
        self.basis.compose_translation(delta);
        Ok(())
    }

    /// Compose a rotation of `radians`. On planar surfaces the rotation is
    /// in the xy plane and `axis` must be `None`; on spatial surfaces the
    /// axis defaults to +Z.
    pub fn rotate(&mut self, radians: f64, axis: Option<DVec3>) -> Result<()> {
        let dims = self.dimensionality();
        if axis.is_some() && !dims.is_spatial() {
            return Err(TransformError::RequiresSpatial {
                operation: "rotate(axis)",
            });
        }
        let axis = axis.unwrap_or(DVec3::Z);
        if !radians.is_finite() || !axis.is_finite() {
            return Err(TransformError::NonFinite {
                operation: "rotate",
            });
        }
        let axis = axis.try_normalize().ok_or(TransformError::ZeroRotationAxis)?;
        log::trace!("compose rotate {radians} rad about {axis:?}");
        self.basis.compose_rotation(radians, axis);
        Ok(())
    }

    /// Compose a scale.
    ///
    /// A zero factor on a used axis is still composed, so the tracked basis
    /// keeps mirroring a renderer that accepts it, and is then reported as
    /// [`TransformError::ZeroScale`]. Subsequent pointer mapping fails with
    /// [`TransformError::Singular`] until the scope is popped or the frame
    /// ends. Non-finite factors are rejected without composing.
    pub fn scale(&mut self, scale: impl Into<Scale>) -> Result<()> {
        let factors = scale.into().factors();
        if !factors.is_finite() {
            return Err(TransformError::NonFinite { operation: "scale" });
        }
        log::trace!("compose scale {factors:?}");
        self.basis.compose_scale(factors);
        match zero_axis(factors, self.dimensionality()) {
            Some(axis) => Err(TransformError::ZeroScale { axis }),
            None => Ok(()),
        }
    }

    /// Compose the ambient flip for `mode`: `scale(1, -1)` and, on planar
    /// surfaces, `translate(0, -height)`. 3D projections already centre the
    /// origin, so spatial surfaces only get the scale.
    ///
    /// This touches the tracked basis only. Hosts that drive a renderer
    /// through `strive_render::TrackedRenderer` get the same flip from its
    /// `pre_frame`, which also forwards it; use this one when the basis is
    /// tracked without that decorator.
    pub fn apply_ambient_flip(&mut self, mode: CoordinateMode, height: f64) -> Result<()> {
        if !mode.flips_vertically() {
            return Ok(());
        }
        self.scale(Scale::Planar(1.0, -1.0))?;
        if !self.dimensionality().is_spatial() {
            self.translate(0.0, -height, None)?;
        }
        Ok(())
    }
}

/// First axis (in x, y, z order) whose factor is exactly zero. The z factor
/// only matters on spatial surfaces.
pub fn zero_axis(factors: DVec3, dimensionality: Dimensionality) -> Option<Axis> {
    if factors.x == 0.0 {
        Some(Axis::X)
    } else if factors.y == 0.0 {
        Some(Axis::Y)
    } else if factors.z == 0.0 && dimensionality.is_spatial() {
        Some(Axis::Z)
    } else {
        None
    }
}
