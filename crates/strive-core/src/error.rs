//! Error type shared by every transform-layer operation.
//!
//! Two families of failure exist: invalid arguments (rejected or flagged at
//! the call that received them) and math errors (a basis that cannot be
//! inverted). Neither is fatal; the caller decides whether to propagate.

use crate::modes::Axis;
use thiserror::Error;

/// Convenience alias used across the Strive crates.
pub type Result<T, E = TransformError> = std::result::Result<T, E>;

/// Failure raised by the transform layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A scale factor of exactly zero collapses an axis.
    #[error("scale factor on the {axis} axis must be non-zero")]
    ZeroScale { axis: Axis },

    /// A 3D rotation axis with zero length has no direction.
    #[error("rotation axis must have non-zero length")]
    ZeroRotationAxis,

    /// The operation only exists on 3D surfaces (z-translation, axis rotation).
    #[error("`{operation}` requires a 3D surface")]
    RequiresSpatial { operation: &'static str },

    /// NaN or infinite argument.
    #[error("`{operation}` received a non-finite argument")]
    NonFinite { operation: &'static str },

    /// The current basis has no inverse.
    #[error("basis matrix is not invertible (determinant {determinant})")]
    Singular { determinant: f64 },

    /// A frame-lifecycle hook was called out of order.
    #[error("`{operation}` called out of frame order")]
    FrameOrder { operation: &'static str },
}

impl TransformError {
    /// `true` for the math-error family (non-invertible basis).
    pub fn is_math_error(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }

    /// `true` for the invalid-argument family.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::ZeroScale { .. }
                | Self::ZeroRotationAxis
                | Self::RequiresSpatial { .. }
                | Self::NonFinite { .. }
        )
    }
}
