//! The tracked basis matrix.
//!
//! The basis is stored in **row-vector** form: a logical point `p` maps to
//! device space as `[x y 1] · B` (or `[x y z 1] · B` in 3D). The renderer
//! applies the same transforms to column vectors, so every primitive it
//! receives is composed here transposed and premultiplied:
//!
//! ```text
//! B' = Pᵀ · B
//! ```
//!
//! which keeps `B == Cᵀ` where `C` is the renderer's own column-vector
//! matrix. The translation lives in the last row; entry `(1, 1)` is the
//! vertical scale.

use crate::error::{Result, TransformError};
use crate::modes::Dimensionality;
use glam::{DMat3, DMat4, DVec2, DVec3, DVec4};
use kurbo::Affine;

/// Homogeneous basis: 3×3 on planar surfaces, 4×4 on spatial ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasisMatrix {
    Planar(DMat3),
    Spatial(DMat4),
}

impl BasisMatrix {
    /// Identity basis for the given dimensionality.
    pub fn identity(dimensionality: Dimensionality) -> Self {
        match dimensionality {
            Dimensionality::Planar => Self::Planar(DMat3::IDENTITY),
            Dimensionality::Spatial => Self::Spatial(DMat4::IDENTITY),
        }
    }

    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            Self::Planar(_) => Dimensionality::Planar,
            Self::Spatial(_) => Dimensionality::Spatial,
        }
    }

    /// Entry at `(row, col)` of the row-vector matrix, `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let size = self.dimensionality().matrix_size();
        if row >= size || col >= size {
            return None;
        }
        Some(match self {
            Self::Planar(m) => m.col(col)[row],
            Self::Spatial(m) => m.col(col)[row],
        })
    }

    /// Entry `(1, 1)`: the factor controlling y-direction growth.
    pub fn y_scale(&self) -> f64 {
        match self {
            Self::Planar(m) => m.y_axis.y,
            Self::Spatial(m) => m.y_axis.y,
        }
    }

    /// Where the logical origin lands in device space (the translation row).
    /// Always `z = 0` on planar surfaces.
    pub fn origin(&self) -> DVec3 {
        match self {
            Self::Planar(m) => DVec3::new(m.x_axis.z, m.y_axis.z, 0.0),
            Self::Spatial(m) => DVec3::new(m.x_axis.w, m.y_axis.w, m.z_axis.w),
        }
    }

    pub fn determinant(&self) -> f64 {
        match self {
            Self::Planar(m) => m.determinant(),
            Self::Spatial(m) => m.determinant(),
        }
    }

    /// Inverse basis. Fails with [`TransformError::Singular`] when the
    /// determinant is zero or non-finite.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(TransformError::Singular { determinant });
        }
        let inverse = match self {
            Self::Planar(m) => Self::Planar(m.inverse()),
            Self::Spatial(m) => Self::Spatial(m.inverse()),
        };
        if !inverse.is_finite() {
            return Err(TransformError::Singular { determinant });
        }
        Ok(inverse)
    }

    /// Map a logical point through the basis (`[x y (z) 1] · B`).
    /// The `z` component is ignored on planar surfaces.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        match self {
            Self::Planar(m) => {
                let v = m.transpose() * point.truncate().extend(1.0);
                DVec3::new(v.x, v.y, 0.0)
            }
            Self::Spatial(m) => {
                let v = m.transpose() * point.extend(1.0);
                v.truncate() / v.w
            }
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Planar(m) => m.is_finite(),
            Self::Spatial(m) => m.is_finite(),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity(self.dimensionality())
    }

    /// Element-wise comparison within `tolerance`. Bases of different
    /// dimensionality never compare equal.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::Planar(a), Self::Planar(b)) => a.abs_diff_eq(*b, tolerance),
            (Self::Spatial(a), Self::Spatial(b)) => a.abs_diff_eq(*b, tolerance),
            _ => false,
        }
    }

    /// The equivalent kurbo transform for planar bases.
    pub fn to_affine(&self) -> Option<Affine> {
        match self {
            Self::Planar(m) => Some(Affine::new([
                m.x_axis.x, m.y_axis.x, m.x_axis.y, m.y_axis.y, m.x_axis.z, m.y_axis.z,
            ])),
            Self::Spatial(_) => None,
        }
    }

    // ─── Composition ─────────────────────────────────────────────────────

    pub(crate) fn compose_translation(&mut self, delta: DVec3) {
        match self {
            Self::Planar(m) => {
                let p = DMat3::from_translation(delta.truncate());
                *m = p.transpose() * *m;
            }
            Self::Spatial(m) => {
                let p = DMat4::from_translation(delta);
                *m = p.transpose() * *m;
            }
        }
    }

    /// `axis` must already be normalized; it is ignored on planar surfaces.
    pub(crate) fn compose_rotation(&mut self, radians: f64, axis: DVec3) {
        match self {
            Self::Planar(m) => {
                let p = DMat3::from_angle(radians);
                *m = p.transpose() * *m;
            }
            Self::Spatial(m) => {
                let p = DMat4::from_axis_angle(axis, radians);
                *m = p.transpose() * *m;
            }
        }
    }

    pub(crate) fn compose_scale(&mut self, factors: DVec3) {
        // Diagonal primitives are symmetric, the transpose is a no-op.
        match self {
            Self::Planar(m) => {
                let p = DMat3::from_diagonal(DVec2::new(factors.x, factors.y).extend(1.0));
                *m = p * *m;
            }
            Self::Spatial(m) => {
                let p = DMat4::from_diagonal(DVec4::new(factors.x, factors.y, factors.z, 1.0));
                *m = p * *m;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn translation_lands_in_last_row() {
        let mut b = BasisMatrix::identity(Dimensionality::Planar);
        b.compose_translation(DVec3::new(30.0, -4.0, 0.0));
        assert_eq!(b.get(2, 0), Some(30.0));
        assert_eq!(b.get(2, 1), Some(-4.0));
        assert_eq!(b.get(0, 2), Some(0.0));
        assert_eq!(b.origin(), DVec3::new(30.0, -4.0, 0.0));
    }

    #[test]
    fn out_of_range_entries_are_none() {
        let b = BasisMatrix::identity(Dimensionality::Planar);
        assert_eq!(b.get(3, 0), None);
        let s = BasisMatrix::identity(Dimensionality::Spatial);
        assert_eq!(s.get(3, 3), Some(1.0));
    }

    #[test]
    fn newest_primitive_applies_first() {
        // translate(10, 0) then scale(2): a logical point is scaled, then
        // moved, exactly as the renderer draws it.
        let mut b = BasisMatrix::identity(Dimensionality::Planar);
        b.compose_translation(DVec3::new(10.0, 0.0, 0.0));
        b.compose_scale(DVec3::new(2.0, 2.0, 1.0));
        let p = b.transform_point(DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(p, DVec3::new(12.0, 2.0, 0.0));
    }

    #[test]
    fn planar_rotation_is_counter_clockwise_in_column_form() {
        let mut b = BasisMatrix::identity(Dimensionality::Planar);
        b.compose_rotation(FRAC_PI_2, DVec3::Z);
        let p = b.transform_point(DVec3::new(1.0, 0.0, 0.0));
        assert!((p.x).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn affine_matches_row_layout() {
        let mut b = BasisMatrix::identity(Dimensionality::Planar);
        b.compose_translation(DVec3::new(5.0, 6.0, 0.0));
        b.compose_rotation(0.3, DVec3::Z);
        b.compose_scale(DVec3::new(2.0, -1.0, 1.0));
        let affine = b.to_affine().unwrap();
        let expected = Affine::translate((5.0, 6.0))
            * Affine::rotate(0.3)
            * Affine::scale_non_uniform(2.0, -1.0);
        for (a, e) in affine.as_coeffs().iter().zip(expected.as_coeffs()) {
            assert!((a - e).abs() < 1e-12, "{a} != {e}");
        }
    }

    #[test]
    fn zero_scale_is_singular() {
        let mut b = BasisMatrix::identity(Dimensionality::Planar);
        b.compose_scale(DVec3::new(0.0, 1.0, 1.0));
        assert!(matches!(b.inverse(), Err(TransformError::Singular { .. })));
    }

    #[test]
    fn spatial_inverse_undoes_transform() {
        let mut b = BasisMatrix::identity(Dimensionality::Spatial);
        b.compose_translation(DVec3::new(1.0, 2.0, 3.0));
        b.compose_rotation(0.7, DVec3::new(1.0, 1.0, 0.0).normalize());
        b.compose_scale(DVec3::new(2.0, 3.0, 4.0));
        let inv = b.inverse().unwrap();
        let p = DVec3::new(-3.0, 4.5, 8.0);
        let back = inv.transform_point(b.transform_point(p));
        assert!(back.abs_diff_eq(p, 1e-9), "{back:?}");
    }
}
