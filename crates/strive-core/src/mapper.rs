//! Pointer mapping: device coordinates → logical drawing-space coordinates.
//!
//! The ambient coordinate-mode flip is composed into the basis at the start
//! of every frame, so inverting the basis applies exactly the adjustment the
//! renderer applies to geometry. Nothing is cached: every query inverts the
//! basis as it is at the moment of the call.

use crate::basis::BasisMatrix;
use crate::error::{Result, TransformError};
use crate::surface::Surface;
use glam::{DVec2, DVec3};
use kurbo::{Point, Rect, Size};

/// A position in the user's transformed drawing space.
pub type LogicalPoint = Point;

/// Pointer position in device pixels relative to the canvas' top-left
/// corner, after offset and CSS-scaling correction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a sample from page-level client coordinates.
    ///
    /// `canvas_rect` is the canvas' bounding rectangle in client space and
    /// `logical_size` the drawing-surface size; the ratio between the two
    /// undoes CSS scaling.
    pub fn from_client(client: Point, canvas_rect: Rect, logical_size: Size) -> Self {
        let scale_x = ratio(logical_size.width, canvas_rect.width());
        let scale_y = ratio(logical_size.height, canvas_rect.height());
        Self {
            x: (client.x - canvas_rect.x0) * scale_x,
            y: (client.y - canvas_rect.y0) * scale_y,
        }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

fn ratio(logical: f64, displayed: f64) -> f64 {
    if displayed > 0.0 { logical / displayed } else { 1.0 }
}

/// Maps pointer samples through the inverse of a basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: f64,
    height: f64,
}

impl CoordinateMapper {
    pub fn new(surface: Surface) -> Self {
        Self {
            width: surface.width,
            height: surface.height,
        }
    }

    /// Sample position in the renderer's native space. 3D projections put
    /// the origin at the canvas centre.
    fn native(&self, sample: PointerSample, basis: &BasisMatrix) -> DVec2 {
        let p = DVec2::new(sample.x, sample.y);
        if basis.dimensionality().is_spatial() {
            p - DVec2::new(self.width, self.height) / 2.0
        } else {
            p
        }
    }

    /// Map a pointer sample into logical space through `basis`.
    ///
    /// On spatial surfaces the sample is taken to lie on the `z = 0` plane
    /// and the logical `z` is discarded.
    pub fn map(&self, sample: PointerSample, basis: &BasisMatrix) -> Result<LogicalPoint> {
        let inverse = basis.inverse()?;
        let p = self.native(sample, basis);
        let mapped = inverse.transform_point(p.extend(0.0));
        if !mapped.is_finite() {
            return Err(TransformError::Singular {
                determinant: basis.determinant(),
            });
        }
        Ok(Point::new(mapped.x, mapped.y))
    }

    /// Forward transform: where a logical point lands as a pointer sample.
    pub fn forward(&self, point: LogicalPoint, basis: &BasisMatrix) -> PointerSample {
        let v = basis.transform_point(DVec3::new(point.x, point.y, 0.0));
        let mut device = v.truncate();
        if basis.dimensionality().is_spatial() {
            device += DVec2::new(self.width, self.height) / 2.0;
        }
        PointerSample::new(device.x, device.y)
    }
}
