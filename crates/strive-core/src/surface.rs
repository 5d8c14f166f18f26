//! Facts about the active drawing surface.

use crate::modes::Dimensionality;

/// Size and dimensionality of the rendering surface, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub dimensionality: Dimensionality,
}

impl Surface {
    pub fn planar(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            dimensionality: Dimensionality::Planar,
        }
    }

    pub fn spatial(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            dimensionality: Dimensionality::Spatial,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::planar(400.0, 400.0)
    }
}
