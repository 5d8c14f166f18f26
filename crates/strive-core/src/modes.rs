//! Modes that change how transform arguments are interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the logical origin sits on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateMode {
    /// Origin at the bottom-left, y grows upward (Quadrant I).
    #[default]
    RightHand,
    /// The renderer's native layout: origin at the top-left, y grows downward.
    LeftHand,
}

impl CoordinateMode {
    pub const RIGHT_HAND: &'static str = "right-hand";
    pub const LEFT_HAND: &'static str = "left-hand";

    /// Parse one of the mode constants. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::RIGHT_HAND => Some(Self::RightHand),
            Self::LEFT_HAND => Some(Self::LeftHand),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RightHand => Self::RIGHT_HAND,
            Self::LeftHand => Self::LEFT_HAND,
        }
    }

    /// Whether the ambient flip must be composed at the start of each frame.
    pub fn flips_vertically(self) -> bool {
        matches!(self, Self::RightHand)
    }
}

/// Unit used by rotate calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "degrees" => Some(Self::Degrees),
            "radians" => Some(Self::Radians),
            _ => None,
        }
    }

    /// Convert an angle expressed in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle.to_radians(),
            Self::Radians => angle,
        }
    }
}

/// Color interpretation mode. The only style field a stack frame captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsb,
    Hsl,
}

impl ColorMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rgb" => Some(Self::Rgb),
            "hsb" => Some(Self::Hsb),
            "hsl" => Some(Self::Hsl),
            _ => None,
        }
    }
}

/// Dimensionality of the active rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimensionality {
    /// 2D surface, 3×3 basis.
    #[default]
    Planar,
    /// 3D surface, 4×4 basis.
    Spatial,
}

impl Dimensionality {
    /// Side length of the homogeneous basis matrix.
    pub fn matrix_size(self) -> usize {
        match self {
            Self::Planar => 3,
            Self::Spatial => 4,
        }
    }

    pub fn is_spatial(self) -> bool {
        matches!(self, Self::Spatial)
    }
}

/// A coordinate axis, named in scale errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
