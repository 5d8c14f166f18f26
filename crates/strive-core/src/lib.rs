pub mod basis;
pub mod config;
pub mod error;
pub mod mapper;
pub mod modes;
pub mod stack;
pub mod surface;
pub mod tracker;

pub use basis::BasisMatrix;
pub use config::SketchConfig;
pub use error::{Result, TransformError};
pub use mapper::{CoordinateMapper, LogicalPoint, PointerSample};
pub use modes::{AngleMode, Axis, ColorMode, CoordinateMode, Dimensionality};
pub use stack::{StackFrame, StyleSnapshot, TransformStack};
pub use surface::Surface;
pub use tracker::{BasisTracker, Scale};

// Re-export the math types that appear in public signatures so downstream
// crates don't need a direct dependency.
pub use glam::{DVec2, DVec3};
pub use kurbo::{Point, Rect, Size};
