//! Strive renderer layer.
//!
//! [`TrackedRenderer`] wraps any [`Renderer`] and keeps a tracked copy of its
//! transform, so pointer positions can be mapped back into the user's
//! drawing space and text can be kept upright under axis flips.

pub mod frame;
pub mod orientation;
pub mod recording;
pub mod renderer;
pub mod tracked;

pub use frame::FramePhase;
pub use recording::{DrawCall, NativeTransform, RecordingRenderer};
pub use renderer::Renderer;
pub use tracked::TrackedRenderer;
