//! Strive interaction layer: pointer input and draggable entities drawn
//! through a [`strive_render::TrackedRenderer`].

pub mod drag;
pub mod input;
pub mod set;

pub use drag::{DragManager, DragState, Draggable, DraggableId, DraggableStyle, LockAxis};
pub use input::{InputEvent, PointerState};
pub use set::DraggableSet;
