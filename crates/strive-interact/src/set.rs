//! Draggables owned together, addressed by id and updated in creation order.

use crate::drag::{DragManager, Draggable, DraggableId, DraggableStyle};
use crate::input::{InputEvent, PointerState};
use std::collections::BTreeMap;
use strive_core::Result;
use strive_render::{Renderer, TrackedRenderer};

/// A [`DragManager`] plus the draggables it issued.
#[derive(Debug, Default)]
pub struct DraggableSet {
    manager: DragManager,
    items: BTreeMap<DraggableId, Draggable>,
}

impl DraggableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager(&self) -> &DragManager {
        &self.manager
    }

    pub fn create(&mut self, x: f64, y: f64, radius: f64, style: DraggableStyle) -> DraggableId {
        let draggable = self.manager.create_draggable(x, y, radius, style);
        let id = draggable.id();
        self.items.insert(id, draggable);
        id
    }

    /// Drop a draggable. Releases the capture slot if it was dragging.
    pub fn remove(&mut self, id: DraggableId) -> Option<Draggable> {
        let removed = self.items.remove(&id)?;
        self.manager.forget(id);
        Some(removed)
    }

    pub fn get(&self, id: DraggableId) -> Option<&Draggable> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: DraggableId) -> Option<&mut Draggable> {
        self.items.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draggables in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Draggable> {
        self.items.values()
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        self.manager.handle_event(event);
    }

    /// Update and draw every draggable in creation order. The earliest one
    /// under a press wins capture.
    pub fn frame<R: Renderer>(
        &mut self,
        ctx: &mut TrackedRenderer<R>,
        pointer: &PointerState,
    ) -> Result<()> {
        for draggable in self.items.values_mut() {
            draggable.frame(ctx, &mut self.manager, pointer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragState;
    use pretty_assertions::assert_eq;
    use strive_core::{CoordinateMode, Point};
    use strive_render::RecordingRenderer;

    fn ctx() -> TrackedRenderer<RecordingRenderer> {
        let mut ctx = TrackedRenderer::new(RecordingRenderer::planar(200.0, 200.0));
        ctx.set_coordinate_mode(CoordinateMode::LeftHand);
        ctx.init();
        ctx
    }

    fn press_at(x: f64, y: f64) -> PointerState {
        let mut pointer = PointerState::new();
        pointer.apply(&InputEvent::from_pointer_down(x, y));
        pointer
    }

    #[test]
    fn removing_the_dragged_one_frees_the_pointer() {
        let mut ctx = ctx();
        let mut set = DraggableSet::new();
        let a = set.create(50.0, 50.0, 10.0, DraggableStyle::default());
        let b = set.create(50.0, 50.0, 10.0, DraggableStyle::default());

        let pointer = press_at(50.0, 50.0);
        ctx.frame(|ctx| set.frame(ctx, &pointer)).unwrap();
        assert_eq!(set.manager().captured_by(), Some(a));

        assert!(set.remove(a).is_some());
        assert!(!set.manager().is_captured());
        assert_eq!(set.len(), 1);

        ctx.frame(|ctx| set.frame(ctx, &pointer)).unwrap();
        assert_eq!(set.get(b).map(Draggable::state), Some(DragState::Dragging));
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut set = DraggableSet::new();
        let a = set.create(0.0, 0.0, 1.0, DraggableStyle::default());
        assert!(set.remove(a).is_some());
        assert!(set.remove(a).is_none());

        let b = set.create(0.0, 0.0, 1.0, DraggableStyle::default());
        assert_ne!(a, b);
        assert!(set.get(a).is_none());
        assert!(!set.is_empty());
    }

    #[test]
    fn iteration_follows_creation_order() {
        let mut set = DraggableSet::new();
        for x in [3.0, 1.0, 2.0] {
            set.create(x, 0.0, 1.0, DraggableStyle::default());
        }
        let xs: Vec<f64> = set.iter().map(|d| d.position().x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
        assert_eq!(set.iter().next().map(|d| d.position()), Some(Point::new(3.0, 0.0)));
    }
}
