//! Draggable circles with exclusive pointer capture.
//!
//! Hover is computed per entity and is not exclusive. Dragging is: the
//! [`DragManager`] owns a single capture slot and the first entity (in the
//! caller's update order) that sees a press while hovering claims it. A
//! release clears the slot, which ends every drag.

use crate::input::{InputEvent, PointerState};
use kurbo::Point;
use strive_core::{LogicalPoint, Result};
use strive_render::{Renderer, TrackedRenderer};

/// Handle issued by [`DragManager::create_draggable`]. Ids grow with
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DraggableId(u32);

impl DraggableId {
    /// Numeric form, for hosts that pass handles as plain integers.
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

/// Interaction state of one draggable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

/// Axis a draggable can be pinned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAxis {
    X,
    Y,
}

/// How a draggable is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableStyle {
    /// Fill used while hovering or dragging.
    pub highlight: String,
}

impl Default for DraggableStyle {
    fn default() -> Self {
        Self {
            highlight: "red".to_string(),
        }
    }
}

// ─── Manager ─────────────────────────────────────────────────────────────

/// Owner of the capture slot. At most one draggable is dragging at a time.
#[derive(Debug, Default)]
pub struct DragManager {
    next_id: u32,
    capture: Option<DraggableId>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draggable centred at logical `(x, y)`.
    pub fn create_draggable(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        style: DraggableStyle,
    ) -> Draggable {
        let id = DraggableId(self.next_id);
        self.next_id += 1;
        Draggable {
            id,
            position: Point::new(x, y),
            radius,
            style,
            state: DragState::Idle,
            lock_x: None,
            lock_y: None,
        }
    }

    /// Claim the capture slot for `id`. Fails when someone else holds it.
    pub fn try_capture(&mut self, id: DraggableId) -> bool {
        match self.capture {
            Some(holder) => holder == id,
            None => {
                log::debug!("draggable {id:?} captured the pointer");
                self.capture = Some(id);
                true
            }
        }
    }

    /// Pointer released: free the slot, ending every active drag.
    pub fn release(&mut self) {
        if let Some(holder) = self.capture.take() {
            log::debug!("draggable {holder:?} released the pointer");
        }
    }

    /// A draggable is going away. Frees the slot if it holds it, so the
    /// pointer is not left captured by nothing until the next release.
    pub fn forget(&mut self, id: DraggableId) {
        if self.capture == Some(id) {
            log::debug!("draggable {id:?} dropped while holding the pointer");
            self.capture = None;
        }
    }

    /// Feed a host event. Only releases matter here.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if event.is_release() {
            self.release();
        }
    }

    pub fn is_captured(&self) -> bool {
        self.capture.is_some()
    }

    pub fn captured_by(&self) -> Option<DraggableId> {
        self.capture
    }
}

// ─── Draggable ───────────────────────────────────────────────────────────

/// A circle the user can pick up and move with the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Draggable {
    id: DraggableId,
    position: Point,
    radius: f64,
    style: DraggableStyle,
    state: DragState,
    lock_x: Option<f64>,
    lock_y: Option<f64>,
}

impl Draggable {
    pub fn id(&self) -> DraggableId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn style(&self) -> &DraggableStyle {
        &self.style
    }

    /// Pin `axis` to `value` and move there.
    pub fn lock(&mut self, axis: LockAxis, value: f64) {
        match axis {
            LockAxis::X => {
                self.lock_x = Some(value);
                self.position.x = value;
            }
            LockAxis::Y => {
                self.lock_y = Some(value);
                self.position.y = value;
            }
        }
    }

    pub fn unlock(&mut self, axis: LockAxis) {
        match axis {
            LockAxis::X => self.lock_x = None,
            LockAxis::Y => self.lock_y = None,
        }
    }

    pub fn locked(&self, axis: LockAxis) -> Option<f64> {
        match axis {
            LockAxis::X => self.lock_x,
            LockAxis::Y => self.lock_y,
        }
    }

    /// Strictly inside the circle; the rim does not count.
    pub fn hit_test(&self, point: LogicalPoint) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Advance the state machine with a pointer already mapped into the
    /// draggable's logical space.
    pub fn update(&mut self, manager: &mut DragManager, pointer: LogicalPoint, pressed: bool) {
        if self.state == DragState::Dragging {
            if manager.captured_by() == Some(self.id) {
                self.follow(pointer);
                return;
            }
            self.state = DragState::Idle;
        }

        if !self.hit_test(pointer) {
            self.state = DragState::Idle;
            return;
        }
        self.state = if pressed && manager.try_capture(self.id) {
            DragState::Dragging
        } else {
            DragState::Hovering
        };
    }

    fn follow(&mut self, pointer: LogicalPoint) {
        self.position = Point::new(
            self.lock_x.unwrap_or(pointer.x),
            self.lock_y.unwrap_or(pointer.y),
        );
    }

    /// Per-frame helper: map the pointer through the current basis, update,
    /// then draw. Fails when the basis cannot be inverted.
    pub fn frame<R: Renderer>(
        &mut self,
        ctx: &mut TrackedRenderer<R>,
        manager: &mut DragManager,
        pointer: &PointerState,
    ) -> Result<()> {
        if let Some(sample) = pointer.sample {
            let logical = ctx.map_pointer(sample)?;
            self.update(manager, logical, pointer.pressed);
        }
        self.draw(ctx);
        Ok(())
    }

    /// Draw the circle, highlighted while hovering or dragging.
    pub fn draw<R: Renderer>(&self, ctx: &mut TrackedRenderer<R>) {
        ctx.push();
        if self.state != DragState::Idle {
            ctx.inner_mut().fill(&self.style.highlight);
        }
        ctx.inner_mut()
            .circle(self.position.x, self.position.y, self.radius * 2.0);
        ctx.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn circle(manager: &mut DragManager, x: f64, y: f64) -> Draggable {
        manager.create_draggable(x, y, 10.0, DraggableStyle::default())
    }

    #[test]
    fn ids_are_unique() {
        let mut m = DragManager::new();
        let a = circle(&mut m, 0.0, 0.0);
        let b = circle(&mut m, 0.0, 0.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn forgetting_the_holder_frees_capture() {
        let mut m = DragManager::new();
        let mut a = circle(&mut m, 0.0, 0.0);
        let b = circle(&mut m, 0.0, 0.0);
        a.update(&mut m, Point::ZERO, true);
        assert_eq!(m.captured_by(), Some(a.id()));

        m.forget(b.id());
        assert_eq!(m.captured_by(), Some(a.id()));
        m.forget(a.id());
        assert!(!m.is_captured());
    }

    #[test]
    fn rim_is_outside() {
        let mut m = DragManager::new();
        let d = circle(&mut m, 0.0, 0.0);
        assert!(d.hit_test(Point::new(9.999, 0.0)));
        assert!(!d.hit_test(Point::new(10.0, 0.0)));
    }

    #[test]
    fn hover_press_drag_release() {
        let mut m = DragManager::new();
        let mut d = circle(&mut m, 50.0, 50.0);

        d.update(&mut m, Point::new(0.0, 0.0), false);
        assert_eq!(d.state(), DragState::Idle);

        d.update(&mut m, Point::new(52.0, 50.0), false);
        assert_eq!(d.state(), DragState::Hovering);

        d.update(&mut m, Point::new(52.0, 50.0), true);
        assert_eq!(d.state(), DragState::Dragging);
        assert_eq!(m.captured_by(), Some(d.id()));

        d.update(&mut m, Point::new(80.0, 90.0), true);
        assert_eq!(d.position(), Point::new(80.0, 90.0));

        m.release();
        d.update(&mut m, Point::new(80.0, 90.0), false);
        assert_eq!(d.state(), DragState::Hovering);
        assert!(!m.is_captured());
    }

    #[test]
    fn locked_axis_keeps_its_value() {
        let mut m = DragManager::new();
        let mut d = circle(&mut m, 50.0, 50.0);
        d.lock(LockAxis::Y, 20.0);
        assert_eq!(d.position(), Point::new(50.0, 20.0));

        d.update(&mut m, Point::new(50.0, 20.0), true);
        d.update(&mut m, Point::new(70.0, 95.0), true);
        assert_eq!(d.position(), Point::new(70.0, 20.0));

        d.unlock(LockAxis::Y);
        d.update(&mut m, Point::new(71.0, 95.0), true);
        assert_eq!(d.position(), Point::new(71.0, 95.0));
        assert_eq!(d.locked(LockAxis::Y), None);
    }

    #[test]
    fn pressing_elsewhere_and_sliding_in_captures() {
        let mut m = DragManager::new();
        let mut d = circle(&mut m, 0.0, 0.0);
        d.update(&mut m, Point::new(100.0, 0.0), true);
        assert_eq!(d.state(), DragState::Idle);
        d.update(&mut m, Point::new(1.0, 0.0), true);
        assert_eq!(d.state(), DragState::Dragging);
    }
}
