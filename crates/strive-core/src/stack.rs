//! Save/restore stack for the tracked basis.
//!
//! Each frame is an immutable snapshot: the basis at push time plus the
//! minimal style state that pop has to put back.

use crate::basis::BasisMatrix;
use crate::modes::ColorMode;
use smallvec::SmallVec;

/// Style fields restored by pop. Everything else is restored by the
/// renderer's own native save/restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSnapshot {
    pub color_mode: ColorMode,
}

/// One saved scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackFrame {
    basis: BasisMatrix,
    style: StyleSnapshot,
}

impl StackFrame {
    pub fn new(basis: BasisMatrix, style: StyleSnapshot) -> Self {
        Self { basis, style }
    }

    pub fn basis(&self) -> &BasisMatrix {
        &self.basis
    }

    pub fn style(&self) -> StyleSnapshot {
        self.style
    }
}

/// LIFO stack of [`StackFrame`]s. Sketches rarely nest deeper than a
/// handful of scopes, so the first few frames live inline.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    frames: SmallVec<[StackFrame; 8]>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    /// Pop the newest frame. `None` on underflow; the caller decides how
    /// loudly to complain.
    pub fn pop(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every frame, returning how many were left open.
    pub fn clear(&mut self) -> usize {
        let dangling = self.frames.len();
        self.frames.clear();
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Dimensionality;
    use glam::DVec3;

    #[test]
    fn frames_come_back_last_in_first_out() {
        let mut stack = TransformStack::new();
        let outer = BasisMatrix::identity(Dimensionality::Planar);
        let mut inner = outer;
        inner.compose_translation(DVec3::new(1.0, 2.0, 0.0));

        stack.push(StackFrame::new(outer, StyleSnapshot::default()));
        stack.push(StackFrame::new(
            inner,
            StyleSnapshot {
                color_mode: ColorMode::Hsb,
            },
        ));
        assert_eq!(stack.depth(), 2);

        let top = stack.pop().unwrap();
        assert_eq!(*top.basis(), inner);
        assert_eq!(top.style().color_mode, ColorMode::Hsb);
        assert_eq!(*stack.pop().unwrap().basis(), outer);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn clear_reports_dangling_frames() {
        let mut stack = TransformStack::new();
        for _ in 0..3 {
            stack.push(StackFrame::new(
                BasisMatrix::identity(Dimensionality::Spatial),
                StyleSnapshot::default(),
            ));
        }
        assert_eq!(stack.clear(), 3);
        assert!(stack.is_empty());
    }
}
