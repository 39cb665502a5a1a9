use super::{Handle, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

/// Which part of a window's geometry a drag changes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// A drag in progress. Everything here is captured when the drag starts and never changes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession<H: Handle> {
    #[serde(bound = "")]
    pub target: WindowHandle<H>,
    pub mode: DragMode,
    /// Root-relative pointer position at the button press.
    pub anchor_pointer: (i32, i32),
    /// Geometry of `target` at the button press.
    pub anchor_rect: Rect,
}

impl<H: Handle> DragSession<H> {
    /// Geometry of the target window for a pointer at `pointer`.
    ///
    /// Always measured from the anchor, so missed or coalesced motion events cannot drift.
    #[must_use]
    pub fn rect_at(&self, pointer: (i32, i32)) -> Rect {
        let dx = pointer.0.saturating_sub(self.anchor_pointer.0);
        let dy = pointer.1.saturating_sub(self.anchor_pointer.1);
        self.anchor_rect.apply_delta(self.mode, dx, dy)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState<H: Handle> {
    Idle,
    #[serde(bound = "")]
    Dragging(DragSession<H>),
}

impl<H: Handle> Default for DragState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H: Handle> DragState<H> {
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub const fn session(&self) -> Option<&DragSession<H>> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
