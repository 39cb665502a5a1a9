//! The drag state machine.

use crate::models::{DragMode, DragSession, DragState, Handle, Rect, WindowHandle};
use crate::DisplayAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct State<H: Handle> {
    #[serde(bound = "")]
    pub drag: DragState<H>,
    /// Actions waiting to be sent to the display server.
    #[serde(bound = "")]
    pub actions: VecDeque<DisplayAction<H>>,
}

impl<H: Handle> Default for State<H> {
    fn default() -> Self {
        Self {
            drag: DragState::Idle,
            actions: VecDeque::new(),
        }
    }
}

impl<H: Handle> State<H> {
    /// Begins a drag, replacing any drag already in progress.
    pub fn drag_start(
        &mut self,
        target: WindowHandle<H>,
        mode: DragMode,
        anchor_pointer: (i32, i32),
        anchor_rect: Rect,
    ) {
        if let DragState::Dragging(previous) = &self.drag {
            tracing::debug!("Replacing drag of {:?}", previous.target);
        }
        self.drag = DragState::Dragging(DragSession {
            target,
            mode,
            anchor_pointer,
            anchor_rect,
        });
    }

    /// Queues the new geometry of the dragged window. Does nothing when idle.
    pub fn drag_update(&mut self, pointer: (i32, i32)) {
        if let DragState::Dragging(session) = &self.drag {
            let rect = session.rect_at(pointer);
            self.actions
                .push_back(DisplayAction::MoveResize(session.target, rect));
        }
    }

    /// Ends the drag in progress, if any.
    pub fn drag_end(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.drag) {
            tracing::debug!("Finished {:?} of {:?}", session.mode, session.target);
        }
    }

    /// Queues raising a window. The drag state is left alone.
    pub fn raise(&mut self, window: WindowHandle<H>) {
        self.actions.push_back(DisplayAction::Raise(window));
    }
}
