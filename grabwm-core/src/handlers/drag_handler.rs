use super::{Config, DisplayServer, Handle, Manager};
use crate::models::{DragMode, WindowHandle};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Starts a drag of `window`, capturing its geometry once for the whole session.
    ///
    /// A window that disappeared before its geometry could be read is not dragged.
    pub fn drag_start_handler(
        &mut self,
        window: WindowHandle<H>,
        mode: DragMode,
        pointer: (i32, i32),
    ) {
        let Some(anchor_rect) = self.display_server.window_geometry(&window) else {
            tracing::debug!("Not dragging {:?}: no geometry", window);
            return;
        };
        tracing::debug!("Starting {:?} of {:?} from {:?}", mode, window, anchor_rect);
        self.state.drag_start(window, mode, pointer, anchor_rect);
    }
}
