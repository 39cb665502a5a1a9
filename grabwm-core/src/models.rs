//! Objects (such as window handles and drags) used by `grabwm`.
mod drag;
mod manager;
mod rect;
mod window_handle;

pub use drag::{DragMode, DragSession, DragState};
pub use manager::Manager;
pub use rect::Rect;
pub use window_handle::Handle;
#[cfg(test)]
pub(crate) use window_handle::MockHandle;
pub use window_handle::WindowHandle;
