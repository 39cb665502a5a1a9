use crate::models::{Handle, Rect, WindowHandle};
use serde::{Deserialize, Serialize};

/// These are responses from the Window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Raises a given window.
    #[serde(bound = "")]
    Raise(WindowHandle<H>),

    /// Places a window at the given geometry.
    #[serde(bound = "")]
    MoveResize(WindowHandle<H>, Rect),
}
