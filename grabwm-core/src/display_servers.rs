#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, Rect, WindowHandle};
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// Everything the window manager needs from the windowing system.
pub trait DisplayServer<H: Handle> {
    /// Connects to the display and grabs the configured keys and buttons.
    ///
    /// # Errors
    ///
    /// Will error if the display cannot be opened.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    /// Blocks until input arrives or a short timeout passes, then returns everything queued.
    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    /// Current geometry of a window, `None` if it no longer exists.
    fn window_geometry(&self, handle: &WindowHandle<H>) -> Option<Rect>;

    fn execute_action(&mut self, act: DisplayAction<H>);

    fn flush(&self);
}
