//! `XWrap` getters.
use crate::{DisplayError, XWrap};
use grabwm_core::models::Rect;
use x11_dl::xlib;

impl XWrap {
    /// Returns the next `Xevent` of the xserver.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    #[must_use]
    pub fn get_next_event(&self) -> xlib::XEvent {
        unsafe {
            let mut event: xlib::XEvent = std::mem::zeroed();
            (self.xlib.XNextEvent)(self.display, &mut event);
            event
        }
    }

    /// Returns the attributes of a window.
    /// # Errors
    ///
    /// Will error if window status is 0 (no attributes).
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(
        &self,
        window: xlib::Window,
    ) -> Result<xlib::XWindowAttributes, DisplayError> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return Err(DisplayError::FailedStatus);
        }
        Ok(attrs)
    }

    /// Returns the position and size of a window, relative to its parent.
    /// # Errors
    ///
    /// Will error if the window is gone. See `get_window_attrs`.
    pub fn get_window_rect(&self, window: xlib::Window) -> Result<Rect, DisplayError> {
        let attrs = self.get_window_attrs(window)?;
        Ok(Rect::new(
            attrs.x,
            attrs.y,
            attrs.width as u32,
            attrs.height as u32,
        ))
    }
}
