//! Xlib calls related to a window.
use crate::{XWrap, XlibWindowHandle};
use grabwm_core::models::WindowHandle;
use x11_dl::xlib;

impl XWrap {
    /// Moves and resizes a window in one request.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, x: i32, y: i32, w: u32, h: u32) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(self.display, window, x, y, w, h);
        }
    }

    /// Raise a window.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, handle: &WindowHandle<XlibWindowHandle>) {
        let WindowHandle(XlibWindowHandle(window)) = handle;
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, *window);
        }
    }
}
