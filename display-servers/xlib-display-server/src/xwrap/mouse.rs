//! Xlib calls related to a mouse.
use super::keyboard::lock_variants;
use super::DRAGMASK;
use crate::XWrap;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the button with the modifier for a window. Motion is reported until the button is
    /// released.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_buttons(&self, window: xlib::Window, button: u32, modifiers: u32) {
        for m in lock_variants(modifiers) {
            unsafe {
                (self.xlib.XGrabButton)(
                    self.display,
                    button,
                    m,
                    window,
                    xlib::True,
                    DRAGMASK,
                    xlib::GrabModeAsync,
                    xlib::GrabModeAsync,
                    0,
                    0,
                );
            }
        }
    }

    /// Cleans all currently grabbed buttons of a window.
    // `XUngrabButton`: https://tronche.com/gui/x/xlib/input/XUngrabButton.html
    pub fn ungrab_buttons(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabButton)(
                self.display,
                xlib::AnyButton as u32,
                xlib::AnyModifier,
                window,
            );
        }
    }
}
