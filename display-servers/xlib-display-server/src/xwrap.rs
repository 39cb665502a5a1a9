//! A wrapper around calls to xlib and X related functions.
use crate::DisplayError;
use grabwm_core::Bindings;
use std::io;
use std::os::raw::c_int;
use std::ptr;
use std::time::Duration;

use x11_dl::xlib;

mod getters;
mod keyboard;
mod mouse;
mod window;

/// Events delivered by the button grabs.
const DRAGMASK: u32 =
    (xlib::ButtonPressMask | xlib::ButtonReleaseMask | xlib::PointerMotionMask) as u32;

const X_CONFIGUREWINDOW: u8 = 12;
const X_GRABBUTTON: u8 = 28;
const X_GRABKEY: u8 = 33;

const SERVER: mio::Token = mio::Token(0);

/// Errors against windows that vanished, or grabs someone else already holds, are expected.
/// Everything else is logged and otherwise ignored.
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    let ec = err.error_code;
    let rc = err.request_code;
    let ba = ec == xlib::BadAccess;
    let bm = ec == xlib::BadMatch;

    if ec == xlib::BadWindow
        || (rc == X_CONFIGUREWINDOW && bm)
        || (rc == X_GRABBUTTON && ba)
        || (rc == X_GRABKEY && ba)
    {
        return 0;
    }
    tracing::warn!(
        "X error: request code {}, error code {}, resource {}",
        rc,
        ec,
        err.resourceid
    );
    1
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    poll: mio::Poll,
    events: mio::Events,
}

impl XWrap {
    /// Connects to the display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Will error if Xlib can't be loaded, the display can't be opened or the connection can't
    /// be watched.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XConnectionNumber`: https://tronche.com/gui/x/xlib/display/display-macros.html#ConnectionNumber
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self, DisplayError> {
        let xlib = xlib::Xlib::open()?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(DisplayError::DisplayUnavailable);
        }

        let fd = unsafe { (xlib.XConnectionNumber)(display) };
        let poll = mio::Poll::new()?;
        poll.registry().register(
            &mut mio::unix::SourceFd(&fd),
            SERVER,
            mio::Interest::READABLE,
        )?;
        let events = mio::Events::with_capacity(1);

        let root = unsafe { (xlib.XDefaultRootWindow)(display) };
        unsafe { (xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };

        Ok(Self {
            xlib,
            display,
            root,
            poll,
            events,
        })
    }

    /// Replaces every grab on the root with the ones `bindings` needs.
    pub fn init(&mut self, bindings: &Bindings) {
        let modifiers = u32::from(bindings.modkey().bits());
        self.ungrab_keys(self.root);
        self.ungrab_buttons(self.root);
        for keysym in bindings.keysyms() {
            self.grab_keys(self.root, keysym, modifiers);
        }
        for button in bindings.buttons() {
            self.grab_buttons(self.root, u32::from(u8::from(button)), modifiers);
        }
        self.sync();
    }

    /// Blocks until the X connection is readable or `timeout` passes. A signal cuts the wait
    /// short.
    pub fn wait_readable(&mut self, timeout: Duration) {
        if let Err(err) = self.poll.poll(&mut self.events, Some(timeout)) {
            if err.kind() != io::ErrorKind::Interrupted {
                tracing::warn!("Xlib socket poll failed with {:?}", err);
            }
        }
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Returns how many events are waiting.
    // `XPending`: https://tronche.com/gui/x/xlib/event-handling/XPending.html
    #[must_use]
    pub fn queue_len(&self) -> i32 {
        unsafe { (self.xlib.XPending)(self.display) }
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/XCloseDisplay.html
    fn drop(&mut self) {
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}
