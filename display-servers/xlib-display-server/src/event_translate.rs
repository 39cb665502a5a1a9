use crate::{XWrap, XlibWindowHandle};
use grabwm_core::models::WindowHandle;
use grabwm_core::utils::modmask_lookup::{Button, ModMask};
use grabwm_core::DisplayEvent;
use std::os::raw::c_uint;
use x11_dl::xlib;

pub struct XEvent<'a>(pub &'a XWrap, pub xlib::XEvent);

impl<'a> From<XEvent<'a>> for Option<DisplayEvent<XlibWindowHandle>> {
    fn from(x_event: XEvent) -> Self {
        let raw_event = x_event.1;

        match raw_event.get_type() {
            // Grabbed key pressed.
            xlib::KeyPress => Some(from_key_press(&x_event)),
            // Mouse button pressed.
            xlib::ButtonPress => Some(from_button_press(raw_event)),
            // Mouse button released.
            xlib::ButtonRelease => Some(from_button_release(raw_event)),
            // Mouse motion notify.
            xlib::MotionNotify => Some(from_motion_notify(raw_event)),
            _other => None,
        }
    }
}

fn from_key_press(x_event: &XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XKeyEvent::from(x_event.1);
    let keysym = x_event.0.keycode_to_keysym(event.keycode);
    DisplayEvent::KeyPress(
        clean_mask(event.state),
        keysym,
        child_handle(event.subwindow),
    )
}

fn from_button_press(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonEvent::from(raw_event);
    DisplayEvent::ButtonPress(
        clean_mask(event.state),
        Button::from(event.button as u8),
        child_handle(event.subwindow),
        event.x_root,
        event.y_root,
    )
}

fn from_button_release(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XButtonEvent::from(raw_event);
    DisplayEvent::ButtonRelease(clean_mask(event.state), Button::from(event.button as u8))
}

fn from_motion_notify(raw_event: xlib::XEvent) -> DisplayEvent<XlibWindowHandle> {
    let event = xlib::XMotionEvent::from(raw_event);
    DisplayEvent::Motion(event.x_root, event.y_root)
}

/// Modifier state without the lock keys or the button bits.
fn clean_mask(state: c_uint) -> ModMask {
    ModMask::from_bits_truncate(state as u16).without_locks()
}

/// Grabs are on the root, so the window under the pointer arrives as the subwindow. `0` means
/// the pointer was over the root itself.
fn child_handle(subwindow: xlib::Window) -> Option<WindowHandle<XlibWindowHandle>> {
    (subwindow != 0).then_some(WindowHandle(XlibWindowHandle(subwindow)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_drop_locks_and_buttons() {
        let state = xlib::Mod1Mask | xlib::Mod2Mask | xlib::LockMask | xlib::Button1Mask;
        assert_eq!(clean_mask(state), ModMask::Alt);
        assert_eq!(
            clean_mask(xlib::Mod4Mask | xlib::ShiftMask),
            ModMask::Super | ModMask::Shift
        );
    }

    #[test]
    fn subwindow_zero_is_the_root() {
        assert_eq!(child_handle(0), None);
        assert_eq!(child_handle(42), Some(WindowHandle(XlibWindowHandle(42))));
    }

    #[test]
    fn button_release_keeps_the_button_number() {
        let mut event: xlib::XButtonEvent = unsafe { std::mem::zeroed() };
        event.type_ = xlib::ButtonRelease;
        event.button = 3;
        event.state = xlib::Mod1Mask | xlib::Button3Mask;
        let raw = xlib::XEvent::from(event);
        assert_eq!(
            from_button_release(raw),
            DisplayEvent::ButtonRelease(ModMask::Alt, Button::Button3)
        );
    }

    #[test]
    fn button_press_reports_root_coordinates() {
        let mut event: xlib::XButtonEvent = unsafe { std::mem::zeroed() };
        event.type_ = xlib::ButtonPress;
        event.button = 1;
        event.subwindow = 9;
        event.x = 3;
        event.y = 4;
        event.x_root = 300;
        event.y_root = 400;
        let raw = xlib::XEvent::from(event);
        assert_eq!(
            from_button_press(raw),
            DisplayEvent::ButtonPress(
                ModMask::empty(),
                Button::Button1,
                Some(WindowHandle(XlibWindowHandle(9))),
                300,
                400
            )
        );
    }
}
