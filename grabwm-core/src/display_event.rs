use crate::models::{Handle, WindowHandle};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::XKeysym;

/// Input as reported by the display server. Pointer coordinates are root-relative and the
/// window, when present, is the top-level window under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    KeyPress(ModMask, XKeysym, Option<WindowHandle<H>>),
    ButtonPress(ModMask, Button, Option<WindowHandle<H>>, i32, i32),
    ButtonRelease(ModMask, Button),
    Motion(i32, i32),
}
