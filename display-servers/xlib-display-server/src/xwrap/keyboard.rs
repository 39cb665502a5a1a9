//! Xlib calls related to a keyboard.
use crate::XWrap;
use grabwm_core::utils::xkeysym_lookup::XKeysym;
use std::os::raw::c_ulong;
use x11_dl::xlib;

impl XWrap {
    /// Grabs the keysym with the modifier for a window.
    // `XKeysymToKeycode`: https://tronche.com/gui/x/xlib/utilities/keyboard/XKeysymToKeycode.html
    // `XGrabKey`: https://tronche.com/gui/x/xlib/input/XGrabKey.html
    pub fn grab_keys(&self, window: xlib::Window, keysym: XKeysym, modifiers: u32) {
        let code = unsafe { (self.xlib.XKeysymToKeycode)(self.display, c_ulong::from(keysym)) };
        if code == 0 {
            tracing::warn!("No keycode for keysym {:#x}, not grabbing it", keysym);
            return;
        }
        // Grab the keys with and without numlock (Mod2) and capslock.
        for m in lock_variants(modifiers) {
            unsafe {
                (self.xlib.XGrabKey)(
                    self.display,
                    i32::from(code),
                    m,
                    window,
                    1,
                    xlib::GrabModeAsync,
                    xlib::GrabModeAsync,
                );
            }
        }
    }

    /// Cleans all currently grabbed keys of a window.
    // `XUngrabKey`: https://tronche.com/gui/x/xlib/input/XUngrabKey.html
    pub fn ungrab_keys(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabKey)(self.display, xlib::AnyKey, xlib::AnyModifier, window);
        }
    }

    /// Converts a keycode to a keysym, ignoring shift state.
    // `XkbKeycodeToKeysym`: https://linux.die.net/man/3/xkbkeycodetokeysym
    #[must_use]
    pub fn keycode_to_keysym(&self, keycode: u32) -> XKeysym {
        // Not using XKeycodeToKeysym because deprecated.
        let sym = unsafe { (self.xlib.XkbKeycodeToKeysym)(self.display, keycode as u8, 0, 0) };
        sym as XKeysym
    }
}

/// The modifier combined with every state of the lock keys.
pub(crate) const fn lock_variants(modifiers: u32) -> [u32; 4] {
    [
        modifiers,
        modifiers | xlib::Mod2Mask,
        modifiers | xlib::LockMask,
        modifiers | xlib::Mod2Mask | xlib::LockMask,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_variants_cover_numlock_and_capslock() {
        let variants = lock_variants(xlib::Mod1Mask);
        assert!(variants.iter().all(|m| m & xlib::Mod1Mask != 0));
        assert!(variants.contains(&xlib::Mod1Mask));
        assert!(variants.contains(&(xlib::Mod1Mask | xlib::Mod2Mask | xlib::LockMask)));
    }
}
