//! Classifies raw display events into what the user asked for.
use crate::bindings::Bindings;
use crate::config::{KeyCommand, MouseCommand};
use crate::models::{DragMode, Handle, WindowHandle};
use crate::DisplayEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<H: Handle> {
    RaiseOnKey(WindowHandle<H>),
    QuitRequest,
    LaunchRequest(String),
    DragStart {
        window: WindowHandle<H>,
        mode: DragMode,
        pointer: (i32, i32),
    },
    RaiseOnButton(WindowHandle<H>),
    DragUpdate((i32, i32)),
    DragEnd,
}

impl<H: Handle> Intent<H> {
    /// Maps an event to an intent using the bound keys and buttons.
    ///
    /// The modifier mask is not checked: the display server only grabs the configured chords.
    /// Returns `None` for anything that is not bound or that needs a window and has none.
    #[must_use]
    pub fn classify(event: DisplayEvent<H>, bindings: &Bindings) -> Option<Self> {
        match event {
            DisplayEvent::KeyPress(_, keysym, window) => {
                let bind = bindings.find_keybind_for(keysym)?;
                match bind.command {
                    KeyCommand::Raise => window.map(Self::RaiseOnKey),
                    KeyCommand::Quit => Some(Self::QuitRequest),
                    KeyCommand::Launch => Some(Self::LaunchRequest(bind.value.clone())),
                }
            }
            DisplayEvent::ButtonPress(_, button, window, x, y) => {
                let window = window?;
                let mode = match bindings.find_mousebind_for(button)? {
                    MouseCommand::Raise => return Some(Self::RaiseOnButton(window)),
                    MouseCommand::Move => DragMode::Move,
                    MouseCommand::Resize => DragMode::Resize,
                };
                Some(Self::DragStart {
                    window,
                    mode,
                    pointer: (x, y),
                })
            }
            DisplayEvent::ButtonRelease(..) => Some(Self::DragEnd),
            DisplayEvent::Motion(x, y) => Some(Self::DragUpdate((x, y))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::models::MockHandle;
    use crate::utils::modmask_lookup::{Button, ModMask};
    use x11_dl::keysym;

    fn classify(event: DisplayEvent<MockHandle>) -> Option<Intent<MockHandle>> {
        Intent::classify(event, &Bindings::new(&TestConfig::default()))
    }

    #[test]
    fn raise_key_over_a_window_raises_it() {
        let event = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_Return, Some(WindowHandle(3)));
        assert_eq!(classify(event), Some(Intent::RaiseOnKey(WindowHandle(3))));
    }

    #[test]
    fn raise_key_over_the_root_is_dropped() {
        let event = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_Return, None);
        assert_eq!(classify(event), None);
    }

    #[test]
    fn quit_key_quits_wherever_the_pointer_is() {
        let over_root = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_q, None);
        let over_window = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_q, Some(WindowHandle(1)));
        assert_eq!(classify(over_root), Some(Intent::QuitRequest));
        assert_eq!(classify(over_window), Some(Intent::QuitRequest));
    }

    #[test]
    fn launch_key_carries_the_command() {
        let event = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_p, None);
        assert_eq!(
            classify(event),
            Some(Intent::LaunchRequest("dmenu_run".to_owned()))
        );
    }

    #[test]
    fn unbound_key_is_dropped() {
        let event = DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_x, Some(WindowHandle(1)));
        assert_eq!(classify(event), None);
    }

    #[test]
    fn button1_starts_a_move() {
        let event =
            DisplayEvent::ButtonPress(ModMask::Alt, Button::Button1, Some(WindowHandle(4)), 7, 9);
        assert_eq!(
            classify(event),
            Some(Intent::DragStart {
                window: WindowHandle(4),
                mode: DragMode::Move,
                pointer: (7, 9),
            })
        );
    }

    #[test]
    fn button3_starts_a_resize() {
        let event =
            DisplayEvent::ButtonPress(ModMask::Alt, Button::Button3, Some(WindowHandle(4)), 1, 2);
        assert_eq!(
            classify(event),
            Some(Intent::DragStart {
                window: WindowHandle(4),
                mode: DragMode::Resize,
                pointer: (1, 2),
            })
        );
    }

    #[test]
    fn button2_only_raises() {
        let event =
            DisplayEvent::ButtonPress(ModMask::Alt, Button::Button2, Some(WindowHandle(4)), 1, 2);
        assert_eq!(classify(event), Some(Intent::RaiseOnButton(WindowHandle(4))));
    }

    #[test]
    fn button_press_over_the_root_is_dropped() {
        let event = DisplayEvent::ButtonPress(ModMask::Alt, Button::Button1, None, 1, 2);
        assert_eq!(classify(event), None);
    }

    #[test]
    fn unbound_button_is_dropped() {
        let event =
            DisplayEvent::ButtonPress(ModMask::Alt, Button::Button4, Some(WindowHandle(4)), 1, 2);
        assert_eq!(classify(event), None);
    }

    #[test]
    fn any_release_ends_a_drag() {
        let left = DisplayEvent::ButtonRelease(ModMask::Alt, Button::Button1);
        let wheel = DisplayEvent::ButtonRelease(ModMask::empty(), Button::Button5);
        assert_eq!(classify(left), Some(Intent::DragEnd));
        assert_eq!(classify(wheel), Some(Intent::DragEnd));
    }

    #[test]
    fn motion_is_a_drag_update() {
        let event = DisplayEvent::Motion(-4, 12);
        assert_eq!(classify(event), Some(Intent::DragUpdate((-4, 12))));
    }
}
