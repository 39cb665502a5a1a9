use super::{Config, DEFAULT_MODKEY};
use grabwm_core::config::{KeyCommand, Keybind, MouseCommand, Mousebind};
use grabwm_core::utils::modmask_lookup::Button;

impl Default for Config {
    fn default() -> Self {
        let keybind = vec![
            // Mod + Return => raise the window under the pointer
            Keybind {
                command: KeyCommand::Raise,
                value: String::default(),
                key: "Return".to_owned(),
            },
            // Mod + q => quit grabwm
            Keybind {
                command: KeyCommand::Quit,
                value: String::default(),
                key: "q".to_owned(),
            },
            // Mod + p => open dmenu
            Keybind {
                command: KeyCommand::Launch,
                value: "dmenu_run".to_owned(),
                key: "p".to_owned(),
            },
        ];

        let mousebind = vec![
            Mousebind {
                command: MouseCommand::Move,
                button: Button::Button1,
            },
            Mousebind {
                command: MouseCommand::Raise,
                button: Button::Button2,
            },
            Mousebind {
                command: MouseCommand::Resize,
                button: Button::Button3,
            },
        ];

        Self {
            modkey: DEFAULT_MODKEY.to_owned(),
            keybind,
            mousebind,
        }
    }
}
