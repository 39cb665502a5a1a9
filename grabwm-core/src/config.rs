use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};

/// What a bound key does.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Raise the window under the pointer.
    Raise,
    /// Stop the window manager.
    Quit,
    /// Run the bind's value as a shell command.
    Launch,
}

/// What a bound mouse button does to the window under the pointer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseCommand {
    Move,
    Raise,
    Resize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Keybind {
    pub command: KeyCommand,
    #[serde(default)]
    pub value: String,
    pub key: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mousebind {
    pub command: MouseCommand,
    pub button: Button,
}

pub trait Config {
    /// The modifier every key and button binding is chorded with.
    fn modkey(&self) -> ModMask;

    fn keybinds(&self) -> Vec<Keybind>;

    fn mousebinds(&self) -> Vec<Mousebind>;
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub keybinds: Vec<Keybind>,
    pub mousebinds: Vec<Mousebind>,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        let keybind = |command, key: &str, value: &str| Keybind {
            command,
            value: value.to_owned(),
            key: key.to_owned(),
        };
        let mousebind = |command, button| Mousebind { command, button };
        Self {
            keybinds: vec![
                keybind(KeyCommand::Raise, "Return", ""),
                keybind(KeyCommand::Quit, "q", ""),
                keybind(KeyCommand::Launch, "p", "dmenu_run"),
            ],
            mousebinds: vec![
                mousebind(MouseCommand::Move, Button::Button1),
                mousebind(MouseCommand::Raise, Button::Button2),
                mousebind(MouseCommand::Resize, Button::Button3),
            ],
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn modkey(&self) -> ModMask {
        ModMask::Alt
    }

    fn keybinds(&self) -> Vec<Keybind> {
        self.keybinds.clone()
    }

    fn mousebinds(&self) -> Vec<Mousebind> {
        self.mousebinds.clone()
    }
}
