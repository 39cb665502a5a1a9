use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys, bit for bit as X reports them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

impl ModMask {
    /// Drops the lock bits (`NumLock`, `CapsLock`) and anything that is not a modifier.
    #[must_use]
    pub fn without_locks(self) -> Self {
        self.intersection(
            Self::Shift | Self::Control | Self::Alt | Self::Mod3 | Self::Super | Self::Mod5,
        )
    }
}

/// Mouse buttons as numbered by X.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "u8", into = "u8")]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
    Other(u8),
}

impl From<u8> for Button {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Button1,
            2 => Self::Button2,
            3 => Self::Button3,
            4 => Self::Button4,
            5 => Self::Button5,
            other => Self::Other(other),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        match button {
            Button::Button1 => 1,
            Button::Button2 => 2,
            Button::Button3 => 3,
            Button::Button4 => 4,
            Button::Button5 => 5,
            Button::Other(code) => code,
        }
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    keys.iter()
        .fold(ModMask::empty(), |mask, key| mask | into_mod(key))
        .without_locks()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // NOTE: we are ignoring the state of Numlock
        // this is left here as a reminder
        // "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::empty(),
    }
}
