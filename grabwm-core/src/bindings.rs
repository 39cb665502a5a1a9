//! Lookup tables from keysyms and buttons to the configured commands.
use crate::config::{Config, Keybind, MouseCommand};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::utils::xkeysym_lookup::{self, XKeysym};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Bindings {
    modkey: ModMask,
    keybinds: HashMap<XKeysym, Keybind>,
    mousebinds: HashMap<Button, MouseCommand>,
}

impl Bindings {
    /// Builds the lookup tables. Keybinds naming an unknown key are skipped.
    pub fn new(config: &impl Config) -> Self {
        let mut keybinds = HashMap::new();
        for bind in config.keybinds() {
            match xkeysym_lookup::into_keysym(&bind.key) {
                Some(keysym) => {
                    keybinds.insert(keysym, bind);
                }
                None => tracing::warn!("Ignoring keybind for unknown key {:?}", bind.key),
            }
        }
        let mousebinds = config
            .mousebinds()
            .into_iter()
            .map(|bind| (bind.button, bind.command))
            .collect();
        Self {
            modkey: config.modkey(),
            keybinds,
            mousebinds,
        }
    }

    #[must_use]
    pub const fn modkey(&self) -> ModMask {
        self.modkey
    }

    #[must_use]
    pub fn find_keybind_for(&self, key: XKeysym) -> Option<&Keybind> {
        self.keybinds.get(&key)
    }

    #[must_use]
    pub fn find_mousebind_for(&self, button: Button) -> Option<MouseCommand> {
        self.mousebinds.get(&button).copied()
    }

    /// Every keysym that needs a grab.
    pub fn keysyms(&self) -> impl Iterator<Item = XKeysym> + '_ {
        self.keybinds.keys().copied()
    }

    /// Every button that needs a grab.
    pub fn buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.mousebinds.keys().copied()
    }
}
