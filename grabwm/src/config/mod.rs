//! `grabwm` general configuration

mod checks;
mod default;

use anyhow::{Context, Result};
use grabwm_core::config::{Keybind, Mousebind};
use grabwm_core::utils::modmask_lookup::{self, ModMask};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xdg::BaseDirectories;

/// Used whenever `modkey` names no usable modifier.
const DEFAULT_MODKEY: &str = "Mod1";

/// Everything `grabwm` reads from `config.toml`. Missing fields take their default.
///
/// # Example
///
/// ```toml
/// modkey = "Mod4"
///
/// [[keybind]]
/// command = "Launch"
/// value = "xterm"
/// key = "Return"
///
/// [[mousebind]]
/// command = "Resize"
/// button = 3
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Modifier chord shared by every binding, e.g. `"Mod1"` or `"Mod4+Shift"`.
    pub modkey: String,
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,
}

/// Loads the user's config, falling back to the defaults when it is missing or broken.
#[must_use]
pub fn load() -> Config {
    let config = load_from_file()
        .map_err(|err| tracing::error!("Couldn't load config.toml, using defaults: {:?}", err))
        .unwrap_or_default();
    for issue in config.check() {
        tracing::warn!("{}", issue);
    }
    config
}

/// # Errors
///
/// Will error if the XDG directories can't be determined or the config file exists and can't be
/// parsed. See `load_from_path`.
fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("grabwm")?;
    match path.find_config_file("config.toml") {
        Some(config_filename) => {
            tracing::info!("Loading config from {}", config_filename.display());
            load_from_path(&config_filename)
        }
        None => {
            tracing::info!("No config.toml found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Reads and parses a config file.
///
/// # Errors
///
/// Will error if the file can't be read or isn't valid TOML for a `Config`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

impl Config {
    fn modkey_names(&self) -> Vec<String> {
        self.modkey
            .split('+')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// The configured modifier chord, or `Mod1` if it names nothing usable.
    #[must_use]
    pub fn modmask(&self) -> ModMask {
        let mask = modmask_lookup::into_modmask(&self.modkey_names());
        if mask.is_empty() {
            modmask_lookup::into_mod(DEFAULT_MODKEY)
        } else {
            mask
        }
    }
}

impl grabwm_core::Config for Config {
    fn modkey(&self) -> ModMask {
        self.modmask()
    }

    fn keybinds(&self) -> Vec<Keybind> {
        self.keybind.clone()
    }

    fn mousebinds(&self) -> Vec<Mousebind> {
        self.mousebind.clone()
    }
}
