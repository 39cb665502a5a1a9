use super::Config;
use grabwm_core::config::KeyCommand;
use grabwm_core::utils::{modmask_lookup, xkeysym_lookup};
use std::collections::HashMap;

impl Config {
    /// Everything in the config that won't work as written. None of it stops `grabwm` from
    /// starting: broken bindings are skipped and a broken modkey falls back to `Mod1`.
    #[must_use]
    pub fn check(&self) -> Vec<String> {
        let mut issues = self.check_modkey();
        issues.extend(self.check_keybinds());
        issues.extend(self.check_mousebinds());
        issues
    }

    fn check_modkey(&self) -> Vec<String> {
        let names = self.modkey_names();
        if names.is_empty() {
            return vec!["Your modkey is set to nothing, falling back to Mod1.".to_owned()];
        }
        let mut issues: Vec<String> = names
            .iter()
            .filter(|name| modmask_lookup::into_mod(name).is_empty())
            .map(|name| format!("Modifier `{name}` is not valid"))
            .collect();
        if issues.len() == names.len() {
            issues.push("No valid modifier in modkey, falling back to Mod1.".to_owned());
        }
        issues
    }

    fn check_keybinds(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut bound = HashMap::new();
        for keybind in &self.keybind {
            let Some(keysym) = xkeysym_lookup::into_keysym(&keybind.key) else {
                issues.push(format!("Key `{}` is not valid, skipping it", keybind.key));
                continue;
            };
            if keybind.command == KeyCommand::Launch && keybind.value.trim().is_empty() {
                issues.push(format!("Key `{}` launches nothing", keybind.key));
            }
            if let Some(previous) = bound.insert(keysym, &keybind.key) {
                issues.push(format!(
                    "Multiple commands bound to key `{}` (also `{previous}`), the last one wins",
                    keybind.key
                ));
            }
        }
        issues
    }

    fn check_mousebinds(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut bound = HashMap::new();
        for mousebind in &self.mousebind {
            if bound.insert(mousebind.button, mousebind.command).is_some() {
                issues.push(format!(
                    "Multiple commands bound to button {}, the last one wins",
                    u8::from(mousebind.button)
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grabwm_core::config::{Keybind, MouseCommand, Mousebind};
    use grabwm_core::utils::modmask_lookup::Button;

    fn keybind(command: KeyCommand, key: &str, value: &str) -> Keybind {
        Keybind {
            command,
            value: value.to_owned(),
            key: key.to_owned(),
        }
    }

    #[test]
    fn defaults_have_no_issues() {
        assert!(Config::default().check().is_empty());
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut config = Config::default();
        config.keybind.push(keybind(KeyCommand::Quit, "NotAKey", ""));
        let issues = config.check();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("NotAKey"));
    }

    #[test]
    fn launch_without_command_is_reported() {
        let config = Config {
            keybind: vec![keybind(KeyCommand::Launch, "t", "  ")],
            ..Config::default()
        };
        assert_eq!(config.check(), vec!["Key `t` launches nothing".to_owned()]);
    }

    #[test]
    fn keys_with_the_same_keysym_conflict() {
        let config = Config {
            keybind: vec![
                keybind(KeyCommand::Raise, "q", ""),
                keybind(KeyCommand::Quit, "Q", ""),
            ],
            ..Config::default()
        };
        let issues = config.check();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("`Q` (also `q`)"));
    }

    #[test]
    fn duplicate_buttons_are_reported() {
        let mut config = Config::default();
        config.mousebind.push(Mousebind {
            command: MouseCommand::Raise,
            button: Button::Button1,
        });
        assert_eq!(
            config.check(),
            vec!["Multiple commands bound to button 1, the last one wins".to_owned()]
        );
    }

    #[test]
    fn bad_modkeys_are_reported() {
        let empty = Config {
            modkey: String::new(),
            ..Config::default()
        };
        assert_eq!(empty.check().len(), 1);

        let partly_bad = Config {
            modkey: "Mod4+Hyper".to_owned(),
            ..Config::default()
        };
        assert_eq!(
            partly_bad.check(),
            vec!["Modifier `Hyper` is not valid".to_owned()]
        );

        let all_bad = Config {
            modkey: "Hyper".to_owned(),
            ..Config::default()
        };
        assert_eq!(all_bad.check().len(), 2);
    }
}
