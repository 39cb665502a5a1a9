//! Key names as written in the config, resolved to X keysyms.
use lefthk_core::xkeysym_lookup;

pub type XKeysym = u32;

/// Resolves a key name to the keysym X reports for that key without modifiers.
///
/// Any name from the X keysym table is accepted (`minus`, `Print`, `XF86XK_AudioMute`, ...).
/// Vendor keys may also be written the way `xev` prints them (`XF86AudioMute`).
/// Single letters resolve to their lowercase keysym whatever case they are written in, since
/// the display server translates keycodes at shift level 0.
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let mut chars = key.chars();
    let sym = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => {
            xkeysym_lookup::into_keysym(&c.to_ascii_lowercase().to_string())
        }
        _ => xkeysym_lookup::into_keysym(key).or_else(|| {
            let vendor = key.strip_prefix("XF86")?;
            xkeysym_lookup::into_keysym(&format!("XF86XK_{vendor}"))
        }),
    }?;
    XKeysym::try_from(sym).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use x11_dl::keysym;

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(into_keysym("q"), Some(keysym::XK_q));
        assert_eq!(into_keysym("Q"), Some(keysym::XK_q));
        assert_eq!(into_keysym("p"), Some(keysym::XK_p));
    }

    #[test]
    fn digits_resolve() {
        assert_eq!(into_keysym("1"), Some(keysym::XK_1));
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(into_keysym("Return"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("F12"), Some(keysym::XK_F12));
    }

    const AUDIO_MUTE: XKeysym = 0x1008_FF12;

    #[test]
    fn punctuation_and_special_keys_resolve() {
        assert_eq!(into_keysym("minus"), Some(keysym::XK_minus));
        assert_eq!(into_keysym("comma"), Some(keysym::XK_comma));
        assert_eq!(into_keysym("slash"), Some(keysym::XK_slash));
        assert_eq!(into_keysym("grave"), Some(keysym::XK_grave));
        assert_eq!(into_keysym("Print"), Some(keysym::XK_Print));
        assert_eq!(into_keysym("F13"), Some(keysym::XK_F13));
    }

    #[test]
    fn vendor_keys_resolve_with_or_without_the_xk_prefix() {
        assert_eq!(into_keysym("XF86XK_AudioMute"), Some(AUDIO_MUTE));
        assert_eq!(into_keysym("XF86AudioMute"), Some(AUDIO_MUTE));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym(""), None);
    }
}
