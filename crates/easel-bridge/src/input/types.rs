use std::fmt;

/// Modifier keys state carried by every key event.
///
/// Stored as booleans rather than bitflags to keep it explicit and stable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

/// Mouse button identifier, numbered the way DOM `MouseEvent.button` is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
    Other(i16),
}

impl MouseButton {
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => MouseButton::Primary,
            1 => MouseButton::Auxiliary,
            2 => MouseButton::Secondary,
            3 => MouseButton::Back,
            4 => MouseButton::Forward,
            other => MouseButton::Other(other),
        }
    }
}

/// Non-printable keys the bridge recognizes by name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NamedKey {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Insert,

    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,

    ContextMenu,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,
}

impl NamedKey {
    fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Escape" | "Esc" => NamedKey::Escape,
            "Enter" => NamedKey::Enter,
            "Tab" => NamedKey::Tab,
            "Backspace" => NamedKey::Backspace,
            "Delete" | "Del" => NamedKey::Delete,
            "Insert" => NamedKey::Insert,

            "Home" => NamedKey::Home,
            "End" => NamedKey::End,
            "PageUp" => NamedKey::PageUp,
            "PageDown" => NamedKey::PageDown,

            "ArrowUp" | "Up" => NamedKey::ArrowUp,
            "ArrowDown" | "Down" => NamedKey::ArrowDown,
            "ArrowLeft" | "Left" => NamedKey::ArrowLeft,
            "ArrowRight" | "Right" => NamedKey::ArrowRight,

            "Shift" => NamedKey::Shift,
            "Control" => NamedKey::Control,
            "Alt" | "AltGraph" => NamedKey::Alt,
            "Meta" | "OS" => NamedKey::Meta,
            "CapsLock" => NamedKey::CapsLock,

            "ContextMenu" | "Apps" => NamedKey::ContextMenu,

            "F1" => NamedKey::F1,
            "F2" => NamedKey::F2,
            "F3" => NamedKey::F3,
            "F4" => NamedKey::F4,
            "F5" => NamedKey::F5,
            "F6" => NamedKey::F6,
            "F7" => NamedKey::F7,
            "F8" => NamedKey::F8,
            "F9" => NamedKey::F9,
            "F10" => NamedKey::F10,
            "F11" => NamedKey::F11,
            "F12" => NamedKey::F12,

            _ => return None,
        };
        Some(key)
    }
}

/// Logical key value.
///
/// Parsed from the host's key string (DOM `KeyboardEvent.key` values).
/// Anything that is not a known name is treated as printable text.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Named(NamedKey),
    Character(String),
    Unidentified,
}

impl Key {
    pub fn from_host(value: &str) -> Self {
        if value.is_empty() || value == "Unidentified" || value == "Dead" {
            return Key::Unidentified;
        }
        if value == " " || value == "Spacebar" {
            return Key::Character(" ".to_string());
        }
        match NamedKey::from_name(value) {
            Some(named) => Key::Named(named),
            None => Key::Character(value.to_string()),
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Character(s) => {
                let mut chars = s.chars();
                let c = chars.next()?;
                chars.next().is_none().then_some(c)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(named) => write!(f, "{named:?}"),
            Key::Character(s) => f.write_str(s),
            Key::Unidentified => f.write_str("Unidentified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_parse() {
        assert_eq!(Key::from_host("Enter"), Key::Named(NamedKey::Enter));
        assert_eq!(Key::from_host("ArrowLeft"), Key::Named(NamedKey::ArrowLeft));
        assert_eq!(Key::from_host("Left"), Key::Named(NamedKey::ArrowLeft));
        assert_eq!(Key::from_host("F12"), Key::Named(NamedKey::F12));
        assert_eq!(Key::from_host("Meta"), Key::Named(NamedKey::Meta));
    }

    #[test]
    fn printable_values_become_characters() {
        assert_eq!(Key::from_host("a"), Key::Character("a".into()));
        assert_eq!(Key::from_host("A"), Key::Character("A".into()));
        assert_eq!(Key::from_host("é"), Key::Character("é".into()));
        assert_eq!(Key::from_host("Spacebar"), Key::Character(" ".into()));
    }

    #[test]
    fn unknown_names_fall_back_to_character() {
        // Keys outside the named set still reach the core verbatim.
        assert_eq!(Key::from_host("MediaPlayPause"), Key::Character("MediaPlayPause".into()));
    }

    #[test]
    fn empty_and_unidentified() {
        assert_eq!(Key::from_host(""), Key::Unidentified);
        assert_eq!(Key::from_host("Unidentified"), Key::Unidentified);
        assert_eq!(Key::from_host("Dead"), Key::Unidentified);
    }

    #[test]
    fn as_char_only_for_single_scalar() {
        assert_eq!(Key::from_host("x").as_char(), Some('x'));
        assert_eq!(Key::from_host("Enter").as_char(), None);
        assert_eq!(Key::from_host("MediaPlayPause").as_char(), None);
    }

    #[test]
    fn mouse_button_indices() {
        assert_eq!(MouseButton::from_index(0), MouseButton::Primary);
        assert_eq!(MouseButton::from_index(2), MouseButton::Secondary);
        assert_eq!(MouseButton::from_index(9), MouseButton::Other(9));
    }
}
