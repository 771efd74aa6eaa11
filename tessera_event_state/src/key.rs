// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical key identifiers.

/// A logical key, as reported by the host after keyboard layout mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key that produces a printable character (including space).
    Character(char),
    /// A non-printing key.
    Named(NamedKey),
}

/// Non-printing keys the toolkit understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Backspace.
    Backspace,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Delete.
    Delete,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Shift modifier.
    Shift,
    /// Control modifier.
    Control,
    /// Alt / Option modifier.
    Alt,
    /// Meta / Command / Windows modifier.
    Meta,
    /// Any named key the toolkit does not model.
    Unidentified,
}

impl Key {
    /// Parse a host key string.
    ///
    /// Single-character strings become [`Key::Character`]; known names such as
    /// `"Backspace"` or `"ArrowLeft"` become [`Key::Named`]. Anything else maps to
    /// [`NamedKey::Unidentified`].
    ///
    /// ```
    /// use tessera_event_state::key::{Key, NamedKey};
    ///
    /// assert_eq!(Key::parse(" "), Key::Character(' '));
    /// assert_eq!(Key::parse("Backspace"), Key::Named(NamedKey::Backspace));
    /// assert_eq!(Key::parse("F13"), Key::Named(NamedKey::Unidentified));
    /// ```
    pub fn parse(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Character(c);
        }
        let named = match name {
            "Backspace" => NamedKey::Backspace,
            "Enter" => NamedKey::Enter,
            "Escape" => NamedKey::Escape,
            "Tab" => NamedKey::Tab,
            "Delete" => NamedKey::Delete,
            "ArrowUp" => NamedKey::ArrowUp,
            "ArrowDown" => NamedKey::ArrowDown,
            "ArrowLeft" => NamedKey::ArrowLeft,
            "ArrowRight" => NamedKey::ArrowRight,
            "Shift" => NamedKey::Shift,
            "Control" => NamedKey::Control,
            "Alt" => NamedKey::Alt,
            "Meta" => NamedKey::Meta,
            _ => NamedKey::Unidentified,
        };
        Self::Named(named)
    }

    /// Returns the character for printable keys.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Character(c) => Some(*c),
            Self::Named(_) => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Character(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_chars_and_names() {
        assert_eq!(Key::parse("q"), Key::Character('q'));
        assert_eq!(Key::parse("+"), Key::Character('+'));
        assert_eq!(Key::parse("é"), Key::Character('é'));
        assert_eq!(Key::parse("Enter"), Key::Named(NamedKey::Enter));
        assert_eq!(Key::parse(""), Key::Named(NamedKey::Unidentified));
    }

    #[test]
    fn as_char_only_for_printables() {
        assert_eq!(Key::from('x').as_char(), Some('x'));
        assert_eq!(Key::Named(NamedKey::Tab).as_char(), None);
    }
}
