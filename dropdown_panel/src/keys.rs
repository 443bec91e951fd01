// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the dropdown state machines.
//!
//! Hosts translate their native keyboard events into a [`KeyEvent`]. Browser hosts can feed
//! `KeyboardEvent.code` straight into [`KeyCode::from_code`].

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key.
        const ALT   = 0b0000_0100;
        /// Super / Meta / Command key.
        const SUPER = 0b0000_1000;
    }
}

/// Keys the dropdown reacts to, plus a catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// A character key (letters are reported in lowercase).
    Char(char),
    /// Any other key.
    Other,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.code` string to a key code.
    ///
    /// Physical letter and digit keys (`"KeyA"`, `"Digit1"`) map to [`KeyCode::Char`];
    /// anything unrecognized maps to [`KeyCode::Other`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            "Space" => Self::Space,
            "Escape" => Self::Escape,
            "Tab" => Self::Tab,
            _ => code
                .strip_prefix("Key")
                .or_else(|| code.strip_prefix("Digit"))
                .and_then(single_char)
                .map_or(Self::Other, |c| Self::Char(c.to_ascii_lowercase())),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Return this key event with `modifiers` held.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Super/Meta/Cmd is held.
    #[must_use]
    pub const fn super_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SUPER)
    }

    /// Whether this is Alt+ArrowDown or Alt+ArrowUp, the platform gesture for toggling a
    /// listbox.
    #[must_use]
    pub fn is_alt_vertical_arrow(&self) -> bool {
        self.alt() && matches!(self.code, KeyCode::ArrowDown | KeyCode::ArrowUp)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_codes_map_to_keys() {
        assert_eq!(KeyCode::from_code("ArrowDown"), KeyCode::ArrowDown);
        assert_eq!(KeyCode::from_code("Space"), KeyCode::Space);
        assert_eq!(KeyCode::from_code("KeyQ"), KeyCode::Char('q'));
        assert_eq!(KeyCode::from_code("Digit7"), KeyCode::Char('7'));
        assert_eq!(KeyCode::from_code("Keyboard"), KeyCode::Other);
        assert_eq!(KeyCode::from_code("F5"), KeyCode::Other);
    }

    #[test]
    fn modifier_queries() {
        let key = KeyEvent::new(KeyCode::ArrowUp).with_modifiers(Modifiers::ALT | Modifiers::SHIFT);
        assert!(key.alt());
        assert!(key.shift());
        assert!(!key.ctrl());
        assert!(!key.super_key());
        assert!(key.is_alt_vertical_arrow());
        assert!(!KeyEvent::new(KeyCode::ArrowUp).is_alt_vertical_arrow());
    }
}
