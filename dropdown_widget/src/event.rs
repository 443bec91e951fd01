// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events understood by [`DropdownState::handle`](crate::DropdownState::handle).

use dropdown_panel::KeyEvent;

/// Pre-resolved pointer target.
///
/// The dropdown does not hit test. Hosts decide whether the pointer is inside the options
/// panel and, if so, which option row it is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PointerHit {
    /// Whether the pointer is inside the options panel.
    pub in_panel: bool,
    /// Index of the option under the pointer, if any.
    pub option: Option<usize>,
}

impl PointerHit {
    /// A pointer outside the options panel (for example over the value box).
    #[must_use]
    pub const fn outside() -> Self {
        Self {
            in_panel: false,
            option: None,
        }
    }

    /// A pointer inside the options panel, over `option` if any.
    #[must_use]
    pub const fn panel(option: Option<usize>) -> Self {
        Self {
            in_panel: true,
            option,
        }
    }

    /// A pointer over the option at `index`.
    #[must_use]
    pub const fn option(index: usize) -> Self {
        Self::panel(Some(index))
    }
}

/// An input event delivered to a dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownEvent {
    /// The dropdown gained focus.
    Focus,
    /// The dropdown lost focus.
    Blur,
    /// A pointer click.
    Click(PointerHit),
    /// The pointer moved over part of the dropdown.
    MouseOver(PointerHit),
    /// A key press.
    KeyDown(KeyEvent),
}

impl DropdownEvent {
    /// DOM event name this event corresponds to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Click(_) => "click",
            Self::MouseOver(_) => "mouseover",
            Self::KeyDown(_) => "keydown",
        }
    }
}

impl From<KeyEvent> for DropdownEvent {
    fn from(key: KeyEvent) -> Self {
        Self::KeyDown(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropdown_panel::KeyCode;

    #[test]
    fn hit_constructors() {
        assert_eq!(PointerHit::outside(), PointerHit::default());
        assert_eq!(
            PointerHit::option(2),
            PointerHit {
                in_panel: true,
                option: Some(2)
            }
        );
        assert!(PointerHit::panel(None).in_panel);
    }

    #[test]
    fn event_names() {
        assert_eq!(DropdownEvent::Focus.name(), "focus");
        assert_eq!(DropdownEvent::Blur.name(), "blur");
        assert_eq!(DropdownEvent::Click(PointerHit::outside()).name(), "click");
        assert_eq!(
            DropdownEvent::MouseOver(PointerHit::option(0)).name(),
            "mouseover"
        );
        assert_eq!(DropdownEvent::from(KeyEvent::new(KeyCode::Enter)).name(), "keydown");
    }
}
