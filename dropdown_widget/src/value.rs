// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection between state snapshots.
//!
//! A `change` event fires once per commit: when the panel is closed and the committed value
//! differs from the previous snapshot. Hovering and arrow keys inside an open panel never
//! fire on their own; the commit is reported when the panel closes.

use crate::DropdownState;

/// A `change` event carrying the newly committed value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChangeEvent<V> {
    /// The committed value; `None` for a placeholder option.
    pub value: Option<V>,
    /// Whether the event bubbles. Always `true` for events built by [`change_event`].
    pub bubbles: bool,
}

impl<V> ChangeEvent<V> {
    /// DOM event name.
    pub const NAME: &'static str = "change";

    /// DOM event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Whether moving from `old` to `new` should emit a `change` event.
pub fn value_changed<V: PartialEq, L>(
    old: &DropdownState<V, L>,
    new: &DropdownState<V, L>,
) -> bool {
    !new.is_opened() && old.committed().value != new.committed().value
}

/// The `change` event describing `state`'s committed value.
pub fn change_event<V: Clone, L>(state: &DropdownState<V, L>) -> ChangeEvent<V> {
    ChangeEvent {
        value: state.committed().value.clone(),
        bubbles: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerHit;
    use alloc::vec;
    use dropdown_options::{Options, SelectOption};
    use dropdown_panel::{KeyCode, KeyEvent};

    type State = DropdownState<u8, &'static str>;

    fn state() -> State {
        let options = Options::from_vec_first(vec![
            SelectOption::new(1, "one"),
            SelectOption::new(2, "two"),
            SelectOption::placeholder("none"),
        ])
        .unwrap();
        State::new(options)
    }

    #[test]
    fn hover_and_arrows_do_not_change_while_open() {
        let old = state().open();
        let hovered = old.clone().on_mouse_over(PointerHit::option(1));
        assert!(!value_changed(&old, &hovered));
        let arrowed = old.clone().on_keydown(&KeyEvent::new(KeyCode::ArrowDown));
        assert!(!value_changed(&old, &arrowed));
    }

    #[test]
    fn commit_on_close_changes() {
        let old = state().open().on_keydown(&KeyEvent::new(KeyCode::ArrowDown));
        let new = old.clone().on_keydown(&KeyEvent::new(KeyCode::Enter));
        assert!(value_changed(&old, &new));
        assert_eq!(change_event(&new), ChangeEvent {
            value: Some(2),
            bubbles: true
        });
    }

    #[test]
    fn reselecting_same_value_does_not_change() {
        let old = state().open();
        let new = old.clone().on_click(PointerHit::option(0));
        assert!(!new.is_opened());
        assert!(!value_changed(&old, &new));
    }

    #[test]
    fn placeholder_commit_reports_none() {
        let old = state().on_focus();
        let new = old.clone().open().on_click(PointerHit::option(2));
        assert!(value_changed(&old, &new));
        let event = change_event(&new);
        assert_eq!(event.value, None);
        assert_eq!(event.name(), "change");
    }
}
