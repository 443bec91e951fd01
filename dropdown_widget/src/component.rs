// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stateful dropdown handle for hosts that own one widget instance.
//!
//! [`Dropdown`] keeps the current [`DropdownState`], runs each event through
//! [`DropdownState::handle`], and reports a [`ChangeEvent`] whenever a transition commits a
//! new value. Rendering and DOM wiring stay with the host.

use alloc::string::String;

use dropdown_options::{Options, SelectOption};

use crate::form::{self, FormValue, Validity};
use crate::value::{change_event, value_changed};
use crate::{ChangeEvent, DropdownEvent, DropdownState};

/// Construction arguments for [`make`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownArgs<V, L = String> {
    /// Initial options; the dropdown starts unfocused.
    pub options: Options<V, L>,
    /// Element id.
    pub id: Option<String>,
    /// Extra class name for the root element.
    pub class_name: Option<String>,
    /// Whether an empty value fails form validation.
    pub required: bool,
}

impl<V, L> DropdownArgs<V, L> {
    /// Arguments with only options set.
    pub fn new(options: Options<V, L>) -> Self {
        Self {
            options,
            id: None,
            class_name: None,
            required: false,
        }
    }

    /// Set the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the extra class name.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set whether the dropdown is required.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Create a dropdown from `args`.
pub fn make<V, L>(args: DropdownArgs<V, L>) -> Dropdown<V, L> {
    let DropdownArgs {
        options,
        id,
        class_name,
        required,
    } = args;
    Dropdown {
        state: DropdownState::new(options),
        id,
        class_name,
        required,
    }
}

/// A dropdown instance.
#[derive(Clone, Debug)]
pub struct Dropdown<V, L = String> {
    state: DropdownState<V, L>,
    id: Option<String>,
    class_name: Option<String>,
    required: bool,
}

impl<V, L> Dropdown<V, L> {
    /// Create an unfocused, optional dropdown without id or class name.
    pub fn new(options: Options<V, L>) -> Self {
        make(DropdownArgs::new(options))
    }

    /// Current state snapshot.
    pub fn state(&self) -> &DropdownState<V, L> {
        &self.state
    }

    /// Element id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Extra class name for the root element.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Whether an empty value fails form validation.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the options panel is open.
    pub fn is_opened(&self) -> bool {
        self.state.is_opened()
    }

    /// See [`DropdownState::get_value`].
    pub fn get_value(&self) -> Option<&V> {
        self.state.get_value()
    }

    /// See [`DropdownState::get_selected`].
    pub fn get_selected(&self) -> &SelectOption<V, L> {
        self.state.get_selected()
    }

    /// The string this dropdown submits with a form.
    pub fn form_value(&self) -> String
    where
        V: FormValue,
    {
        form::form_value(&self.state)
    }

    /// Constraint-validation state.
    pub fn validity(&self) -> Validity
    where
        V: FormValue,
    {
        form::validity(&self.state, self.required)
    }
}

impl<V, L> Dropdown<V, L>
where
    V: Clone + PartialEq,
    L: Clone,
{
    /// Replace the state with `f(state)`, returning the `change` event the commit produced.
    pub fn update(
        &mut self,
        f: impl FnOnce(DropdownState<V, L>) -> DropdownState<V, L>,
    ) -> Option<ChangeEvent<V>> {
        let next = f(self.state.clone());
        let changed = value_changed(&self.state, &next);
        self.state = next;
        if !changed {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "dropdown.change",
            index = self.state.options().selected_index()
        );
        Some(change_event(&self.state))
    }

    /// Handle an input event.
    pub fn dispatch(&mut self, event: &DropdownEvent) -> Option<ChangeEvent<V>> {
        self.update(|state| state.handle(event))
    }

    /// Close the options panel; see [`DropdownState::close`].
    pub fn close(&mut self) -> Option<ChangeEvent<V>> {
        self.update(DropdownState::close)
    }

    /// Replace the options; see [`DropdownState::set_options`].
    pub fn set_options(&mut self, options: Options<V, L>) -> Option<ChangeEvent<V>>
    where
        L: PartialEq,
    {
        self.update(|state| state.set_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointerHit, helpers};
    use alloc::vec;
    use dropdown_panel::{KeyCode, KeyEvent};

    fn dropdown() -> Dropdown<u8, &'static str> {
        let options = Options::from_vec_first(vec![
            SelectOption::placeholder("Pick"),
            SelectOption::new(1, "One"),
            SelectOption::new(2, "Two"),
        ])
        .unwrap();
        make(
            DropdownArgs::new(options)
                .with_id("size")
                .with_class_name("compact")
                .with_required(true),
        )
    }

    #[test]
    fn args_are_kept() {
        let dropdown = dropdown();
        assert_eq!(dropdown.id(), Some("size"));
        assert_eq!(dropdown.class_name(), Some("compact"));
        assert!(dropdown.is_required());
        assert!(!dropdown.state().is_focused());
        assert!(!Dropdown::new(Options::new(SelectOption::<u8, &str>::new(1, ""))).is_required());
    }

    #[test]
    fn dispatch_reports_commit_once() {
        let mut dropdown = dropdown();
        assert_eq!(dropdown.dispatch(&DropdownEvent::Focus), None);
        assert_eq!(dropdown.dispatch(&DropdownEvent::Click(PointerHit::outside())), None);
        assert!(dropdown.is_opened());
        assert_eq!(
            dropdown.dispatch(&DropdownEvent::MouseOver(PointerHit::option(2))),
            None
        );
        assert_eq!(dropdown.get_value(), Some(&2));
        let change = dropdown.dispatch(&DropdownEvent::KeyDown(KeyEvent::new(KeyCode::Enter)));
        assert_eq!(change, Some(ChangeEvent {
            value: Some(2),
            bubbles: true
        }));
        assert_eq!(dropdown.dispatch(&DropdownEvent::Blur), None);
    }

    #[test]
    fn validity_follows_commit() {
        let mut dropdown = dropdown();
        assert_eq!(dropdown.validity().message(), "This field is required");
        assert_eq!(dropdown.form_value(), "");

        dropdown.dispatch(&DropdownEvent::Focus);
        dropdown.dispatch(&DropdownEvent::KeyDown(KeyEvent::new(KeyCode::ArrowDown)));
        assert_eq!(dropdown.form_value(), "1");
        assert!(dropdown.validity().is_valid());
    }

    #[test]
    fn programmatic_close_commits_arrowed_value() {
        let mut dropdown = dropdown();
        dropdown.dispatch(&DropdownEvent::Click(PointerHit::outside()));
        dropdown.dispatch(&DropdownEvent::KeyDown(KeyEvent::new(KeyCode::ArrowDown)));
        assert_eq!(dropdown.get_selected().label, "One");
        let change = dropdown.close();
        assert_eq!(change.map(|c| c.value), Some(Some(1)));
        assert!(!dropdown.is_opened());
    }

    #[test]
    fn set_options_and_helpers_emit_changes() {
        let mut dropdown = dropdown();
        let same = dropdown.state().options().clone();
        assert_eq!(dropdown.set_options(same), None);

        let moved = dropdown.state().options().clone().select_index(2).unwrap();
        assert_eq!(dropdown.set_options(moved).map(|c| c.value), Some(Some(2)));

        let change = dropdown.update(|state| helpers::remove_option(state, &2));
        assert_eq!(change.map(|c| c.value), Some(None));
    }
}
