// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-level edits of a dropdown's options.
//!
//! Every helper that edits the list closes an open panel first, discarding its uncommitted
//! highlight, and keeps the focus state. Helpers that look an option up by value
//! ([`update_option`], [`remove_option`], [`change_option`]) return the state untouched, panel
//! included, when no option carries that value. Edits work on the ordered list; afterwards the
//! selection is re-located by value, falling back to the first option when the selected one is
//! gone.

use alloc::vec::Vec;

use dropdown_options::{Options, SelectOption};

use crate::DropdownState;

/// Rebuild the options from `f` applied to the ordered list.
///
/// An empty result leaves the options as they were.
#[must_use]
pub fn update_options<V, L>(
    state: DropdownState<V, L>,
    f: impl FnOnce(Vec<SelectOption<V, L>>) -> Vec<SelectOption<V, L>>,
) -> DropdownState<V, L>
where
    V: Clone + PartialEq,
    L: Clone,
{
    state.map_options(|options| {
        let items = f(options.flatten());
        let index = items
            .iter()
            .position(|option| option.value == options.value().value)
            .unwrap_or(0);
        Options::from_vec(items, index).unwrap_or(options)
    })
}

/// Apply `f` to the ordered list and the index of the option whose value is `value`.
///
/// Unchanged, and left open, when no option carries `value`.
#[must_use]
pub fn update_option<V, L>(
    state: DropdownState<V, L>,
    value: &V,
    f: impl FnOnce(Vec<SelectOption<V, L>>, usize) -> Vec<SelectOption<V, L>>,
) -> DropdownState<V, L>
where
    V: Clone + PartialEq,
    L: Clone,
{
    match state.options().position_of_value(value) {
        Some(index) => update_options(state, |items| f(items, index)),
        None => state,
    }
}

/// Append `option` after the last option.
#[must_use]
pub fn add_option<V, L>(
    state: DropdownState<V, L>,
    option: SelectOption<V, L>,
) -> DropdownState<V, L> {
    state.map_options(|options| options.push(option))
}

/// Remove the option whose value is `value`.
///
/// The last remaining option cannot be removed.
#[must_use]
pub fn remove_option<V, L>(state: DropdownState<V, L>, value: &V) -> DropdownState<V, L>
where
    V: Clone + PartialEq,
    L: Clone,
{
    update_option(state, value, |mut items, index| {
        items.remove(index);
        items
    })
}

/// Replace the option whose value is `value` with `new_option`, in place.
#[must_use]
pub fn change_option<V, L>(
    state: DropdownState<V, L>,
    value: &V,
    new_option: SelectOption<V, L>,
) -> DropdownState<V, L>
where
    V: Clone + PartialEq,
    L: Clone,
{
    update_option(state, value, |mut items, index| {
        if let Some(slot) = items.get_mut(index) {
            *slot = new_option;
        }
        items
    })
}

/// Commit the first option, enabled or not.
#[must_use]
pub fn select_first<V, L>(state: DropdownState<V, L>) -> DropdownState<V, L> {
    state.map_options(Options::select_first)
}
