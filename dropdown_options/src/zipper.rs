// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The option zipper and its movement rules.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use crate::{OptionsError, SelectOption};

/// Immutable cursor over a non-empty, ordered list of options.
///
/// `left` holds the options before the selection in list order, `value` is the selection,
/// and `right` holds the options after it, also in list order.
///
/// ## Usage
///
/// - Build with [`Options::new`], [`Options::from_parts`], or [`Options::from_vec`].
/// - Move with [`Options::maybe_select_prev`] / [`Options::maybe_select_next`] for
///   keyboard navigation, or [`Options::select_index`] to re-centre on a known index.
/// - Read the full list in order with [`Options::iter`].
///
/// Every transformation consumes the zipper and returns a new one; there is no in-place
/// mutation through the public API.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options<V, L = String> {
    left: Vec<SelectOption<V, L>>,
    value: SelectOption<V, L>,
    right: Vec<SelectOption<V, L>>,
}

/// String-valued zipper.
pub type StrOptions = Options<String, String>;

impl<V, L> Options<V, L> {
    /// Create a zipper holding a single, selected option.
    pub fn new(value: SelectOption<V, L>) -> Self {
        Self {
            left: Vec::new(),
            value,
            right: Vec::new(),
        }
    }

    /// Create a zipper from its three parts.
    ///
    /// `left` and `right` are given in list order.
    pub fn from_parts(
        left: Vec<SelectOption<V, L>>,
        value: SelectOption<V, L>,
        right: Vec<SelectOption<V, L>>,
    ) -> Self {
        Self { left, value, right }
    }

    /// Split an ordered list around `index`, which becomes the selection.
    pub fn from_vec(
        mut items: Vec<SelectOption<V, L>>,
        index: usize,
    ) -> Result<Self, OptionsError> {
        let len = items.len();
        if len == 0 {
            return Err(OptionsError::Empty);
        }
        if index >= len {
            return Err(OptionsError::IndexOutOfBounds { index, len });
        }
        let mut rest = items.split_off(index);
        let value = rest.remove(0);
        Ok(Self {
            left: items,
            value,
            right: rest,
        })
    }

    /// Split an ordered list with its first option selected.
    pub fn from_vec_first(items: Vec<SelectOption<V, L>>) -> Result<Self, OptionsError> {
        Self::from_vec(items, 0)
    }

    /// The selected option.
    pub fn value(&self) -> &SelectOption<V, L> {
        &self.value
    }

    /// Options before the selection, in list order.
    pub fn left(&self) -> &[SelectOption<V, L>] {
        &self.left
    }

    /// Options after the selection, in list order.
    pub fn right(&self) -> &[SelectOption<V, L>] {
        &self.right
    }

    /// Position of the selection in the full list.
    pub fn selected_index(&self) -> usize {
        self.left.len()
    }

    /// Number of options, including the selection.
    pub fn len(&self) -> usize {
        self.left.len() + 1 + self.right.len()
    }

    /// Always `false`: a zipper holds at least its selection.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The option at `index` in list order.
    pub fn get(&self, index: usize) -> Option<&SelectOption<V, L>> {
        let selected = self.selected_index();
        match index {
            i if i < selected => self.left.get(i),
            i if i == selected => Some(&self.value),
            i => self.right.get(i - selected - 1),
        }
    }

    /// Iterate over all options in list order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SelectOption<V, L>> + '_ {
        self.left
            .iter()
            .chain(iter::once(&self.value))
            .chain(self.right.iter())
    }

    /// Index of the first option matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&SelectOption<V, L>) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Index of the first option whose identity is `value`.
    pub fn position_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.position(|option| option.has_value(value))
    }

    /// The ordered list, consuming the zipper.
    pub fn into_vec(self) -> Vec<SelectOption<V, L>> {
        let Self {
            mut left,
            value,
            mut right,
        } = self;
        left.reserve(1 + right.len());
        left.push(value);
        left.append(&mut right);
        left
    }

    /// The ordered list.
    pub fn flatten(&self) -> Vec<SelectOption<V, L>>
    where
        V: Clone,
        L: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Append an option after the last one, keeping the selection.
    #[must_use]
    pub fn push(mut self, option: SelectOption<V, L>) -> Self {
        self.right.push(option);
        self
    }

    /// Move the selection one step towards the start of the list.
    ///
    /// The last option of `left` becomes the selection and the old selection is pushed
    /// onto the front of `right`. Fails with the unchanged zipper when `left` is empty.
    pub fn select_prev(self) -> Result<Self, Self> {
        let Self {
            mut left,
            value,
            mut right,
        } = self;
        match left.pop() {
            Some(prev) => {
                right.insert(0, value);
                Ok(Self {
                    left,
                    value: prev,
                    right,
                })
            }
            None => Err(Self { left, value, right }),
        }
    }

    /// Move the selection one step towards the end of the list.
    ///
    /// Fails with the unchanged zipper when `right` is empty.
    pub fn select_next(self) -> Result<Self, Self> {
        if self.right.is_empty() {
            return Err(self);
        }
        let Self {
            mut left,
            value,
            mut right,
        } = self;
        let next = right.remove(0);
        left.push(value);
        Ok(Self {
            left,
            value: next,
            right,
        })
    }

    /// Re-centre the zipper on `index`, regardless of its disabled flag.
    ///
    /// Fails with the unchanged zipper when `index` is out of range.
    pub fn select_index(self, index: usize) -> Result<Self, Self> {
        let current = self.selected_index();
        if index >= self.len() {
            return Err(self);
        }
        if index == current {
            return Ok(self);
        }
        let Self {
            mut left,
            value,
            mut right,
        } = self;
        if index < current {
            let mut after = left.split_off(index);
            let target = after.remove(0);
            after.push(value);
            after.append(&mut right);
            Ok(Self {
                left,
                value: target,
                right: after,
            })
        } else {
            let mut after = right.split_off(index - current - 1);
            let target = after.remove(0);
            left.push(value);
            left.append(&mut right);
            Ok(Self {
                left,
                value: target,
                right: after,
            })
        }
    }

    /// Move to the nearest enabled option before the selection.
    ///
    /// Runs of disabled options are skipped. When every option before the selection is
    /// disabled (or there is none), the zipper is returned unchanged.
    #[must_use]
    pub fn maybe_select_prev(self) -> Self {
        match self.left.iter().rposition(SelectOption::is_enabled) {
            Some(target) => match self.select_index(target) {
                Ok(options) | Err(options) => options,
            },
            None => self,
        }
    }

    /// Move to the nearest enabled option after the selection.
    ///
    /// Runs of disabled options are skipped. When every option after the selection is
    /// disabled (or there is none), the zipper is returned unchanged.
    #[must_use]
    pub fn maybe_select_next(self) -> Self {
        match self.right.iter().position(SelectOption::is_enabled) {
            Some(offset) => {
                let target = self.selected_index() + 1 + offset;
                match self.select_index(target) {
                    Ok(options) | Err(options) => options,
                }
            }
            None => self,
        }
    }

    /// Select the first option of the list, enabled or not.
    #[must_use]
    pub fn select_first(self) -> Self {
        match self.select_index(0) {
            Ok(options) | Err(options) => options,
        }
    }
}

impl<'a, V, L> IntoIterator for &'a Options<V, L> {
    type Item = &'a SelectOption<V, L>;
    type IntoIter = iter::Chain<
        iter::Chain<core::slice::Iter<'a, SelectOption<V, L>>, iter::Once<&'a SelectOption<V, L>>>,
        core::slice::Iter<'a, SelectOption<V, L>>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.left
            .iter()
            .chain(iter::once(&self.value))
            .chain(self.right.iter())
    }
}
