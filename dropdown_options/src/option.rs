// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single dropdown entry.

use alloc::string::String;

/// A single selectable entry of a dropdown.
///
/// Entries are plain values: the zipper owns them and never hands out mutable access, so an
/// option is effectively immutable once it has been placed in an [`Options`](crate::Options).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectOption<V, L = String> {
    /// Identity of the option.
    ///
    /// `None` models a placeholder entry (for example "Choose one…") that carries no value.
    /// Options are re-located by comparing this field.
    pub value: Option<V>,
    /// What the renderer shows for this option: plain text or a pre-built visual fragment.
    pub label: L,
    /// Disabled options are visible but can never become the selection through navigation,
    /// hover, or clicks.
    pub disabled: bool,
    /// Optional extra class name for renderers.
    pub class: Option<String>,
}

impl<V, L> SelectOption<V, L> {
    /// Create an enabled option with a value and a label.
    pub fn new(value: V, label: impl Into<L>) -> Self {
        Self {
            value: Some(value),
            label: label.into(),
            disabled: false,
            class: None,
        }
    }

    /// Create an enabled option without a value.
    pub fn placeholder(label: impl Into<L>) -> Self {
        Self {
            value: None,
            label: label.into(),
            disabled: false,
            class: None,
        }
    }

    /// Return this option with its disabled flag set to `disabled`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Return this option with an extra class name.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Whether navigation may land on this option.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Whether this option carries `value` as its identity.
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.value.as_ref() == Some(value)
    }
}

/// String-valued option, the most common flavor in forms.
pub type StrOption = SelectOption<String, String>;

impl From<&str> for StrOption {
    /// An option whose value and label are the same text.
    fn from(text: &str) -> Self {
        Self::new(String::from(text), text)
    }
}
