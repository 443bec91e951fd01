// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown Panel: the state machine of an open options list.
//!
//! While a dropdown is open, pointer hover and arrow keys move a *highlight* through the
//! options before anything is committed. This crate models that as a two-state machine:
//!
//! - **Closed**: only the committed [`Options`] zipper exists.
//! - **Opened**: a second zipper, the `selection`, tracks the highlight. It ranges over
//!   exactly the same options as the committed zipper.
//!
//! Transitions are pure: each method consumes a [`PanelState`] and returns the next one.
//! Input that does not apply to the current state (a click while closed, a hover over a
//! disabled option, an unknown key) returns the state unchanged.
//!
//! ## Pointer input
//!
//! The panel does not perform hit testing. Hosts resolve the pointer target to an option
//! index (for example via a DOM ancestor lookup or a row layout) and pass
//! `Some(index)`, or `None` when the pointer is not over an option.
//!
//! ## Keyboard input
//!
//! | key | effect |
//! |---|---|
//! | Alt+ArrowDown / Alt+ArrowUp | close without committing |
//! | Escape | close without committing |
//! | Enter | commit the highlight, then close |
//! | ArrowDown / ArrowUp | highlight and commit the next / previous enabled option |
//!
//! ## Minimal example
//!
//! ```rust
//! use dropdown_options::{Options, SelectOption};
//! use dropdown_panel::{KeyCode, KeyEvent, PanelState};
//!
//! let options: Options<char> = Options::from_vec_first(vec![
//!     SelectOption::new('a', "A"),
//!     SelectOption::new('b', "B"),
//! ])
//! .unwrap();
//!
//! let panel = PanelState::opened(options);
//! let panel = panel.mouse_moved(Some(1));
//! assert_eq!(panel.selected_index(), Some(1));
//! // Hovering does not commit.
//! assert_eq!(panel.value().value, Some('a'));
//!
//! let panel = panel.keydown(&KeyEvent::new(KeyCode::Enter));
//! assert!(!panel.is_opened());
//! assert_eq!(panel.value().value, Some('b'));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` debug events on open, close, and commit.
//! - `std`: forward `std` support to dependencies that have it.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod keys;

use alloc::string::String;

use dropdown_options::{Options, SelectOption};

pub use keys::{KeyCode, KeyEvent, Modifiers};

/// State of the options panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelState<V, L = String> {
    /// The panel is closed; only committed options exist.
    Closed {
        /// Committed options.
        options: Options<V, L>,
    },
    /// The panel is open and tracks a transient highlight.
    Opened {
        /// Committed options.
        options: Options<V, L>,
        /// Highlighted option, over the same list as `options`.
        selection: Options<V, L>,
    },
}

/// One row of an open panel, for renderers.
#[derive(Debug)]
pub struct PanelRow<'a, V, L = String> {
    /// Position of the row in the list.
    pub index: usize,
    /// The option shown in this row.
    pub option: &'a SelectOption<V, L>,
    /// Whether this row carries the highlight.
    pub selected: bool,
}

impl<V, L> Clone for PanelRow<'_, V, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, L> Copy for PanelRow<'_, V, L> {}

impl<V, L> PanelState<V, L> {
    /// Create a closed panel.
    pub fn closed(options: Options<V, L>) -> Self {
        Self::Closed { options }
    }

    /// Whether the panel tracks a highlight.
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened { .. })
    }

    /// Committed options.
    pub fn options(&self) -> &Options<V, L> {
        match self {
            Self::Closed { options } | Self::Opened { options, .. } => options,
        }
    }

    /// The highlight, when open.
    pub fn selection(&self) -> Option<&Options<V, L>> {
        match self {
            Self::Closed { .. } => None,
            Self::Opened { selection, .. } => Some(selection),
        }
    }

    /// Committed option.
    pub fn value(&self) -> &SelectOption<V, L> {
        self.options().value()
    }

    /// Index of the highlighted option, when open.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection().map(Options::selected_index)
    }

    /// Committed options, consuming the panel.
    pub fn into_options(self) -> Options<V, L> {
        match self {
            Self::Closed { options } | Self::Opened { options, .. } => options,
        }
    }

    /// Rows to draw, in list order; empty when closed.
    pub fn rows(&self) -> impl Iterator<Item = PanelRow<'_, V, L>> + '_ {
        self.selection().into_iter().flat_map(|selection| {
            let highlighted = selection.selected_index();
            selection
                .iter()
                .enumerate()
                .map(move |(index, option)| PanelRow {
                    index,
                    option,
                    selected: index == highlighted,
                })
        })
    }

    /// Close the panel and drop the highlight, leaving the committed options untouched.
    #[must_use]
    pub fn close(self) -> Self {
        match self {
            Self::Opened { options, .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "panel.close",
                    committed = options.selected_index()
                );
                Self::Closed { options }
            }
            closed => closed,
        }
    }

    /// Replace the highlight, opening the panel if needed.
    #[must_use]
    pub fn set_selection(self, selection: Options<V, L>) -> Self {
        Self::Opened {
            options: self.into_options(),
            selection,
        }
    }

    /// Index an open panel would hover to, if the hover changes anything.
    fn hover_target(&self, hit: Option<usize>) -> Option<usize> {
        let selection = self.selection()?;
        let index = hit?;
        let option = selection.get(index)?;
        (index != selection.selected_index() && option.is_enabled()).then_some(index)
    }

    /// Index an open panel would commit on click, if the target is selectable.
    fn click_target(&self, hit: Option<usize>) -> Option<usize> {
        let selection = self.selection()?;
        let index = hit?;
        selection.get(index)?.is_enabled().then_some(index)
    }

    /// Move the highlight of an open panel with `step`.
    fn map_selection(self, step: impl FnOnce(Options<V, L>) -> Options<V, L>) -> Self {
        match self {
            Self::Opened { options, selection } => Self::Opened {
                options,
                selection: step(selection),
            },
            closed => closed,
        }
    }

    /// Re-centre the highlight on `index`.
    fn highlight(self, index: usize) -> Self {
        self.map_selection(|selection| match selection.select_index(index) {
            Ok(selection) | Err(selection) => selection,
        })
    }

    /// Hover over the option at `hit`.
    ///
    /// Moves the highlight without committing. Ignored while closed, when `hit` is `None`
    /// or out of range, when it names a disabled option, or when it names the option
    /// that is already highlighted.
    #[must_use]
    pub fn mouse_moved(self, hit: Option<usize>) -> Self {
        match self.hover_target(hit) {
            Some(index) => self.highlight(index),
            None => self,
        }
    }
}

impl<V: Clone, L: Clone> PanelState<V, L> {
    /// Create an open panel whose highlight starts at the committed option.
    pub fn opened(options: Options<V, L>) -> Self {
        Self::closed(options).open()
    }

    /// Open the panel; the highlight starts at the committed option.
    #[must_use]
    pub fn open(self) -> Self {
        match self {
            Self::Closed { options } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "panel.open", selected = options.selected_index());
                Self::Opened {
                    selection: options.clone(),
                    options,
                }
            }
            opened => opened,
        }
    }

    /// Commit the highlight without closing.
    #[must_use]
    pub fn apply_selection(self) -> Self {
        match self {
            Self::Opened { selection, .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "panel.commit",
                    committed = selection.selected_index()
                );
                Self::Opened {
                    options: selection.clone(),
                    selection,
                }
            }
            closed => closed,
        }
    }

    /// Click on the option at `hit`.
    ///
    /// A click on an enabled option highlights it, commits it, and closes the panel.
    /// Clicks while closed, outside any option, or on a disabled option are ignored and
    /// leave the panel open.
    #[must_use]
    pub fn clicked(self, hit: Option<usize>) -> Self {
        match self.click_target(hit) {
            Some(index) => self.highlight(index).apply_selection().close(),
            None => self,
        }
    }

    /// Handle a key press.
    #[must_use]
    pub fn keydown(self, key: &KeyEvent) -> Self {
        if !self.is_opened() {
            return self;
        }
        if key.alt() {
            return if key.is_alt_vertical_arrow() {
                self.close()
            } else {
                self
            };
        }
        match key.code {
            KeyCode::Escape => self.close(),
            KeyCode::Enter => self.apply_selection().close(),
            KeyCode::ArrowDown => self
                .map_selection(Options::maybe_select_next)
                .apply_selection(),
            KeyCode::ArrowUp => self
                .map_selection(Options::maybe_select_prev)
                .apply_selection(),
            _ => self,
        }
    }
}
