// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The top-level dropdown state machine.

use alloc::string::String;

use dropdown_options::{Options, SelectOption};
use dropdown_panel::{KeyCode, KeyEvent, PanelState};

use crate::event::{DropdownEvent, PointerHit};

/// State of a dropdown.
///
/// Focus and the open panel are nested: a dropdown can only be open while it is focused,
/// and the panel state is only reachable through [`DropdownState::Opened`].
///
/// The top-level `options` always hold the committed selection. While open, the panel keeps
/// its own copy that arrow keys commit into; it is merged back when the panel closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropdownState<V, L = String> {
    /// Not focused.
    Inactive {
        /// Committed options.
        options: Options<V, L>,
    },
    /// Focused with the panel closed.
    Focused {
        /// Committed options.
        options: Options<V, L>,
    },
    /// Focused with the panel open.
    Opened {
        /// Options committed before the panel opened.
        options: Options<V, L>,
        /// The open panel.
        panel: PanelState<V, L>,
    },
}

impl<V, L> DropdownState<V, L> {
    /// Create an unfocused dropdown.
    pub fn new(options: Options<V, L>) -> Self {
        Self::Inactive { options }
    }

    /// Top-level options.
    pub fn options(&self) -> &Options<V, L> {
        match self {
            Self::Inactive { options }
            | Self::Focused { options }
            | Self::Opened { options, .. } => options,
        }
    }

    /// The open panel, if any.
    pub fn panel(&self) -> Option<&PanelState<V, L>> {
        match self {
            Self::Opened { panel, .. } => Some(panel),
            _ => None,
        }
    }

    /// Whether the dropdown has focus.
    pub fn is_focused(&self) -> bool {
        !matches!(self, Self::Inactive { .. })
    }

    /// Whether the options panel is open.
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened { .. })
    }

    /// The option committed at the top level.
    ///
    /// Change detection compares this between snapshots.
    pub fn committed(&self) -> &SelectOption<V, L> {
        self.options().value()
    }

    /// The selected option: the panel highlight while open, otherwise the committed option.
    pub fn get_selected(&self) -> &SelectOption<V, L> {
        match self {
            Self::Opened { panel, .. } => match panel.selection() {
                Some(selection) => selection.value(),
                None => panel.value(),
            },
            _ => self.committed(),
        }
    }

    /// Identity of [`get_selected`](Self::get_selected).
    pub fn get_value(&self) -> Option<&V> {
        self.get_selected().value.as_ref()
    }

    /// The option shown in the value box.
    ///
    /// While open this follows the panel's commits, so arrow keys update the box live.
    pub fn displayed(&self) -> &SelectOption<V, L> {
        match self {
            Self::Opened { panel, .. } => panel.value(),
            _ => self.committed(),
        }
    }

    /// Top-level options, consuming the state.
    pub fn into_options(self) -> Options<V, L> {
        match self {
            Self::Inactive { options }
            | Self::Focused { options }
            | Self::Opened { options, .. } => options,
        }
    }

    /// Close the panel, keeping the panel's committed options and discarding its highlight.
    ///
    /// Unchanged unless open.
    #[must_use]
    pub fn close(self) -> Self {
        match self {
            Self::Opened { panel, .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "dropdown.close");
                Self::Focused {
                    options: panel.into_options(),
                }
            }
            state => state,
        }
    }

    /// Fold a panel that closed itself back into the top level.
    #[must_use]
    pub fn maybe_close(self) -> Self {
        match self {
            Self::Opened { panel, .. } if !panel.is_opened() => Self::Focused {
                options: panel.into_options(),
            },
            state => state,
        }
    }

    /// Replace the options.
    ///
    /// Equal options return the state unchanged. Otherwise an open panel is closed first, as
    /// its highlight ranges over the old list; focus is kept.
    #[must_use]
    pub fn set_options(self, options: Options<V, L>) -> Self
    where
        V: PartialEq,
        L: PartialEq,
    {
        if *self.options() == options {
            return self;
        }
        self.close().with_options(options)
    }

    /// Replace the top-level options, keeping the focus state.
    fn with_options(self, options: Options<V, L>) -> Self {
        match self {
            Self::Inactive { .. } => Self::Inactive { options },
            Self::Focused { .. } => Self::Focused { options },
            Self::Opened { panel, .. } => Self::Opened { options, panel },
        }
    }

    /// Close the panel, then transform the top-level options with `f`.
    #[must_use]
    pub(crate) fn map_options(self, f: impl FnOnce(Options<V, L>) -> Options<V, L>) -> Self {
        match self.close() {
            Self::Inactive { options } => Self::Inactive {
                options: f(options),
            },
            Self::Focused { options } => Self::Focused {
                options: f(options),
            },
            opened => opened,
        }
    }

    /// Delegate to the open panel, folding it back if it closed.
    fn map_panel(self, f: impl FnOnce(PanelState<V, L>) -> PanelState<V, L>) -> Self {
        match self {
            Self::Opened { options, panel } => Self::Opened {
                options,
                panel: f(panel),
            }
            .maybe_close(),
            state => state,
        }
    }

    /// Handle a `focus` event.
    #[must_use]
    pub fn on_focus(self) -> Self {
        match self {
            Self::Inactive { options } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "dropdown.focus");
                Self::Focused { options }
            }
            state => state,
        }
    }

    /// Handle a `mouseover` event.
    ///
    /// Only hovers inside the open panel are forwarded.
    #[must_use]
    pub fn on_mouse_over(self, hit: PointerHit) -> Self {
        if !hit.in_panel {
            return self;
        }
        self.map_panel(|panel| panel.mouse_moved(hit.option))
    }
}

impl<V: Clone, L: Clone> DropdownState<V, L> {
    /// Open the panel, focusing first if needed.
    ///
    /// The panel's highlight starts at the committed option. Unchanged when already open.
    #[must_use]
    pub fn open(self) -> Self {
        match self {
            Self::Inactive { options } | Self::Focused { options } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "dropdown.open",
                    selected = options.selected_index()
                );
                Self::Opened {
                    panel: PanelState::opened(options.clone()),
                    options,
                }
            }
            opened => opened,
        }
    }

    /// Handle a `blur` event.
    ///
    /// An open panel commits its highlight before focus is dropped.
    #[must_use]
    pub fn on_blur(self) -> Self {
        let options = match self {
            Self::Inactive { .. } => return self,
            Self::Focused { options } => options,
            Self::Opened { panel, .. } => panel.apply_selection().into_options(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "dropdown.blur", committed = options.selected_index());
        Self::Inactive { options }
    }

    /// Handle a `click` event.
    ///
    /// A closed dropdown opens (and focuses). An open one forwards the click to its panel.
    #[must_use]
    pub fn on_click(self, hit: PointerHit) -> Self {
        if self.is_opened() {
            self.map_panel(|panel| panel.clicked(hit.option))
        } else {
            self.open()
        }
    }

    /// Handle a `keydown` event.
    #[must_use]
    pub fn on_keydown(self, key: &KeyEvent) -> Self {
        match self {
            Self::Inactive { .. } => self,
            Self::Focused { .. } => self.focused_keydown(key),
            Self::Opened { .. } => self.map_panel(|panel| panel.keydown(key)),
        }
    }

    /// Keys of a focused dropdown whose panel is closed.
    fn focused_keydown(self, key: &KeyEvent) -> Self {
        if key.ctrl() {
            return self;
        }
        if key.alt() {
            return if key.is_alt_vertical_arrow() {
                self.open()
            } else {
                self
            };
        }
        match key.code {
            KeyCode::Enter | KeyCode::Space => self.open(),
            KeyCode::ArrowDown | KeyCode::ArrowRight => {
                self.map_options(Options::maybe_select_next)
            }
            KeyCode::ArrowUp | KeyCode::ArrowLeft => self.map_options(Options::maybe_select_prev),
            _ => self,
        }
    }

    /// Dispatch an event to its handler.
    #[must_use]
    pub fn handle(self, event: &DropdownEvent) -> Self {
        match event {
            DropdownEvent::Focus => self.on_focus(),
            DropdownEvent::Blur => self.on_blur(),
            DropdownEvent::Click(hit) => self.on_click(*hit),
            DropdownEvent::MouseOver(hit) => self.on_mouse_over(*hit),
            DropdownEvent::KeyDown(key) => self.on_keydown(key),
        }
    }
}
