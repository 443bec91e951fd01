// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown Widget: a headless, `no_std` dropdown/select state machine.
//!
//! ## Overview
//!
//! This crate computes the next state of a dropdown from an input event. It does not render,
//! hit test, or touch a DOM. Hosts feed it [`DropdownEvent`]s and draw whatever
//! [`DropdownState`] comes back.
//!
//! A dropdown is in one of three states:
//!
//! - **Inactive**: not focused.
//! - **Focused**: focused, panel closed. Arrow keys move the committed selection directly.
//! - **Opened**: focused, panel open. Input goes to a [`PanelState`] that tracks a transient
//!   highlight; the panel's commits are folded back into the dropdown when it closes.
//!
//! Being open without focus is unrepresentable.
//!
//! ## Events
//!
//! - `Focus` / `Blur`: blur while open commits the highlighted option.
//! - `Click`: opens a closed dropdown; on an open one, a click on an enabled option commits
//!   it and closes.
//! - `MouseOver`: moves the highlight when over the open panel.
//! - `KeyDown`: Enter, Space, and Alt+ArrowDown open; arrows move the selection; Escape
//!   cancels; Enter commits.
//!
//! Pointer events carry a [`PointerHit`] that the host resolves. With the `kurbo_adapter`
//! feature, `adapters::rows::RowLayout` resolves points against a panel of fixed-height
//! rows.
//!
//! ## Change events
//!
//! [`value_changed`] decides whether a transition commits a new value, and [`change_event`]
//! builds the `change` event. [`Dropdown`] wraps both around a state it owns.
//!
//! ## Minimal example
//!
//! ```rust
//! use dropdown_widget::{
//!     Dropdown, DropdownEvent, KeyCode, KeyEvent, Options, PointerHit, SelectOption,
//! };
//!
//! let options: Options<&str> = Options::from_vec_first(vec![
//!     SelectOption::new("a", "Apple"),
//!     SelectOption::new("b", "Banana"),
//!     SelectOption::new("c", "Cherry"),
//! ])
//! .unwrap();
//! let mut dropdown = Dropdown::new(options);
//!
//! assert_eq!(dropdown.dispatch(&DropdownEvent::Focus), None);
//! assert_eq!(dropdown.dispatch(&DropdownEvent::Click(PointerHit::outside())), None);
//! assert_eq!(dropdown.dispatch(&KeyEvent::new(KeyCode::ArrowDown).into()), None);
//!
//! let change = dropdown.dispatch(&KeyEvent::new(KeyCode::Enter).into()).unwrap();
//! assert_eq!(change.value, Some("b"));
//! assert!(!dropdown.is_opened());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` debug events at transitions and change emission.
//! - `serde`: submit arbitrary `Serialize` values as JSON through `Json<T>`.
//! - `kurbo_adapter`: the `adapters::rows` pointer resolver.
//! - `std` / `libm`: forward to dependencies that have them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod component;
mod event;
mod form;
pub mod helpers;
mod state;
mod value;

pub use component::{Dropdown, DropdownArgs, make};
pub use event::{DropdownEvent, PointerHit};
#[cfg(feature = "serde")]
pub use form::Json;
pub use form::{FormValue, VALUE_MISSING_MESSAGE, Validity, form_value, validity};
pub use state::DropdownState;
pub use value::{ChangeEvent, change_event, value_changed};

pub use dropdown_options::{Options, OptionsError, SelectOption, StrOption, StrOptions};
pub use dropdown_panel::{KeyCode, KeyEvent, Modifiers, PanelRow, PanelState};

/// String-valued dropdown state.
pub type StrDropdownState = DropdownState<alloc::string::String, alloc::string::String>;
