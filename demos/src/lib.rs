// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the dropdown demos.
//!
//! Run:
//! - `cargo run -p dropdown_demos --example keyboard_walkthrough`
//! - `cargo run -p dropdown_demos --example pointer_rows`

use std::fmt::Write as _;

use dropdown_widget::{DropdownState, Options, SelectOption};
use tracing::Level;

/// Dropdown state used by the demos: string values, string labels.
pub type FruitState = DropdownState<&'static str, &'static str>;

/// A short fruit list with a placeholder first and one disabled entry.
pub fn fruit_options() -> Options<&'static str, &'static str> {
    Options::new(SelectOption::placeholder("Choose a fruit"))
        .push(SelectOption::new("apple", "Apple"))
        .push(SelectOption::new("banana", "Banana").with_disabled(true))
        .push(SelectOption::new("cherry", "Cherry").with_class("seasonal"))
        .push(SelectOption::new("date", "Date"))
}

/// Install a `fmt` subscriber printing the dropdown's debug events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .try_init();
}

/// Plain-text rendering of `state`: the value box, then the open panel's rows.
pub fn describe(state: &FruitState) -> String {
    let mut out = String::new();
    let focus = if state.is_focused() { '*' } else { ' ' };
    let _ = writeln!(out, "[{focus}] {} v", state.displayed().label);
    if let Some(panel) = state.panel() {
        for row in panel.rows() {
            let marker = if row.selected { '>' } else { ' ' };
            let disabled = if row.option.disabled { " (disabled)" } else { "" };
            let class = row
                .option
                .class
                .as_deref()
                .map(|class| format!(" .{class}"))
                .unwrap_or_default();
            let _ = writeln!(out, "  {marker} {}{disabled}{class}", row.option.label);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropdown_widget::PointerHit;

    #[test]
    fn describe_shows_open_rows() {
        let state = FruitState::new(fruit_options())
            .on_click(PointerHit::outside())
            .on_mouse_over(PointerHit::option(3));
        let text = describe(&state);
        assert!(text.starts_with("[*] Choose a fruit v"), "{text}");
        assert!(text.contains("> Cherry .seasonal"), "{text}");
        assert!(text.contains("Banana (disabled)"), "{text}");
        assert_eq!(text.lines().count(), 6);
    }
}
