// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-only interaction with a dropdown.
//!
//! Focuses the dropdown, steps through the options while closed, opens the panel, moves the
//! highlight past a disabled option, and commits with Enter. Each step prints the rendered
//! state and any `change` event.
//!
//! Run:
//! - `cargo run -p dropdown_demos --example keyboard_walkthrough`

use dropdown_demos::{describe, fruit_options, init_tracing};
use dropdown_widget::{
    Dropdown, DropdownArgs, DropdownEvent, KeyCode, KeyEvent, Modifiers, make,
};

fn main() {
    init_tracing();

    let mut dropdown: Dropdown<&'static str, &'static str> = make(
        DropdownArgs::new(fruit_options())
            .with_id("fruit")
            .with_required(true),
    );
    println!(
        "#{} required={} validity={:?}",
        dropdown.id().unwrap_or_default(),
        dropdown.is_required(),
        dropdown.validity()
    );

    let script = [
        ("focus", DropdownEvent::Focus),
        ("arrow down", KeyEvent::new(KeyCode::ArrowDown).into()),
        ("arrow down (skips banana)", KeyEvent::new(KeyCode::ArrowDown).into()),
        (
            "alt+arrow down",
            KeyEvent::new(KeyCode::ArrowDown)
                .with_modifiers(Modifiers::ALT)
                .into(),
        ),
        ("arrow down", KeyEvent::new(KeyCode::ArrowDown).into()),
        ("enter", KeyEvent::new(KeyCode::Enter).into()),
        ("blur", DropdownEvent::Blur),
    ];

    for (label, event) in script {
        let change = dropdown.dispatch(&event);
        println!("-- {label}");
        print!("{}", describe(dropdown.state()));
        if let Some(change) = change {
            println!("   {} -> {:?}", change.name(), change.value);
        }
    }

    println!(
        "form value = {:?}, validity = {:?}",
        dropdown.form_value(),
        dropdown.validity()
    );
}
