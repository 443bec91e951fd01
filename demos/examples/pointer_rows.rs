// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction resolved through a row layout.
//!
//! The host describes the open panel as a rectangle of fixed-height rows; `RowLayout` turns
//! pointer positions into `PointerHit`s for hover and click events.
//!
//! Run:
//! - `cargo run -p dropdown_demos --example pointer_rows`

use dropdown_demos::{describe, fruit_options, init_tracing};
use dropdown_widget::adapters::rows::RowLayout;
use dropdown_widget::helpers;
use dropdown_widget::{Dropdown, DropdownEvent, PointerHit, SelectOption};
use kurbo::{Point, Rect};

fn main() {
    init_tracing();

    let mut dropdown: Dropdown<&'static str, &'static str> = Dropdown::new(fruit_options());
    let value_box = Rect::new(0.0, 0.0, 160.0, 24.0);

    // Open by clicking the value box.
    dropdown.dispatch(&DropdownEvent::Click(PointerHit::outside()));
    print!("{}", describe(dropdown.state()));

    let layout = RowLayout::new(
        Rect::new(0.0, value_box.y1, value_box.x1, value_box.y1 + 5.0 * 20.0),
        20.0,
        dropdown.state().options().len(),
    );

    for (label, y) in [("hover date", 110.0), ("hover banana", 70.0), ("hover cherry", 90.0)] {
        let hit = layout.hit(Point::new(40.0, y));
        dropdown.dispatch(&DropdownEvent::MouseOver(hit));
        println!("-- {label}: {hit:?}");
        print!("{}", describe(dropdown.state()));
    }

    // Clicking the disabled row keeps the panel open.
    let banana = layout.hit(Point::new(40.0, 70.0));
    assert!(dropdown.dispatch(&DropdownEvent::Click(banana)).is_none());

    let cherry = layout.hit(Point::new(40.0, 90.0));
    if let Some(change) = dropdown.dispatch(&DropdownEvent::Click(cherry)) {
        println!("-- click cherry: {} -> {:?}", change.name(), change.value);
    }
    print!("{}", describe(dropdown.state()));

    // List edits keep the committed value when it survives.
    let change = dropdown.update(|state| {
        helpers::add_option(state, SelectOption::new("elderberry", "Elderberry"))
    });
    println!("-- add elderberry: change = {change:?}");
    let change = dropdown.update(|state| helpers::remove_option(state, &"cherry"));
    println!("-- remove cherry: change = {change:?}");
    print!("{}", describe(dropdown.state()));
}
