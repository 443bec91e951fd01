// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end event sequences through the dropdown handle.
//!
//! Each test drives a [`Dropdown`] the way a host would, collecting every `change` event it
//! reports.

use dropdown_widget::{
    ChangeEvent, Dropdown, DropdownEvent, KeyCode, KeyEvent, Options, PointerHit, SelectOption,
};

type Fruit = Dropdown<char, &'static str>;

fn fruit(disabled: &[char], selected: usize) -> Fruit {
    let items = [('a', "Apple"), ('b', "Banana"), ('c', "Cherry")]
        .into_iter()
        .map(|(value, label)| {
            SelectOption::new(value, label).with_disabled(disabled.contains(&value))
        })
        .collect();
    Dropdown::new(Options::from_vec(items, selected).unwrap())
}

fn key(code: KeyCode) -> DropdownEvent {
    DropdownEvent::KeyDown(KeyEvent::new(code))
}

/// Dispatch `events` in order and collect the change events.
fn run(dropdown: &mut Fruit, events: &[DropdownEvent]) -> Vec<ChangeEvent<char>> {
    events
        .iter()
        .filter_map(|event| dropdown.dispatch(event))
        .collect()
}

#[test]
fn focus_click_arrow_enter_commits_next_option() {
    let mut dropdown = fruit(&[], 0);
    let changes = run(&mut dropdown, &[
        DropdownEvent::Focus,
        DropdownEvent::Click(PointerHit::outside()),
        key(KeyCode::ArrowDown),
        key(KeyCode::Enter),
    ]);

    assert!(dropdown.state().is_focused());
    assert!(!dropdown.is_opened());
    assert_eq!(dropdown.get_value(), Some(&'b'));
    assert_eq!(changes, vec![ChangeEvent {
        value: Some('b'),
        bubbles: true
    }]);
}

#[test]
fn arrow_up_cannot_reach_disabled_first_option() {
    let mut dropdown = fruit(&['a'], 1);
    let changes = run(&mut dropdown, &[DropdownEvent::Focus, key(KeyCode::ArrowUp)]);

    assert_eq!(dropdown.get_value(), Some(&'b'));
    assert!(changes.is_empty());
}

#[test]
fn blur_commits_hovered_option() {
    let mut dropdown = fruit(&[], 0);
    let changes = run(&mut dropdown, &[
        DropdownEvent::Focus,
        DropdownEvent::Click(PointerHit::outside()),
        DropdownEvent::MouseOver(PointerHit::option(2)),
    ]);
    assert!(changes.is_empty());
    assert_eq!(dropdown.state().committed().value, Some('a'));

    let changes = run(&mut dropdown, &[DropdownEvent::Blur]);
    assert!(!dropdown.state().is_focused());
    assert_eq!(dropdown.get_value(), Some(&'c'));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].value, Some('c'));
}

#[test]
fn clicking_disabled_option_keeps_panel_open() {
    let mut dropdown = fruit(&['c'], 0);
    run(&mut dropdown, &[DropdownEvent::Click(PointerHit::outside())]);
    let before = dropdown.state().clone();

    let changes = run(&mut dropdown, &[DropdownEvent::Click(PointerHit::option(2))]);
    assert!(changes.is_empty());
    assert!(dropdown.is_opened());
    assert_eq!(dropdown.state(), &before);
}

#[test]
fn clicking_enabled_option_commits_and_closes() {
    for target in 0..3 {
        let mut dropdown = fruit(&[], 1);
        run(&mut dropdown, &[DropdownEvent::Click(PointerHit::outside())]);
        let changes = run(&mut dropdown, &[DropdownEvent::Click(PointerHit::option(target))]);

        assert!(!dropdown.is_opened());
        assert_eq!(dropdown.state().options().selected_index(), target);
        let expected = usize::from(target != 1);
        assert_eq!(changes.len(), expected, "click on {target}");
    }
}

#[test]
fn escape_discards_hover_but_keeps_arrow_commits() {
    let mut dropdown = fruit(&[], 0);
    let changes = run(&mut dropdown, &[
        DropdownEvent::Click(PointerHit::outside()),
        key(KeyCode::ArrowDown),
        DropdownEvent::MouseOver(PointerHit::option(2)),
        key(KeyCode::Escape),
    ]);

    assert_eq!(dropdown.get_value(), Some(&'b'));
    assert_eq!(changes.len(), 1);
}

#[test]
fn alt_arrow_toggles_panel() {
    let mut dropdown = fruit(&[], 0);
    let alt_down = DropdownEvent::KeyDown(
        KeyEvent::new(KeyCode::ArrowDown).with_modifiers(dropdown_widget::Modifiers::ALT),
    );
    run(&mut dropdown, &[DropdownEvent::Focus, alt_down]);
    assert!(dropdown.is_opened());
    run(&mut dropdown, &[alt_down]);
    assert!(!dropdown.is_opened());
    assert_eq!(dropdown.get_value(), Some(&'a'));
}

#[test]
fn closed_arrows_emit_each_move() {
    let mut dropdown = fruit(&[], 0);
    let changes = run(&mut dropdown, &[
        DropdownEvent::Focus,
        key(KeyCode::ArrowRight),
        key(KeyCode::ArrowDown),
        key(KeyCode::ArrowDown),
    ]);
    let values: Vec<Option<char>> = changes.into_iter().map(|c| c.value).collect();
    assert_eq!(values, vec![Some('b'), Some('c')]);
}
