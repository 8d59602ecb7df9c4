// SPDX-License-Identifier: MPL-2.0
//! End-to-end walks of the deck navigation contract through the public API.

use odyssey_showcase::ui::deck::{slides, NavMessage, State};
use std::time::Duration;

const HIDE_DELAY: Duration = Duration::from_secs(3);

#[test]
fn full_deck_walk_clamps_at_both_ends() {
    let mut deck = State::new(19, HIDE_DELAY);

    // Retreating from the first slide stays put
    deck.handle(NavMessage::Previous);
    assert_eq!(deck.index(), 0);

    // Eighteen advances reach the last slide
    for _ in 0..18 {
        deck.handle(NavMessage::Next);
    }
    assert_eq!(deck.index(), 18);
    assert!(deck.at_last());

    // A further advance is a no-op
    deck.handle(NavMessage::Next);
    assert_eq!(deck.index(), 18);

    // Home returns to the start
    deck.handle(NavMessage::First);
    assert_eq!(deck.index(), 0);
    assert!(deck.at_first());
}

#[test]
fn indicator_click_lands_directly_on_the_target() {
    let mut deck = State::new(19, HIDE_DELAY);
    deck.handle(NavMessage::Select(12));
    assert_eq!(deck.index(), 12);
    assert!(!deck.at_first());
    assert!(!deck.at_last());
}

#[test]
fn edge_affordances_disable_exactly_at_the_boundaries() {
    let mut deck = State::new(19, HIDE_DELAY);

    assert!(deck.at_first(), "prev is disabled on the first slide");
    deck.handle(NavMessage::Next);
    assert!(!deck.at_first() && !deck.at_last());

    deck.handle(NavMessage::Last);
    assert!(deck.at_last(), "next is disabled on the last slide");
}

#[test]
fn counter_and_progress_follow_the_walk() {
    let mut deck = State::new(slides::total(), HIDE_DELAY);
    assert_eq!(deck.counter(), ("01".to_string(), "19".to_string()));
    assert!((deck.progress() - 1.0 / 19.0).abs() < 1e-6);

    deck.handle(NavMessage::Last);
    assert_eq!(deck.counter(), ("19".to_string(), "19".to_string()));
    assert!((deck.progress() - 1.0).abs() < 1e-6);
}

#[test]
fn every_navigation_input_arms_the_hide_deadline() {
    for message in [
        NavMessage::Next,
        NavMessage::Previous,
        NavMessage::First,
        NavMessage::Last,
        NavMessage::Select(4),
    ] {
        let mut deck = State::new(19, HIDE_DELAY);
        assert!(!deck.hide_pending(), "a fresh deck has no hide pending");

        deck.handle(message);
        assert!(deck.nav_visible());
        assert!(deck.hide_pending(), "input re-arms the idle hide");
    }
}

#[test]
fn zero_delay_deck_hides_chrome_on_the_next_tick() {
    let mut deck = State::new(19, Duration::ZERO);
    deck.handle(NavMessage::Next);
    assert!(deck.nav_visible());

    deck.handle(NavMessage::Tick);
    assert!(!deck.nav_visible(), "idle delay elapsed, chrome hides");

    // Any new activity brings it straight back
    deck.handle(NavMessage::Previous);
    assert!(deck.nav_visible());
}

#[test]
fn controller_is_driven_by_the_real_slide_count() {
    // The shipped deck and the controller must agree on the deck size.
    let deck = State::new(slides::total(), HIDE_DELAY);
    assert_eq!(deck.total(), 19);
}
