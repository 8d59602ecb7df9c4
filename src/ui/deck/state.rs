// SPDX-License-Identifier: MPL-2.0
//! Slide navigation state for the requirements deck.
//!
//! Owns the current slide index and the auto-hiding navigation chrome. The
//! deck is a fixed, immutable sequence: navigation clamps at both ends and
//! never wraps. Chrome visibility follows the standard presentation pattern:
//! any qualifying input shows the chrome immediately and re-arms a single
//! hide deadline; the deadline fires once after the idle delay.

use iced::Point;
use std::time::{Duration, Instant};

/// Minimum pointer movement to be considered significant.
const POINTER_MOVEMENT_THRESHOLD: f32 = 10.0;

/// Navigation state for a fixed-size slide deck.
#[derive(Debug, Clone)]
pub struct State {
    /// Current slide index, always within `0..total`.
    index: usize,
    /// Number of slides in the deck; fixed at construction, never zero.
    total: usize,
    /// Whether the navigation chrome is visible.
    nav_visible: bool,
    /// Pending hide deadline. A single slot: re-arming replaces the previous
    /// deadline, so at most one hide is ever pending.
    hide_deadline: Option<Instant>,
    /// Idle delay before the chrome hides.
    hide_delay: Duration,
    /// Last pointer position (to filter micro-movements).
    last_pointer_position: Option<Point>,
}

/// Messages for the deck navigation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance one slide (right arrow, space, next affordance).
    Next,
    /// Retreat one slide (left arrow, previous affordance).
    Previous,
    /// Jump to the first slide (Home).
    First,
    /// Jump to the last slide (End).
    Last,
    /// Jump directly to a slide (indicator dot).
    Select(usize),
    /// Pointer moved; counts as activity only.
    PointerMoved(Point),
    /// Periodic check of the hide deadline.
    Tick,
}

/// Effects produced by navigation chrome changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Chrome visibility changed.
    VisibilityChanged(bool),
}

impl State {
    /// Creates a deck over `total` slides, starting at the first one with the
    /// chrome visible and no hide pending.
    ///
    /// `total` must be positive; the deck is compiled in, so an empty deck is
    /// a programming error.
    #[must_use]
    pub fn new(total: usize, hide_delay: Duration) -> Self {
        debug_assert!(total > 0, "deck must contain at least one slide");
        Self {
            index: 0,
            total: total.max(1),
            nav_visible: true,
            hide_deadline: None,
            hide_delay,
            last_pointer_position: None,
        }
    }

    /// Handle a deck navigation message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::First => {
                self.go_to_first();
                self.record_activity()
            }
            Message::Last => {
                self.go_to_last();
                self.record_activity()
            }
            Message::Select(n) => {
                self.go_to(n);
                self.record_activity()
            }
            Message::PointerMoved(pos) => {
                // Filter micro-movements (sensor noise)
                let is_significant = self.last_pointer_position.is_none_or(|last| {
                    let dx = pos.x - last.x;
                    let dy = pos.y - last.y;
                    (dx * dx + dy * dy).sqrt() > POINTER_MOVEMENT_THRESHOLD
                });
                self.last_pointer_position = Some(pos);

                if is_significant {
                    self.record_activity()
                } else {
                    Effect::None
                }
            }
            Message::Tick => self.check_hide_deadline(),
        }
    }

    /// Advances to the next slide, clamping at the last one. Still counts as
    /// activity when already at the end.
    pub fn next(&mut self) -> Effect {
        self.index = (self.index + 1).min(self.total - 1);
        self.record_activity()
    }

    /// Retreats to the previous slide, clamping at the first one.
    pub fn previous(&mut self) -> Effect {
        self.index = self.index.saturating_sub(1);
        self.record_activity()
    }

    /// Jumps to the first slide.
    pub fn go_to_first(&mut self) {
        self.index = 0;
    }

    /// Jumps to the last slide.
    pub fn go_to_last(&mut self) {
        self.index = self.total - 1;
    }

    /// Jumps directly to slide `n`.
    ///
    /// The UI only ever produces indices in `0..total`; an out-of-range `n`
    /// is clamped to the last slide so the in-range invariant holds for every
    /// caller.
    pub fn go_to(&mut self, n: usize) {
        self.index = n.min(self.total - 1);
    }

    /// Shows the chrome and re-arms the hide deadline.
    ///
    /// The deadline is a single slot: the previous pending hide (if any) is
    /// replaced, never stacked, so rapid activity keeps pushing the hide out.
    pub fn record_activity(&mut self) -> Effect {
        self.hide_deadline = Some(Instant::now() + self.hide_delay);
        if !self.nav_visible {
            self.nav_visible = true;
            return Effect::VisibilityChanged(true);
        }
        Effect::None
    }

    /// Hides the chrome if the armed deadline has elapsed.
    ///
    /// Clearing the slot on fire makes the hide happen exactly once per idle
    /// period.
    fn check_hide_deadline(&mut self) -> Effect {
        if let Some(deadline) = self.hide_deadline {
            if Instant::now() >= deadline {
                self.hide_deadline = None;
                if self.nav_visible {
                    self.nav_visible = false;
                    return Effect::VisibilityChanged(false);
                }
            }
        }
        Effect::None
    }

    /// Cancels any pending hide. Called when the deck screen is left so no
    /// deadline outlives the controller's input subscriptions.
    pub fn dispose(&mut self) {
        self.hide_deadline = None;
    }

    /// Current slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the navigation chrome is visible.
    #[must_use]
    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    /// Whether a hide deadline is currently armed.
    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.hide_deadline.is_some()
    }

    /// True on the first slide; the previous affordance is disabled here.
    #[must_use]
    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    /// True on the last slide; the next affordance is disabled here.
    #[must_use]
    pub fn at_last(&self) -> bool {
        self.index == self.total - 1
    }

    /// Completed fraction of the deck, for the progress bar.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.total as f32
    }

    /// Zero-padded counter parts, e.g. `("07", "19")`.
    #[must_use]
    pub fn counter(&self) -> (String, String) {
        (format!("{:02}", self.index + 1), format!("{}", self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(total: usize) -> State {
        State::new(total, Duration::from_secs(3))
    }

    /// Moves the armed deadline to "now" so the next tick sees it as elapsed.
    fn expire_deadline(state: &mut State) {
        if state.hide_deadline.is_some() {
            state.hide_deadline = Some(Instant::now());
        }
    }

    #[test]
    fn new_deck_starts_at_first_slide_with_chrome_visible() {
        let state = deck(19);
        assert_eq!(state.index(), 0);
        assert!(state.nav_visible());
        assert!(!state.hide_pending());
        assert!(state.at_first());
        assert!(!state.at_last());
    }

    #[test]
    fn next_and_previous_clamp_at_boundaries() {
        let mut state = deck(19);

        state.previous();
        assert_eq!(state.index(), 0, "previous at the first slide is a no-op");

        for _ in 0..18 {
            state.next();
        }
        assert_eq!(state.index(), 18);
        assert!(state.at_last());

        state.next();
        assert_eq!(state.index(), 18, "next at the last slide is a no-op");

        state.go_to_first();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_arbitrary_sequences() {
        let mut state = deck(5);
        let moves = [1, 1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, 1];
        for step in moves {
            if step > 0 {
                state.next();
            } else {
                state.previous();
            }
            assert!(state.index() < state.total());
        }
    }

    #[test]
    fn first_and_last_jumps_ignore_prior_state() {
        let mut state = deck(19);
        state.go_to(7);
        state.go_to_last();
        assert_eq!(state.index(), 18);
        state.go_to_first();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn select_jumps_directly_without_intermediate_indices() {
        let mut state = deck(19);
        state.handle(Message::Select(12));
        assert_eq!(state.index(), 12);
    }

    #[test]
    fn out_of_range_jump_clamps_to_last_slide() {
        let mut state = deck(19);
        state.go_to(400);
        assert_eq!(state.index(), 18);
    }

    #[test]
    fn boundary_no_ops_still_count_as_activity() {
        let mut state = deck(3);
        state.nav_visible = false;

        let effect = state.next();
        assert!(matches!(effect, Effect::VisibilityChanged(true)));
        assert!(state.hide_pending());
    }

    #[test]
    fn activity_shows_chrome_synchronously() {
        let mut state = deck(19);
        state.nav_visible = false;

        let effect = state.handle(Message::PointerMoved(Point::new(200.0, 200.0)));
        assert!(state.nav_visible());
        assert!(matches!(effect, Effect::VisibilityChanged(true)));
    }

    #[test]
    fn chrome_hides_exactly_once_after_idle_delay() {
        let mut state = deck(19);
        state.record_activity();

        // Before the deadline nothing happens
        let effect = state.handle(Message::Tick);
        assert!(state.nav_visible());
        assert!(matches!(effect, Effect::None));

        expire_deadline(&mut state);
        let effect = state.handle(Message::Tick);
        assert!(!state.nav_visible());
        assert!(matches!(effect, Effect::VisibilityChanged(false)));

        // The slot was cleared, so a second tick reports nothing
        let effect = state.handle(Message::Tick);
        assert!(matches!(effect, Effect::None));
        assert!(!state.nav_visible());
    }

    #[test]
    fn repeated_activity_replaces_deadline_instead_of_stacking() {
        let mut state = deck(19);
        state.go_to(5);

        state.record_activity();
        let first_deadline = state.hide_deadline;

        // Second trigger before the delay elapses re-arms the single slot
        state.record_activity();
        let second_deadline = state.hide_deadline;
        assert!(second_deadline >= first_deadline);

        // A tick between the first and second deadline must not hide early
        let effect = state.handle(Message::Tick);
        assert!(state.nav_visible());
        assert!(matches!(effect, Effect::None));

        // Only once the replacement deadline elapses does the chrome hide
        expire_deadline(&mut state);
        state.handle(Message::Tick);
        assert!(!state.nav_visible());
    }

    #[test]
    fn micro_pointer_movements_are_ignored() {
        let mut state = deck(19);
        state.handle(Message::PointerMoved(Point::new(100.0, 100.0)));
        state.nav_visible = false;
        state.hide_deadline = None;

        // 3px jitter stays below the significance threshold
        let effect = state.handle(Message::PointerMoved(Point::new(103.0, 100.0)));
        assert!(matches!(effect, Effect::None));
        assert!(!state.nav_visible());
        assert!(!state.hide_pending());
    }

    #[test]
    fn dispose_cancels_pending_hide() {
        let mut state = deck(19);
        state.record_activity();
        assert!(state.hide_pending());

        state.dispose();
        assert!(!state.hide_pending());

        // Without an armed deadline the tick never hides the chrome
        let effect = state.handle(Message::Tick);
        assert!(matches!(effect, Effect::None));
        assert!(state.nav_visible());
    }

    #[test]
    fn progress_and_counter_track_position() {
        let mut state = deck(19);
        assert_eq!(state.counter(), ("01".to_string(), "19".to_string()));

        state.go_to(6);
        assert_eq!(state.counter(), ("07".to_string(), "19".to_string()));
        assert!((state.progress() - 7.0 / 19.0).abs() < f32::EPSILON);

        state.go_to_last();
        assert!((state.progress() - 1.0).abs() < f32::EPSILON);
    }
}
