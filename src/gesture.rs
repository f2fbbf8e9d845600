//! Long-press detection for pointer input.
//!
//! Terminals only report button down and button up; the "held" phase has to
//! be derived by polling from the tick loop. The tracker remembers what the
//! press started on and either fires a long-press once the threshold
//! elapses or yields a tap when the button is released early. A release
//! after the long-press fired is swallowed - the gesture was already
//! consumed.

use std::time::{Duration, Instant};

/// Hold time after which a press counts as a long-press.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(800);

/// What a button release amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome<T> {
    /// Released before the threshold: a plain tap on the target.
    Tap(T),
    /// Held past the threshold without an intervening poll; same meaning as
    /// a fired long-press.
    LongPress(T),
}

#[derive(Debug, Clone, Copy)]
struct Press<T> {
    target: T,
    started: Instant,
    fired: bool,
}

/// Tracks at most one in-flight press.
#[derive(Debug, Default)]
pub struct PressTracker<T> {
    press: Option<Press<T>>,
}

impl<T: Copy> PressTracker<T> {
    pub fn new() -> Self {
        Self { press: None }
    }

    /// Begin tracking a press on `target`. Replaces any press still in
    /// flight - terminals may drop the matching button-up event.
    pub fn press(&mut self, target: T, now: Instant) {
        self.press = Some(Press {
            target,
            started: now,
            fired: false,
        });
    }

    /// Target of the in-flight press, if any.
    pub fn target(&self) -> Option<T> {
        self.press.as_ref().map(|press| press.target)
    }

    /// Fire the long-press if the threshold has elapsed. Returns the target
    /// exactly once per press; later polls are quiet.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let press = self.press.as_mut()?;
        if press.fired || now.duration_since(press.started) < LONG_PRESS_THRESHOLD {
            return None;
        }
        press.fired = true;
        Some(press.target)
    }

    /// End the press. Early releases yield a tap; releases past the
    /// threshold where no poll ran in between yield the long-press instead.
    pub fn release(&mut self, now: Instant) -> Option<PressOutcome<T>> {
        let press = self.press.take()?;
        if press.fired {
            return None;
        }
        if now.duration_since(press.started) < LONG_PRESS_THRESHOLD {
            Some(PressOutcome::Tap(press.target))
        } else {
            Some(PressOutcome::LongPress(press.target))
        }
    }

    /// Drop any in-flight press without producing an outcome.
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_release_is_a_tap() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);
        assert_eq!(
            tracker.release(t0 + Duration::from_millis(200)),
            Some(PressOutcome::Tap('a'))
        );
    }

    #[test]
    fn test_long_hold_fires_once() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);

        assert_eq!(tracker.poll(t0 + Duration::from_millis(500)), None);
        assert_eq!(tracker.poll(t0 + Duration::from_millis(900)), Some('a'));
        assert_eq!(tracker.poll(t0 + Duration::from_millis(1000)), None);
    }

    #[test]
    fn test_release_after_fire_is_swallowed() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);
        tracker.poll(t0 + Duration::from_millis(900));
        assert_eq!(tracker.release(t0 + Duration::from_millis(950)), None);
    }

    #[test]
    fn test_missed_poll_still_long_presses() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);
        // No poll ran while held - the release itself reports the hold
        assert_eq!(
            tracker.release(t0 + Duration::from_millis(1200)),
            Some(PressOutcome::LongPress('a'))
        );
    }

    #[test]
    fn test_release_without_press() {
        let mut tracker: PressTracker<char> = PressTracker::new();
        assert_eq!(tracker.release(Instant::now()), None);
        assert_eq!(tracker.poll(Instant::now()), None);
    }

    #[test]
    fn test_new_press_replaces_old() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);
        tracker.press('b', t0 + Duration::from_millis(100));
        assert_eq!(
            tracker.release(t0 + Duration::from_millis(300)),
            Some(PressOutcome::Tap('b'))
        );
    }

    #[test]
    fn test_cancel_drops_the_press() {
        let mut tracker = PressTracker::new();
        let t0 = Instant::now();
        tracker.press('a', t0);
        assert_eq!(tracker.target(), Some('a'));
        tracker.cancel();
        assert_eq!(tracker.target(), None);
        assert_eq!(tracker.release(t0 + Duration::from_millis(100)), None);
    }
}
