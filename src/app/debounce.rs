//! Single-slot delayed-task scheduler for debounced search dispatch.
//!
//! Typing into the search box should not fire a search per keystroke. The
//! [`DebounceSlot`] holds at most one pending query together with its
//! deadline; scheduling a new query replaces the pending one, so only the
//! last value before a quiet period ever fires. The slot is polled from the
//! runtime's periodic tick rather than owning a timer thread, which keeps it
//! deterministic and trivially testable with synthetic instants.
//!
//! Ordering guarantee: at most one dispatch per quiet period, and no two
//! expirations for the same slot can be observed simultaneously, because
//! [`DebounceSlot::poll`] empties the slot when it fires.

use std::time::{Duration, Instant};

/// Default settling delay before a scheduled query fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A delayed, cancelable, single-value task slot.
///
/// The slot is owned by the application state, so it is dropped together with
/// the state and no pending task can outlive its controller.
#[derive(Debug, Clone)]
pub struct DebounceSlot {
    /// Pending value and the instant at which it becomes due.
    pending: Option<(String, Instant)>,

    /// Settling delay applied to every `schedule` call.
    delay: Duration,
}

impl DebounceSlot {
    /// Creates an empty slot with the given settling delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            pending: None,
            delay,
        }
    }

    /// Schedules `value` to fire once `delay` has elapsed from `now`.
    ///
    /// Replaces any pending value, restarting the quiet period. The previous
    /// value is discarded without firing.
    pub fn schedule(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Discards any pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the pending value if its deadline has passed, emptying the slot.
    ///
    /// Returns `None` while the slot is empty or the quiet period has not yet
    /// elapsed. Called from the periodic tick.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Whether a value is currently scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for DebounceSlot {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn does_not_fire_before_the_quiet_period() {
        let mut slot = DebounceSlot::new(DELAY);
        let start = Instant::now();

        slot.schedule("radiohead".to_string(), start);
        assert_eq!(slot.poll(start + Duration::from_millis(499)), None);
        assert!(slot.is_pending());
    }

    #[test]
    fn fires_the_latest_value_exactly_once() {
        let mut slot = DebounceSlot::new(DELAY);
        let start = Instant::now();

        // Rapid keystrokes within the window: each replaces the pending value.
        slot.schedule("r".to_string(), start);
        slot.schedule("ra".to_string(), start + Duration::from_millis(100));
        slot.schedule("rad".to_string(), start + Duration::from_millis(200));

        // The window is measured from the last keystroke.
        assert_eq!(slot.poll(start + Duration::from_millis(600)), None);

        let fired = slot.poll(start + Duration::from_millis(700));
        assert_eq!(fired.as_deref(), Some("rad"));

        // The slot emptied when it fired.
        assert_eq!(slot.poll(start + Duration::from_secs(5)), None);
        assert!(!slot.is_pending());
    }

    #[test]
    fn cancel_discards_the_pending_value() {
        let mut slot = DebounceSlot::new(DELAY);
        let start = Instant::now();

        slot.schedule("bjork".to_string(), start);
        slot.cancel();

        assert!(!slot.is_pending());
        assert_eq!(slot.poll(start + Duration::from_secs(1)), None);
    }
}
