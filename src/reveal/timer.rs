//! Cancellable timers on a logical clock.
//!
//! The engine never sleeps. The presentation layer tells it how much time has
//! passed via `advance`, and `next_deadline` tells the presentation layer how
//! long it may wait before something changes.
//!
//! ```
//! use std::time::Duration;
//! use papasko::reveal::{TimerKind, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let id = timers.schedule(TimerKind::ClearHighlight, Duration::from_millis(3000));
//!
//! assert!(timers.advance(Duration::from_millis(2999)).is_empty());
//! assert_eq!(timers.advance(Duration::from_millis(1)), vec![(id, TimerKind::ClearHighlight)]);
//! ```

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// End the newly-revealed highlight window.
    ClearHighlight,
    /// Open every box and end the game.
    TerminalReveal,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    kind: TimerKind,
    due: Duration,
}

/// Pending timers keyed by id, plus the current logical time.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: FxHashMap<TimerId, Scheduled>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `kind` to fire `delay` from now.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            Scheduled {
                kind,
                due: self.now.saturating_add(delay),
            },
        );
        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Cancel everything. Returns how many timers were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time remaining until the earliest pending timer fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .values()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and return every timer that came due.
    ///
    /// Fired timers are ordered by due time, then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, TimerKind)> {
        self.now = self.now.saturating_add(elapsed);

        let mut due: Vec<(TimerId, Scheduled)> = self
            .pending
            .iter()
            .filter(|(_, s)| s.due <= self.now)
            .map(|(&id, &s)| (id, s))
            .collect();
        due.sort_by_key(|(id, s)| (s.due, id.0));

        for (id, _) in &due {
            self.pending.remove(id);
        }

        due.into_iter().map(|(id, s)| (id, s.kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fires_at_deadline() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(TimerKind::TerminalReveal, ms(100));

        assert!(timers.advance(ms(99)).is_empty());
        assert!(timers.is_pending(id));

        let fired = timers.advance(ms(1));
        assert_eq!(fired, vec![(id, TimerKind::TerminalReveal)]);
        assert!(timers.is_empty());
        assert_eq!(timers.now(), ms(100));
    }

    #[test]
    fn test_fires_once() {
        let mut timers = TimerQueue::new();
        timers.schedule(TimerKind::ClearHighlight, ms(10));

        assert_eq!(timers.advance(ms(50)).len(), 1);
        assert!(timers.advance(ms(50)).is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(TimerKind::ClearHighlight, ms(10));

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = TimerQueue::new();
        timers.schedule(TimerKind::ClearHighlight, ms(10));
        timers.schedule(TimerKind::TerminalReveal, ms(20));

        assert_eq!(timers.cancel_all(), 2);
        assert_eq!(timers.next_deadline(), None);
        assert!(timers.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_ordering_by_due_then_schedule() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(TimerKind::ClearHighlight, ms(30));
        let first = timers.schedule(TimerKind::ClearHighlight, ms(10));
        let tie = timers.schedule(TimerKind::TerminalReveal, ms(10));

        let fired: Vec<TimerId> = timers.advance(ms(30)).into_iter().map(|(id, _)| id).collect();

        assert_eq!(fired, vec![first, tie, late]);
    }

    #[test]
    fn test_next_deadline_tracks_clock() {
        let mut timers = TimerQueue::new();
        assert_eq!(timers.next_deadline(), None);

        timers.schedule(TimerKind::ClearHighlight, ms(3000));
        timers.advance(ms(1000));
        timers.schedule(TimerKind::TerminalReveal, ms(3000));

        assert_eq!(timers.next_deadline(), Some(ms(2000)));
        assert_eq!(timers.len(), 2);
    }
}
