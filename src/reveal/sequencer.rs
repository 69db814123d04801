//! Reveal sequencing on top of the `Playing` phase.
//!
//! ## Stages
//!
//! - **Selecting**: no contestant box yet. Selecting a box makes it the
//!   contestant's.
//! - **Eliminating**: selecting any other closed box opens it.
//!
//! ## Timers
//!
//! Every reveal highlights the opened box for one reveal delay. When a reveal
//! leaves only the contestant's box closed, a terminal timer is scheduled; when
//! it fires every box is opened and the game ends. Both timers live in the
//! sequencer's `TimerQueue` and are cancelled by `cancel_pending`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::timer::{TimerId, TimerKind, TimerQueue};
use crate::boxes::BoxRegistry;
use crate::core::{BoxId, GameError, Money, Result};

/// Where the contestant is within a game in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStage {
    Selecting,
    Eliminating,
}

/// Result of opening one box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub index: usize,
    pub value: Option<Money>,
    /// This reveal left only the contestant's box closed.
    pub terminal_scheduled: bool,
}

/// What selecting a box did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    Picked(BoxId),
    Revealed(RevealOutcome),
}

/// A timer-driven change the sequencer applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencerEvent {
    HighlightCleared { index: Option<usize> },
    /// Every box was opened; the game is over.
    TerminalReveal,
}

/// Reveal bookkeeping and the timers it owns.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    delay: Duration,
    timers: TimerQueue,
    last_revealed_count: usize,
    newly_revealed: Option<usize>,
    highlight_timer: Option<TimerId>,
    terminal_timer: Option<TimerId>,
}

impl RevealSequencer {
    /// A fresh sequencer whose timers wait `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: TimerQueue::new(),
            last_revealed_count: 0,
            newly_revealed: None,
            highlight_timer: None,
            terminal_timer: None,
        }
    }

    #[must_use]
    pub fn stage(&self, registry: &BoxRegistry) -> RevealStage {
        if registry.contestant().is_some() {
            RevealStage::Eliminating
        } else {
            RevealStage::Selecting
        }
    }

    /// Revealed count at the last point the deal controls were surfaced or
    /// dismissed.
    #[must_use]
    pub fn last_revealed_count(&self) -> usize {
        self.last_revealed_count
    }

    /// Index of the box opened most recently, until its highlight expires.
    #[must_use]
    pub fn newly_revealed(&self) -> Option<usize> {
        self.newly_revealed
    }

    /// A final reveal is scheduled but has not fired.
    #[must_use]
    pub fn terminal_pending(&self) -> bool {
        self.terminal_timer.is_some()
    }

    /// Time until the next timer fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Choose the contestant's box.
    pub fn pick(&mut self, registry: &mut BoxRegistry, index: usize) -> Result<BoxId> {
        let id = registry.mark_contestant(index)?;
        debug!(box_id = id.raw(), "contestant box chosen");
        Ok(id)
    }

    /// Open a non-contestant box.
    pub fn reveal(&mut self, registry: &mut BoxRegistry, index: usize) -> Result<RevealOutcome> {
        if registry.contestant().is_none() {
            return Err(GameError::NoContestantBox);
        }

        let before = registry.revealed_count();
        registry.mark_revealed(index)?;

        self.last_revealed_count = before;
        self.newly_revealed = Some(index);
        if let Some(stale) = self.highlight_timer.take() {
            self.timers.cancel(stale);
        }
        self.highlight_timer = Some(self.timers.schedule(TimerKind::ClearHighlight, self.delay));

        let terminal_scheduled = registry.only_contestant_remains() && self.terminal_timer.is_none();
        if terminal_scheduled {
            self.terminal_timer = Some(self.timers.schedule(TimerKind::TerminalReveal, self.delay));
        }

        let value = registry.get(index)?.value();
        debug!(
            index,
            value = ?value.map(Money::amount),
            revealed = before + 1,
            terminal_scheduled,
            "box revealed"
        );

        Ok(RevealOutcome {
            index,
            value,
            terminal_scheduled,
        })
    }

    /// Handle a box click: pick while selecting, reveal while eliminating.
    pub fn select(&mut self, registry: &mut BoxRegistry, index: usize) -> Result<Selection> {
        match self.stage(registry) {
            RevealStage::Selecting => self.pick(registry, index).map(Selection::Picked),
            RevealStage::Eliminating => self.reveal(registry, index).map(Selection::Revealed),
        }
    }

    /// Hide the deal controls until the next reveal.
    pub fn dismiss_offer(&mut self, registry: &BoxRegistry) {
        self.last_revealed_count = registry.revealed_count();
        debug!(revealed = self.last_revealed_count, "offer dismissed");
    }

    /// Whether the deal / no-deal controls should be shown for `offer`.
    #[must_use]
    pub fn deal_controls_visible(&self, registry: &BoxRegistry, offer: Option<Money>) -> bool {
        let revealed = registry.revealed_count();
        registry.contestant().is_some()
            && revealed > 0
            && revealed > self.last_revealed_count
            && offer.is_some()
    }

    /// Move time forward and apply whatever came due.
    pub fn advance(&mut self, registry: &mut BoxRegistry, elapsed: Duration) -> Vec<SequencerEvent> {
        let mut events = Vec::new();

        for (id, kind) in self.timers.advance(elapsed) {
            debug!(?kind, "timer fired");
            match kind {
                TimerKind::ClearHighlight => {
                    if self.highlight_timer == Some(id) {
                        self.highlight_timer = None;
                        events.push(SequencerEvent::HighlightCleared {
                            index: self.newly_revealed.take(),
                        });
                    }
                }
                TimerKind::TerminalReveal => {
                    if self.terminal_timer == Some(id) {
                        self.terminal_timer = None;
                        registry.reveal_all();
                        events.push(SequencerEvent::TerminalReveal);
                    }
                }
            }
        }

        events
    }

    /// Cancel every pending timer. The highlight goes with its timer.
    pub fn cancel_pending(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.highlight_timer = None;
        self.terminal_timer = None;
        self.newly_revealed = None;
        if cancelled > 0 {
            debug!(cancelled, "pending timers cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    const DELAY: Duration = Duration::from_millis(3000);

    fn playing() -> (RevealSequencer, BoxRegistry) {
        let mut registry = BoxRegistry::new();
        let values: Vec<f64> = (1..=10).map(|v| v as f64 * 100.0).collect();
        registry.assign_values(&values, &mut GameRng::new(42)).unwrap();
        (RevealSequencer::new(DELAY), registry)
    }

    #[test]
    fn test_select_picks_then_reveals() {
        let (mut seq, mut registry) = playing();
        assert_eq!(seq.stage(&registry), RevealStage::Selecting);

        let picked = seq.select(&mut registry, 4).unwrap();
        assert_eq!(picked, Selection::Picked(BoxId::from_index(4).unwrap()));
        assert_eq!(seq.stage(&registry), RevealStage::Eliminating);

        match seq.select(&mut registry, 0).unwrap() {
            Selection::Revealed(outcome) => assert_eq!(outcome.index, 0),
            other => panic!("expected reveal, got {:?}", other),
        }
        assert!(registry.boxes()[0].is_revealed());
    }

    #[test]
    fn test_reveal_requires_contestant() {
        let (mut seq, mut registry) = playing();
        assert_eq!(seq.reveal(&mut registry, 0), Err(GameError::NoContestantBox));
        assert_eq!(registry.revealed_count(), 0);
    }

    #[test]
    fn test_reveal_bookkeeping() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 9).unwrap();

        seq.reveal(&mut registry, 0).unwrap();
        assert_eq!(seq.newly_revealed(), Some(0));
        assert_eq!(seq.last_revealed_count(), 0);

        seq.reveal(&mut registry, 1).unwrap();
        assert_eq!(seq.newly_revealed(), Some(1));
        assert_eq!(seq.last_revealed_count(), 1);
    }

    #[test]
    fn test_rejected_reveal_changes_nothing() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 9).unwrap();
        seq.reveal(&mut registry, 0).unwrap();

        assert_eq!(
            seq.reveal(&mut registry, 9),
            Err(GameError::IsContestantBox { index: 9 })
        );
        assert_eq!(seq.newly_revealed(), Some(0));
        assert_eq!(seq.last_revealed_count(), 0);
    }

    #[test]
    fn test_deal_controls_once_per_reveal() {
        let (mut seq, mut registry) = playing();
        let offer = Some(Money::new(500.0));
        seq.pick(&mut registry, 9).unwrap();

        // Nothing revealed yet.
        assert!(!seq.deal_controls_visible(&registry, offer));

        seq.reveal(&mut registry, 0).unwrap();
        assert!(seq.deal_controls_visible(&registry, offer));
        assert!(!seq.deal_controls_visible(&registry, None));

        seq.dismiss_offer(&registry);
        assert!(!seq.deal_controls_visible(&registry, offer));

        seq.reveal(&mut registry, 1).unwrap();
        assert!(seq.deal_controls_visible(&registry, offer));
    }

    #[test]
    fn test_highlight_clears_after_delay() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 9).unwrap();
        seq.reveal(&mut registry, 3).unwrap();

        assert!(seq.advance(&mut registry, DELAY - Duration::from_millis(1)).is_empty());
        assert_eq!(seq.newly_revealed(), Some(3));

        let events = seq.advance(&mut registry, Duration::from_millis(1));
        assert_eq!(events, vec![SequencerEvent::HighlightCleared { index: Some(3) }]);
        assert_eq!(seq.newly_revealed(), None);
    }

    #[test]
    fn test_new_reveal_restarts_highlight() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 9).unwrap();
        seq.reveal(&mut registry, 0).unwrap();

        seq.advance(&mut registry, Duration::from_millis(2000));
        seq.reveal(&mut registry, 1).unwrap();

        // The first reveal's timer would have fired here.
        assert!(seq.advance(&mut registry, Duration::from_millis(1500)).is_empty());
        assert_eq!(seq.newly_revealed(), Some(1));

        seq.advance(&mut registry, Duration::from_millis(1500));
        assert_eq!(seq.newly_revealed(), None);
    }

    #[test]
    fn test_terminal_reveal() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 5).unwrap();

        for index in (0..10).filter(|&i| i != 5) {
            let outcome = seq.reveal(&mut registry, index).unwrap();
            assert_eq!(outcome.terminal_scheduled, index == 9);
        }
        assert!(seq.terminal_pending());
        assert!(!registry.boxes()[5].is_revealed());
        assert_eq!(seq.next_deadline(), Some(DELAY));

        let events = seq.advance(&mut registry, DELAY);

        assert!(events.contains(&SequencerEvent::TerminalReveal));
        assert!(!seq.terminal_pending());
        assert_eq!(registry.revealed_count(), 10);
    }

    #[test]
    fn test_cancel_pending() {
        let (mut seq, mut registry) = playing();
        seq.pick(&mut registry, 0).unwrap();
        for index in 1..10 {
            seq.reveal(&mut registry, index).unwrap();
        }
        assert!(seq.terminal_pending());

        seq.cancel_pending();

        assert!(!seq.terminal_pending());
        assert_eq!(seq.newly_revealed(), None);
        assert_eq!(seq.next_deadline(), None);
        assert!(seq.advance(&mut registry, DELAY * 2).is_empty());
        assert!(!registry.boxes()[0].is_revealed());
    }
}
