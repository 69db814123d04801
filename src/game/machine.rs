//! The game controller.
//!
//! `Game` owns the box registry, the reveal sequencer and the RNG, and is the
//! only thing the presentation layer talks to. Commands either succeed and
//! notify observers, or return a `GameError` and change nothing.

use std::time::Duration;

use tracing::{debug, info};

use super::observer::GameObserver;
use super::phase::GamePhase;
use super::view::{GameOutcome, GameView};
use crate::boxes::{BoxRegistry, GameBox};
use crate::core::{BoxId, GameConfig, GameError, GameRng, Money, Result};
use crate::offer::compute_offer;
use crate::reveal::{RevealOutcome, RevealSequencer, RevealStage, Selection, SequencerEvent};

/// A single game instance.
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    registry: BoxRegistry,
    sequencer: RevealSequencer,
    phase: GamePhase,
    accepted_offer: Option<Money>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a game in `Setup`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        let sequencer = RevealSequencer::new(config.reveal_delay());
        Self {
            config,
            rng,
            registry: BoxRegistry::new(),
            sequencer,
            phase: GamePhase::Setup,
            accepted_offer: None,
            observers: Vec::new(),
        }
    }

    /// Create a game with a fixed seed and default settings.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// Register a renderer to be called after every change.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Observation ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn registry(&self) -> &BoxRegistry {
        &self.registry
    }

    #[must_use]
    pub fn boxes(&self) -> &[GameBox] {
        self.registry.boxes()
    }

    #[must_use]
    pub fn contestant(&self) -> Option<BoxId> {
        self.registry.contestant()
    }

    /// Reveal stage, while playing.
    #[must_use]
    pub fn stage(&self) -> Option<RevealStage> {
        (self.phase == GamePhase::Playing).then(|| self.sequencer.stage(&self.registry))
    }

    /// The banker's offer right now, if there is one.
    #[must_use]
    pub fn current_offer(&self) -> Option<Money> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        compute_offer(self.registry.boxes())
    }

    #[must_use]
    pub fn deal_controls_visible(&self) -> bool {
        self.phase == GamePhase::Playing
            && self
                .sequencer
                .deal_controls_visible(&self.registry, self.current_offer())
    }

    #[must_use]
    pub fn newly_revealed(&self) -> Option<usize> {
        self.sequencer.newly_revealed()
    }

    #[must_use]
    pub fn terminal_pending(&self) -> bool {
        self.sequencer.terminal_pending()
    }

    /// Time the presentation layer can wait before the next timed change.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.sequencer.next_deadline()
    }

    /// Final result, once ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.phase != GamePhase::Ended {
            return None;
        }
        let contestant = self.registry.contestant_box()?;
        Some(GameOutcome {
            contestant: contestant.id(),
            contestant_value: contestant.value(),
            accepted_offer: self.accepted_offer,
        })
    }

    /// Snapshot of everything observable.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            phase: self.phase,
            stage: self.stage(),
            boxes: self.registry.boxes().to_vec(),
            contestant: self.contestant(),
            offer: self.current_offer(),
            deal_controls_visible: self.deal_controls_visible(),
            newly_revealed: self.newly_revealed(),
            terminal_pending: self.terminal_pending(),
            value_board: self.registry.value_board(),
            outcome: self.outcome(),
        }
    }

    // === Commands ===

    /// Shuffle the host's values into the boxes and start play.
    pub fn start_game(&mut self, values: &[f64]) -> Result<()> {
        let result = self
            .require_phase(GamePhase::Setup)
            .and_then(|()| self.registry.assign_values(values, &mut self.rng));
        log_rejection("start_game", &result);
        result?;

        self.phase = GamePhase::Playing;
        info!(seed = self.rng.seed(), "game started");
        self.notify();
        Ok(())
    }

    /// Choose the contestant's box.
    pub fn pick_contestant_box(&mut self, index: usize) -> Result<BoxId> {
        let result = self
            .require_phase(GamePhase::Playing)
            .and_then(|()| self.sequencer.pick(&mut self.registry, index));
        log_rejection("pick_contestant_box", &result);
        let id = result?;

        self.notify();
        Ok(id)
    }

    /// Open one of the other boxes.
    pub fn reveal_box(&mut self, index: usize) -> Result<RevealOutcome> {
        let result = self
            .require_phase(GamePhase::Playing)
            .and_then(|()| self.sequencer.reveal(&mut self.registry, index));
        log_rejection("reveal_box", &result);
        let outcome = result?;

        self.notify();
        Ok(outcome)
    }

    /// A box was clicked: pick it if no box is chosen yet, otherwise open it.
    pub fn select_box(&mut self, index: usize) -> Result<Selection> {
        let result = self
            .require_phase(GamePhase::Playing)
            .and_then(|()| self.sequencer.select(&mut self.registry, index));
        log_rejection("select_box", &result);
        let selection = result?;

        self.notify();
        Ok(selection)
    }

    /// Take the banker's offer. Opens every box and ends the game at once.
    pub fn accept_deal(&mut self) -> Result<Money> {
        let result = self.deal_on_table();
        log_rejection("accept_deal", &result);
        let offer = result?;

        self.sequencer.cancel_pending();
        self.registry.reveal_all();
        self.accepted_offer = Some(offer);
        self.phase = GamePhase::Ended;
        info!(offer = offer.amount(), "deal accepted, game ended");
        self.notify();
        Ok(offer)
    }

    /// Turn down the offer; the deal controls stay hidden until the next reveal.
    pub fn reject_deal(&mut self) -> Result<()> {
        let result = self.require_phase(GamePhase::Playing);
        log_rejection("reject_deal", &result);
        result?;

        self.sequencer.dismiss_offer(&self.registry);
        self.notify();
        Ok(())
    }

    /// Throw the current game away and return to `Setup`.
    ///
    /// Pending timers are cancelled; the RNG carries on so the next game gets
    /// a different assignment.
    pub fn reset(&mut self) {
        self.sequencer.cancel_pending();
        self.sequencer = RevealSequencer::new(self.config.reveal_delay());
        self.registry = BoxRegistry::new();
        self.accepted_offer = None;
        self.phase = GamePhase::Setup;
        info!("game reset");
        self.notify();
    }

    /// Let `elapsed` pass and apply any timers that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SequencerEvent> {
        let events = self.sequencer.advance(&mut self.registry, elapsed);

        if events.contains(&SequencerEvent::TerminalReveal) && self.phase == GamePhase::Playing {
            self.phase = GamePhase::Ended;
            let contestant_value = self.registry.contestant_box().and_then(GameBox::value);
            info!(
                contestant_value = ?contestant_value.map(Money::amount),
                "final box revealed, game ended"
            );
        }

        if !events.is_empty() {
            self.notify();
        }
        events
    }

    // === Internals ===

    fn require_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn deal_on_table(&self) -> Result<Money> {
        self.require_phase(GamePhase::Playing)?;
        if self.registry.contestant().is_none() {
            return Err(GameError::NoContestantBox);
        }
        self.current_offer().ok_or(GameError::NoOfferAvailable)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer.on_change(&view);
        }
    }
}

fn log_rejection<T>(command: &'static str, result: &Result<T>) {
    if let Err(error) = result {
        debug!(command, %error, "command rejected");
    }
}
