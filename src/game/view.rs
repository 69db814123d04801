//! Read-only snapshot handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use crate::boxes::{GameBox, ValueBoardEntry};
use crate::core::{BoxId, Money};
use crate::reveal::RevealStage;

/// How the game finished.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub contestant: BoxId,
    /// What the contestant's box held.
    pub contestant_value: Option<Money>,
    /// Set if the game ended by taking the banker's offer.
    pub accepted_offer: Option<Money>,
}

/// Everything a renderer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: GamePhase,
    /// `None` outside `Playing`.
    pub stage: Option<RevealStage>,
    pub boxes: Vec<GameBox>,
    pub contestant: Option<BoxId>,
    pub offer: Option<Money>,
    pub deal_controls_visible: bool,
    pub newly_revealed: Option<usize>,
    pub terminal_pending: bool,
    pub value_board: Vec<ValueBoardEntry>,
    pub outcome: Option<GameOutcome>,
}

impl GameView {
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_revealed()).count()
    }
}
