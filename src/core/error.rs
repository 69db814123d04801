//! Engine errors.
//!
//! Every rejected command returns one of these and leaves the game untouched.

use thiserror::Error;

use super::ids::BoxId;
use crate::game::GamePhase;

/// Result alias for engine commands.
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a set of box values was refused at setup.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("expected {expected} box values, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("value at position {index} is negative ({value})")]
    Negative { index: usize, value: f64 },
    #[error("value at position {index} is not a finite number")]
    NotFinite { index: usize },
    #[error("box values have already been assigned")]
    ValuesAlreadyAssigned,
}

/// A command the engine refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    #[error("invalid setup: {0}")]
    InvalidSetup(#[from] SetupError),
    #[error("contestant box already chosen ({contestant})")]
    AlreadyAssigned { contestant: BoxId },
    #[error("box at index {index} is already revealed")]
    AlreadyRevealed { index: usize },
    #[error("box at index {index} is the contestant's box")]
    IsContestantBox { index: usize },
    #[error("box index {index} out of range")]
    BoxOutOfRange { index: usize },
    #[error("command requires phase {expected:?}, game is {actual:?}")]
    InvalidPhase { expected: GamePhase, actual: GamePhase },
    #[error("no contestant box has been chosen")]
    NoContestantBox,
    #[error("no offer is currently available")]
    NoOfferAvailable,
}
