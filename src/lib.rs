//! # papasko
//!
//! Engine for a single-player box-elimination game with a banker's offer.
//!
//! A host hides ten values in ten boxes, the contestant keeps one box, then
//! opens the others one by one. After each reveal the banker offers the
//! floored mean of the closed boxes; taking the deal ends the game early,
//! refusing it continues the elimination.
//!
//! ## Design Principles
//!
//! 1. **Data, not presentation**: The engine is a command surface plus a
//!    serializable `GameView`. Rendering, input parsing and animation live
//!    in whatever drives it.
//!
//! 2. **One-way state**: Box values are set once, boxes only ever open, the
//!    contestant box is chosen once, and the phase only moves forward until
//!    an explicit reset.
//!
//! 3. **Explicit time**: Delayed transitions are cancellable timers on a
//!    logical clock advanced by the caller, so games are deterministic and
//!    testable.
//!
//! ## Modules
//!
//! - `core`: Box ids, money, RNG, configuration, errors
//! - `boxes`: The box registry
//! - `randomizer`: Fisher-Yates value shuffle
//! - `offer`: Banker's offer calculation
//! - `reveal`: Reveal sequencing and timers
//! - `game`: The top-level game state machine

pub mod core;
pub mod boxes;
pub mod randomizer;
pub mod offer;
pub mod reveal;
pub mod game;

// Re-export commonly used types
pub use crate::core::{BoxId, GameConfig, GameError, GameRng, Money, Result, SetupError};

pub use crate::boxes::{BoxRegistry, GameBox, ValueBoardEntry, BOX_COUNT};

pub use crate::offer::{compute_offer, OFFER_STEP};

pub use crate::reveal::{
    RevealOutcome, RevealSequencer, RevealStage, Selection, SequencerEvent,
    TimerId, TimerKind, TimerQueue,
};

pub use crate::game::{Game, GameObserver, GameOutcome, GamePhase, GameView};
