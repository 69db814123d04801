//! Reveal sequencer and its cancellable timers.
//!
//! The sequencer opens boxes, tracks which reveal the deal controls belong
//! to, and schedules the delayed end of the game when only the contestant's
//! box is left.

pub mod timer;
pub mod sequencer;

pub use timer::{TimerId, TimerKind, TimerQueue};
pub use sequencer::{RevealOutcome, RevealSequencer, RevealStage, SequencerEvent, Selection};
