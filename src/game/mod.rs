//! Game state machine.
//!
//! `Game` composes the box registry, value randomizer, offer calculator and
//! reveal sequencer behind the command and observation surface used by the
//! presentation layer.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use papasko::game::{Game, GamePhase};
//!
//! let mut game = Game::with_seed(7);
//! let values: Vec<f64> = (1..=10).map(|v| v as f64 * 100.0).collect();
//! game.start_game(&values).unwrap();
//!
//! game.pick_contestant_box(0).unwrap();
//! for index in 1..10 {
//!     game.reveal_box(index).unwrap();
//! }
//! assert!(game.terminal_pending());
//!
//! game.advance(Duration::from_millis(3000));
//! assert_eq!(game.phase(), GamePhase::Ended);
//! ```

mod machine;
mod observer;
mod phase;
mod view;

pub use machine::Game;
pub use observer::GameObserver;
pub use phase::GamePhase;
pub use view::{GameOutcome, GameView};
