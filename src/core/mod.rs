//! Shared building blocks: box ids, money, RNG, configuration, errors.

pub mod ids;
pub mod money;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::BoxId;
pub use money::Money;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_REVEAL_DELAY_MS};
pub use error::{GameError, Result, SetupError};
