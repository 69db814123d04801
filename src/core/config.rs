//! Game configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before the final reveal and before a reveal highlight is cleared.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 3000;

/// Engine configuration.
///
/// The box count and offer step are fixed business rules and are not
/// configurable; see `BOX_COUNT` and `OFFER_STEP`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time the presentation layer gets to animate a reveal (milliseconds).
    /// Governs both the terminal transition and the highlight window.
    pub reveal_delay_ms: u64,

    /// Seed for the value randomizer.
    /// `None` seeds from OS entropy; the same seed replays the same assignments.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay_ms(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = ms;
        self
    }

    /// The reveal delay as a `Duration`.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
