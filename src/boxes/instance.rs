//! A single box.

use serde::{Deserialize, Serialize};

use crate::core::{BoxId, Money};

/// One of the ten boxes on the stage.
///
/// State only moves forward: `value` is set once at setup, `revealed` and
/// `is_contestant` flip to `true` at most once. Mutation goes through
/// `BoxRegistry`, which enforces those rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameBox {
    pub(crate) id: BoxId,
    pub(crate) value: Option<Money>,
    pub(crate) revealed: bool,
    pub(crate) is_contestant: bool,
}

impl GameBox {
    /// A fresh, empty, unopened box.
    #[must_use]
    pub fn new(id: BoxId) -> Self {
        Self {
            id,
            value: None,
            revealed: false,
            is_contestant: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> BoxId {
        self.id
    }

    /// Hidden value, `None` until the game starts.
    #[must_use]
    pub fn value(&self) -> Option<Money> {
        self.value
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_contestant(&self) -> bool {
        self.is_contestant
    }

    /// Still closed; counts toward the banker's offer.
    #[must_use]
    pub fn is_unopened(&self) -> bool {
        !self.revealed
    }
}
