//! The fixed set of boxes and the rules for mutating them.
//!
//! The `BoxRegistry` owns exactly `BOX_COUNT` boxes for the lifetime of a
//! game. A reset replaces the registry wholesale rather than clearing it.
//!
//! ## Example
//!
//! ```
//! use papasko::boxes::BoxRegistry;
//! use papasko::core::GameRng;
//!
//! let mut registry = BoxRegistry::new();
//! let values: Vec<f64> = (1..=10).map(|v| v as f64 * 10.0).collect();
//! registry.assign_values(&values, &mut GameRng::new(1)).unwrap();
//!
//! registry.mark_contestant(3).unwrap();
//! registry.mark_revealed(0).unwrap();
//! assert_eq!(registry.revealed_count(), 1);
//! assert!(registry.mark_revealed(3).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::instance::GameBox;
use crate::core::{BoxId, GameError, GameRng, Money, Result, SetupError};
use crate::randomizer::fisher_yates;

/// Number of boxes in every game.
pub const BOX_COUNT: usize = 10;

/// One row of the host's value board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueBoardEntry {
    pub value: Money,
    /// The box holding this value has been opened.
    pub revealed: bool,
}

/// Registry of the ten boxes.
#[derive(Clone, Debug)]
pub struct BoxRegistry {
    boxes: [GameBox; BOX_COUNT],
    contestant: Option<BoxId>,
}

impl Default for BoxRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxRegistry {
    /// Ten empty, unopened boxes with ids 1 through 10.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boxes: std::array::from_fn(|i| GameBox::new(BoxId::nth(i))),
            contestant: None,
        }
    }

    /// All boxes in registry order.
    #[must_use]
    pub fn boxes(&self) -> &[GameBox] {
        &self.boxes
    }

    /// Look up a box by registry index.
    pub fn get(&self, index: usize) -> Result<&GameBox> {
        self.boxes.get(index).ok_or(GameError::BoxOutOfRange { index })
    }

    /// The contestant's box id, once chosen.
    #[must_use]
    pub fn contestant(&self) -> Option<BoxId> {
        self.contestant
    }

    /// The contestant's box, once chosen.
    #[must_use]
    pub fn contestant_box(&self) -> Option<&GameBox> {
        self.contestant.map(|id| &self.boxes[id.index()])
    }

    /// Whether values have been assigned yet.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.boxes.iter().any(|b| b.value.is_some())
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.revealed).count()
    }

    /// Boxes still closed, the contestant's included.
    pub fn unopened(&self) -> impl Iterator<Item = &GameBox> {
        self.boxes.iter().filter(|b| b.is_unopened())
    }

    #[must_use]
    pub fn unopened_count(&self) -> usize {
        self.unopened().count()
    }

    /// True when the contestant's box is the only one left closed.
    #[must_use]
    pub fn only_contestant_remains(&self) -> bool {
        let mut unopened = self.unopened();
        matches!(
            (unopened.next(), unopened.next()),
            (Some(last), None) if last.is_contestant
        )
    }

    /// Validate the host's values, shuffle them and assign one per box.
    ///
    /// Fails without touching any box if the values were already assigned,
    /// there are not exactly `BOX_COUNT` of them, or any is negative or
    /// not finite.
    pub fn assign_values(&mut self, values: &[f64], rng: &mut GameRng) -> Result<()> {
        if self.is_assigned() {
            return Err(SetupError::ValuesAlreadyAssigned.into());
        }
        validate_values(values)?;

        let shuffled = fisher_yates(values, rng);
        for (b, value) in self.boxes.iter_mut().zip(shuffled) {
            b.value = Some(Money::new(value));
        }
        Ok(())
    }

    /// Make the box at `index` the contestant's.
    pub fn mark_contestant(&mut self, index: usize) -> Result<BoxId> {
        let target = self.get(index)?;
        if target.revealed {
            return Err(GameError::AlreadyRevealed { index });
        }
        if let Some(contestant) = self.contestant {
            return Err(GameError::AlreadyAssigned { contestant });
        }

        let b = &mut self.boxes[index];
        b.is_contestant = true;
        self.contestant = Some(b.id);
        Ok(b.id)
    }

    /// Open a non-contestant box.
    pub fn mark_revealed(&mut self, index: usize) -> Result<()> {
        let target = self.get(index)?;
        if target.revealed {
            return Err(GameError::AlreadyRevealed { index });
        }
        if target.is_contestant {
            return Err(GameError::IsContestantBox { index });
        }

        self.boxes[index].revealed = true;
        Ok(())
    }

    /// Open every box. Only used when the game ends.
    pub fn reveal_all(&mut self) {
        for b in &mut self.boxes {
            b.revealed = true;
        }
    }

    /// Assigned values in ascending order, each flagged if its box is open.
    #[must_use]
    pub fn value_board(&self) -> Vec<ValueBoardEntry> {
        let mut board: Vec<ValueBoardEntry> = self
            .boxes
            .iter()
            .filter_map(|b| {
                b.value.map(|value| ValueBoardEntry {
                    value,
                    revealed: b.revealed,
                })
            })
            .collect();
        board.sort_by(|a, b| a.value.amount().total_cmp(&b.value.amount()));
        board
    }
}

/// Check a setup submission: exactly `BOX_COUNT` finite, non-negative values.
pub fn validate_values(values: &[f64]) -> std::result::Result<(), SetupError> {
    if values.len() != BOX_COUNT {
        return Err(SetupError::WrongCount {
            expected: BOX_COUNT,
            got: values.len(),
        });
    }
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(SetupError::NotFinite { index });
        }
        if value < 0.0 {
            return Err(SetupError::Negative { index, value });
        }
    }
    Ok(())
}
