//! Box identification.
//!
//! Boxes carry a stable 1-based id (`1..=BOX_COUNT`) while commands from the
//! presentation layer address them by 0-based index into the registry.
//!
//! ```
//! use papasko::core::BoxId;
//!
//! let id = BoxId::from_index(2).unwrap();
//! assert_eq!(id.raw(), 3);
//! assert_eq!(id.index(), 2);
//! assert!(BoxId::from_index(10).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::boxes::BOX_COUNT;

/// Stable identifier of a box, 1 through `BOX_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoxId(u8);

impl BoxId {
    /// Convert a registry index into its box id.
    ///
    /// Returns `None` if the index is outside the registry.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOX_COUNT {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    /// Box id for an index already known to be in range.
    pub(crate) const fn nth(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// The raw 1-based id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position of this box in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over every box id in registry order.
    pub fn all() -> impl Iterator<Item = BoxId> {
        (0..BOX_COUNT).map(BoxId::nth)
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..BOX_COUNT {
            let id = BoxId::from_index(index).unwrap();
            assert_eq!(id.index(), index);
            assert_eq!(id.raw() as usize, index + 1);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(BoxId::from_index(BOX_COUNT).is_none());
        assert!(BoxId::from_index(usize::MAX).is_none());
    }

    #[test]
    fn test_all() {
        let ids: Vec<u8> = BoxId::all().map(BoxId::raw).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoxId::from_index(6).unwrap()), "Box 7");
    }
}
