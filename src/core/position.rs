//! Board position identification.
//!
//! The board has 24 fixed intersections numbered row by row, outer ring
//! first. See [`crate::board::topology`] for the layout diagram.
//!
//! ## Validity
//!
//! `Position` is a plain newtype over the raw index so that clicks coming
//! from an input collaborator can be carried around unchecked. Every board
//! query treats an out-of-range position as "nothing there":
//!
//! ```
//! use morris_engine::core::Position;
//!
//! assert!(Position::new(23).is_valid());
//! assert!(!Position(24).is_valid());
//! assert_eq!(Position::from_index(7), Some(Position::new(7)));
//! assert_eq!(Position::from_index(99), None);
//! ```

use serde::{Deserialize, Serialize};

/// One of the 24 board intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Number of intersections on the board.
    pub const COUNT: usize = 24;

    /// Create a position from a raw index.
    ///
    /// No range check is performed; use [`Position::from_index`] for input
    /// that may be out of range.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Checked conversion from an arbitrary index (e.g. a click).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this position exists on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < Self::COUNT
    }

    /// Iterate over every board position in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT as u8).map(Position)
    }
}

impl From<u8> for Position {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
