//! Move representation.
//!
//! A move is what a player (human or AI) intends to do on their turn:
//! - "Place" = drop a stone from hand onto an empty position
//! - "Shift" = pick up an own stone and put it down elsewhere (step or fly)
//!
//! The engine only understands clicks, so every move also knows the click
//! sequence that performs it.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::position::Position;

/// A placement or a relocation.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{Move, Position};
///
/// let place = Move::Place(Position::new(4));
/// assert_eq!(place.destination(), Position::new(4));
/// assert_eq!(place.clicks().as_slice(), &[Position::new(4)]);
///
/// let shift = Move::Shift { from: Position::new(1), to: Position::new(2) };
/// assert_eq!(shift.origin(), Some(Position::new(1)));
/// assert_eq!(shift.clicks().as_slice(), &[Position::new(1), Position::new(2)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Drop a stone from hand.
    Place(Position),
    /// Move an own stone from `from` to `to`.
    Shift { from: Position, to: Position },
}

impl Move {
    /// Where the stone ends up.
    #[must_use]
    pub const fn destination(self) -> Position {
        match self {
            Move::Place(pos) => pos,
            Move::Shift { to, .. } => to,
        }
    }

    /// Where the stone was picked up, if it was on the board.
    #[must_use]
    pub const fn origin(self) -> Option<Position> {
        match self {
            Move::Place(_) => None,
            Move::Shift { from, .. } => Some(from),
        }
    }

    /// The clicks that perform this move from an idle turn.
    #[must_use]
    pub fn clicks(self) -> SmallVec<[Position; 2]> {
        match self {
            Move::Place(pos) => smallvec![pos],
            Move::Shift { from, to } => smallvec![from, to],
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "place {pos}"),
            Move::Shift { from, to } => write!(f, "{from} -> {to}"),
        }
    }
}
