//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a game. `Player::One` moves first by default.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.
//!
//! ## StoneCounts
//!
//! Stones still in hand and stones on the board for one player.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{Player, PlayerMap};
///
/// let mut captured: PlayerMap<u32> = PlayerMap::with_value(0);
/// captured[Player::Two] += 1;
///
/// assert_eq!(captured[Player::One], 0);
/// assert_eq!(captured[Player::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's stone supply.
///
/// `in_hand` only ever decreases; `on_board` rises with placements and
/// falls with captures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoneCounts {
    /// Stones not yet placed.
    pub in_hand: u8,
    /// Stones currently on the board.
    pub on_board: u8,
}

impl StoneCounts {
    /// Fresh supply at the start of a game.
    #[must_use]
    pub const fn starting(stones: u8) -> Self {
        Self {
            in_hand: stones,
            on_board: 0,
        }
    }

    /// Stones still in play (hand plus board).
    #[must_use]
    pub const fn total(self) -> u8 {
        self.in_hand + self.on_board
    }

    /// No stones left to place and fewer than three on the board.
    #[must_use]
    pub const fn is_eliminated(self) -> bool {
        self.in_hand == 0 && self.on_board < 3
    }
}
