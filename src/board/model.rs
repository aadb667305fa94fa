//! Stone occupancy over the fixed topology.
//!
//! `Board` knows only physical facts: which position holds whose stone and
//! which positions touch. Phase rules (when adjacency matters, who may move)
//! live in the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Position};

use super::topology::ADJACENCY;

/// Neighbour list; no position has more than four.
pub type Neighbors = SmallVec<[Position; 4]>;

/// Occupancy of the 24 positions.
///
/// Each slot holds at most one owner, so two stones can never share a
/// position. Out-of-range positions have no owner, are never empty, and
/// reject every mutation.
///
/// ## Usage
///
/// ```
/// use morris_engine::board::Board;
/// use morris_engine::core::{Player, Position};
///
/// let mut board = Board::new();
/// assert!(board.place(Position::new(0), Player::One));
/// assert!(!board.place(Position::new(0), Player::Two)); // occupied
///
/// assert!(board.can_step_move(Position::new(0), Position::new(1)));
/// assert!(!board.can_step_move(Position::new(0), Position::new(2))); // not adjacent
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; Position::COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every stone, keeping the board itself.
    pub fn clear(&mut self) {
        self.cells = [None; Position::COUNT];
    }

    /// Whether `pos` exists and holds no stone.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.cells.get(pos.index()), Some(None))
    }

    /// Owner of the stone at `pos`, if any.
    #[must_use]
    pub fn owner_at(&self, pos: Position) -> Option<Player> {
        self.cells.get(pos.index()).copied().flatten()
    }

    /// Put a stone for `owner` on an empty position.
    ///
    /// Returns false (and changes nothing) if `pos` is invalid or occupied.
    pub fn place(&mut self, pos: Position, owner: Player) -> bool {
        match self.cells.get_mut(pos.index()) {
            Some(cell) if cell.is_none() => {
                *cell = Some(owner);
                true
            }
            _ => false,
        }
    }

    /// Relocate the stone at `from` to the empty position `to`.
    ///
    /// Adjacency is not checked here; flying moves use this directly.
    pub fn move_stone(&mut self, from: Position, to: Position) -> bool {
        let Some(owner) = self.owner_at(from) else {
            return false;
        };
        if !self.is_empty(to) {
            return false;
        }
        self.cells[from.index()] = None;
        self.cells[to.index()] = Some(owner);
        true
    }

    /// Take the stone at `pos` off the board.
    pub fn remove(&mut self, pos: Position) -> bool {
        self.cells
            .get_mut(pos.index())
            .and_then(Option::take)
            .is_some()
    }

    /// Positions directly connected to `pos`.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        ADJACENCY
            .get(pos.index())
            .map(|ns| ns.iter().copied().map(Position).collect())
            .unwrap_or_default()
    }

    /// Whether `a` and `b` are connected by a board line segment.
    #[must_use]
    pub fn are_adjacent(&self, a: Position, b: Position) -> bool {
        ADJACENCY
            .get(a.index())
            .is_some_and(|ns| ns.contains(&b.0))
    }

    /// A single-step move: `from` occupied, `to` empty and adjacent.
    #[must_use]
    pub fn can_step_move(&self, from: Position, to: Position) -> bool {
        self.owner_at(from).is_some() && self.is_empty(to) && self.are_adjacent(from, to)
    }

    /// Whether the stone (or hole) at `pos` has at least one empty neighbour.
    #[must_use]
    pub fn has_empty_neighbor(&self, pos: Position) -> bool {
        self.neighbors(pos).into_iter().any(|n| self.is_empty(n))
    }

    /// Number of empty neighbours of `pos`.
    #[must_use]
    pub fn empty_neighbor_count(&self, pos: Position) -> usize {
        self.neighbors(pos).into_iter().filter(|&n| self.is_empty(n)).count()
    }

    /// All empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&p| self.is_empty(p))
    }

    /// All positions holding `player`'s stones, in index order.
    pub fn positions_owned_by(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.owner_at(p) == Some(player))
    }

    /// Number of `player`'s stones on the board.
    #[must_use]
    pub fn count_owned_by(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> Position {
        Position::new(i)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().count(), 24);
        assert_eq!(board.count_owned_by(Player::One), 0);
        assert!(Position::all().all(|pos| board.owner_at(pos).is_none()));
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();

        assert!(board.place(p(5), Player::Two));
        assert_eq!(board.owner_at(p(5)), Some(Player::Two));
        assert!(!board.is_empty(p(5)));

        // Occupied
        assert!(!board.place(p(5), Player::One));
        assert_eq!(board.owner_at(p(5)), Some(Player::Two));
    }

    #[test]
    fn test_out_of_range_is_fail_safe() {
        let mut board = Board::new();

        assert_eq!(board.owner_at(p(24)), None);
        assert!(!board.is_empty(p(24)));
        assert!(!board.place(p(24), Player::One));
        assert!(!board.remove(p(200)));
        assert!(board.neighbors(p(30)).is_empty());
        assert!(!board.move_stone(p(99), p(0)));

        board.place(p(0), Player::One);
        assert!(!board.move_stone(p(0), p(24)));
        assert_eq!(board.owner_at(p(0)), Some(Player::One));
    }

    #[test]
    fn test_move_stone() {
        let mut board = Board::new();
        board.place(p(0), Player::One);
        board.place(p(1), Player::Two);

        // Target occupied
        assert!(!board.move_stone(p(0), p(1)));
        // Source empty
        assert!(!board.move_stone(p(2), p(3)));

        // Adjacency is not enforced at this level
        assert!(board.move_stone(p(0), p(23)));
        assert!(board.is_empty(p(0)));
        assert_eq!(board.owner_at(p(23)), Some(Player::One));
    }

    #[test]
    fn test_remove() {
        let mut board = Board::new();
        board.place(p(7), Player::One);

        assert!(board.remove(p(7)));
        assert!(board.is_empty(p(7)));
        assert!(!board.remove(p(7)));
    }

    #[test]
    fn test_neighbors() {
        let board = Board::new();
        assert_eq!(board.neighbors(p(0)).as_slice(), &[p(1), p(9)]);
        assert_eq!(board.neighbors(p(4)).len(), 4);
        assert_eq!(board.neighbors(p(15)).as_slice(), &[p(11), p(16)]);
    }

    #[test]
    fn test_can_step_move() {
        let mut board = Board::new();
        board.place(p(15), Player::One);
        board.place(p(16), Player::One);

        assert!(board.can_step_move(p(15), p(11)));
        assert!(!board.can_step_move(p(15), p(16))); // occupied
        assert!(!board.can_step_move(p(15), p(19))); // not adjacent
        assert!(!board.can_step_move(p(14), p(13))); // no stone to move
    }

    #[test]
    fn test_has_empty_neighbor() {
        let mut board = Board::new();
        board.place(p(0), Player::One);
        board.place(p(1), Player::Two);
        assert!(board.has_empty_neighbor(p(0)));

        board.place(p(9), Player::Two);
        assert!(!board.has_empty_neighbor(p(0)));
        assert_eq!(board.empty_neighbor_count(p(1)), 2);
    }

    #[test]
    fn test_positions_owned_by() {
        let mut board = Board::new();
        board.place(p(3), Player::One);
        board.place(p(8), Player::Two);
        board.place(p(20), Player::One);

        let mine: Vec<_> = board.positions_owned_by(Player::One).collect();
        assert_eq!(mine, vec![p(3), p(20)]);
        assert_eq!(board.count_owned_by(Player::Two), 1);
        assert_eq!(board.empty_positions().count(), 21);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.place(p(3), Player::One);
        board.place(p(4), Player::Two);

        board.clear();
        assert_eq!(board, Board::new());
    }
}
