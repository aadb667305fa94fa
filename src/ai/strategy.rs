//! Move and capture selection policies.
//!
//! - `RandomStrategy`: uniformly random legal moves (Easy)
//! - `HeuristicStrategy`: ordered rules (Medium, Hard)
//!
//! The heuristic tiers try, in order:
//! 1. close a mill
//! 2. occupy the square that would close an opponent mill
//! 3. (Hard, Placement) take a four-way junction
//! 4. (Hard) maximise empty neighbours of the destination
//! 5. (Medium) pick at random
//!
//! Strategies read a board snapshot and never mutate it.

use tracing::debug;

use crate::board::Board;
use crate::core::{GamePhase, GameRng, Move, Player, Position};
use crate::rules::mill::{removable_positions, sits_on_open_two, would_form_mill};

use super::candidates::candidates;
use super::config::Difficulty;

/// The four junctions with four neighbours each.
///
/// Corners have two neighbours and mid-edge squares three, so on this board
/// the junctions are the only positions with above-average connectivity.
pub const STRATEGIC_POSITIONS: [Position; 4] =
    [Position(4), Position(10), Position(13), Position(19)];

/// Policy for choosing the AI's next move and capture.
pub trait MoveStrategy: Send + Sync {
    /// Choose a move for `me`, or `None` if there is no legal move.
    fn select_move(
        &self,
        board: &Board,
        phase: GamePhase,
        me: Player,
        rng: &mut GameRng,
    ) -> Option<Move>;

    /// Choose an opponent stone to capture after `me` closed a mill.
    fn select_capture(&self, board: &Board, me: Player, rng: &mut GameRng) -> Option<Position>;
}

// =============================================================================
// Random
// =============================================================================

/// Uniformly random among legal candidates.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn select_move(
        &self,
        board: &Board,
        phase: GamePhase,
        me: Player,
        rng: &mut GameRng,
    ) -> Option<Move> {
        rng.choose(&candidates(board, phase, me)).copied()
    }

    fn select_capture(&self, board: &Board, me: Player, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&removable_positions(board, me.opponent())).copied()
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// Rule-ordered move choice for the Medium and Hard tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeuristicStrategy {
    /// Prefer strategic junctions during Placement.
    pub strategic_placement: bool,
    /// Fall back to the most mobile destination instead of a random move.
    pub mobility: bool,
}

impl HeuristicStrategy {
    pub const MEDIUM: Self = Self {
        strategic_placement: false,
        mobility: false,
    };

    pub const HARD: Self = Self {
        strategic_placement: true,
        mobility: true,
    };
}

impl MoveStrategy for HeuristicStrategy {
    fn select_move(
        &self,
        board: &Board,
        phase: GamePhase,
        me: Player,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = candidates(board, phase, me);
        if moves.is_empty() {
            return None;
        }

        if let Some(&m) = moves
            .iter()
            .find(|m| would_form_mill(board, m.destination(), me, m.origin()))
        {
            debug!(%m, "closes a mill");
            return Some(m);
        }

        let opponent = me.opponent();
        if let Some(&m) = moves
            .iter()
            .find(|m| would_form_mill(board, m.destination(), opponent, None))
        {
            debug!(%m, "blocks an opponent mill");
            return Some(m);
        }

        if self.strategic_placement && phase.is_placement() {
            let strategic: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|m| STRATEGIC_POSITIONS.contains(&m.destination()))
                .collect();
            if let Some(&m) = rng.choose(&strategic) {
                debug!(%m, "takes a junction");
                return Some(m);
            }
        }

        if self.mobility {
            let best = moves
                .iter()
                .map(|&m| mobility_after(board, m))
                .max()
                .unwrap_or(0);
            let most_mobile: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|&m| mobility_after(board, m) == best)
                .collect();
            let choice = rng.choose(&most_mobile).copied();
            if let Some(m) = choice {
                debug!(%m, mobility = best, "most mobile destination");
            }
            return choice;
        }

        rng.choose(&moves).copied()
    }

    fn select_capture(&self, board: &Board, me: Player, rng: &mut GameRng) -> Option<Position> {
        let removable = removable_positions(board, me.opponent());
        let threatening: Vec<Position> = removable
            .iter()
            .copied()
            .filter(|&pos| sits_on_open_two(board, pos))
            .collect();
        if let Some(&pos) = rng.choose(&threatening) {
            debug!(%pos, "captures from an open two");
            return Some(pos);
        }
        rng.choose(&removable).copied()
    }
}

/// Empty neighbours of the destination once `m` has been played.
fn mobility_after(board: &Board, m: Move) -> usize {
    let dest = m.destination();
    board
        .neighbors(dest)
        .into_iter()
        .filter(|&n| board.is_empty(n) || Some(n) == m.origin())
        .count()
}

// =============================================================================
// Tier dispatch
// =============================================================================

/// Choose a move for `me` at the given difficulty.
pub fn select_move(
    board: &Board,
    phase: GamePhase,
    me: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => RandomStrategy.select_move(board, phase, me, rng),
        Difficulty::Medium => HeuristicStrategy::MEDIUM.select_move(board, phase, me, rng),
        Difficulty::Hard => HeuristicStrategy::HARD.select_move(board, phase, me, rng),
    }
}

/// Choose a stone to capture after `me` closed a mill.
pub fn select_capture(
    board: &Board,
    me: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => RandomStrategy.select_capture(board, me, rng),
        Difficulty::Medium => HeuristicStrategy::MEDIUM.select_capture(board, me, rng),
        Difficulty::Hard => HeuristicStrategy::HARD.select_capture(board, me, rng),
    }
}
