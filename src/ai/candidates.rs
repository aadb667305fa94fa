//! Legal move generation for the AI.
//!
//! Uses the same predicates the state machine checks, so every candidate
//! is a move the engine accepts.

use crate::board::Board;
use crate::core::{GamePhase, Move, Player};

/// Every legal move for `me` under `phase`, in board order.
#[must_use]
pub fn candidates(board: &Board, phase: GamePhase, me: Player) -> Vec<Move> {
    match phase {
        GamePhase::Placement => board.empty_positions().map(Move::Place).collect(),
        GamePhase::Movement => board
            .positions_owned_by(me)
            .flat_map(move |from| {
                board
                    .neighbors(from)
                    .into_iter()
                    .filter(move |&to| board.can_step_move(from, to))
                    .map(move |to| Move::Shift { from, to })
            })
            .collect(),
        GamePhase::Flying => board
            .positions_owned_by(me)
            .flat_map(move |from| {
                board
                    .empty_positions()
                    .map(move |to| Move::Shift { from, to })
            })
            .collect(),
    }
}
