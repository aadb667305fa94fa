//! Loss detection.
//!
//! A player loses once Placement is over and they either hold fewer than
//! three stones or cannot make any legal move in their own phase.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GamePhase, Player};

/// Fewer than this many stones on the board loses the game.
pub const MIN_STONES: u8 = 3;

/// Why a player lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossReason {
    /// Fewer than three stones left on the board.
    TooFewStones,
    /// No legal move in the player's current phase.
    Blocked,
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: LossReason,
}

impl GameResult {
    /// The side that lost.
    #[must_use]
    pub const fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// Whether `player` has any legal move under `phase`.
///
/// - Placement: any empty position.
/// - Movement: some owned stone with an empty neighbour.
/// - Flying: at least one owned stone and one empty position.
#[must_use]
pub fn has_legal_move(board: &Board, player: Player, phase: GamePhase) -> bool {
    match phase {
        GamePhase::Placement => board.empty_positions().next().is_some(),
        GamePhase::Movement => board
            .positions_owned_by(player)
            .any(|pos| board.has_empty_neighbor(pos)),
        GamePhase::Flying => {
            board.positions_owned_by(player).next().is_some()
                && board.empty_positions().next().is_some()
        }
    }
}

/// Why `player` has lost, or `None` if they are still in the game.
///
/// Never reports a loss during Placement, when board counts naturally start
/// below three.
#[must_use]
pub fn loss_reason(
    board: &Board,
    player: Player,
    stones_on_board: u8,
    phase: GamePhase,
) -> Option<LossReason> {
    if phase.is_placement() {
        None
    } else if stones_on_board < MIN_STONES {
        Some(LossReason::TooFewStones)
    } else if !has_legal_move(board, player, phase) {
        Some(LossReason::Blocked)
    } else {
        None
    }
}

/// Whether `player` has lost.
#[must_use]
pub fn has_lost(board: &Board, player: Player, stones_on_board: u8, phase: GamePhase) -> bool {
    loss_reason(board, player, stones_on_board, phase).is_some()
}
