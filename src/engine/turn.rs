//! Turn bookkeeping owned by the state machine.

use serde::{Deserialize, Serialize};

use crate::core::{GamePhase, Player, PlayerMap, Position};
use crate::rules::GameResult;

/// Whose turn it is and what they are in the middle of.
///
/// `global_phase` is either `Placement` or `Movement`; flying is tracked
/// per player on top of it, so the phase a player actually plays under is
/// [`TurnState::phase_of`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player to act.
    pub current_player: Player,

    /// Placement until both hands are empty, Movement afterwards.
    pub global_phase: GamePhase,

    /// Players who have entered Flying.
    pub flying: PlayerMap<bool>,

    /// The current player closed a mill and must capture.
    pub removal_pending: bool,

    /// Stone picked up for a move, awaiting its destination.
    pub selected: Option<Position>,

    /// Set once the game is over.
    pub result: Option<GameResult>,

    /// Completed turns since the start (starts at 0).
    pub turn_number: u32,
}

impl TurnState {
    /// Start-of-game turn state.
    #[must_use]
    pub fn new(first_player: Player) -> Self {
        Self {
            current_player: first_player,
            global_phase: GamePhase::Placement,
            flying: PlayerMap::with_value(false),
            removal_pending: false,
            selected: None,
            result: None,
            turn_number: 0,
        }
    }

    /// The phase `player` moves under.
    #[must_use]
    pub fn phase_of(&self, player: Player) -> GamePhase {
        match self.global_phase {
            GamePhase::Placement => GamePhase::Placement,
            _ if self.flying[player] => GamePhase::Flying,
            _ => GamePhase::Movement,
        }
    }

    /// Phase of the player to act.
    #[must_use]
    pub fn current_phase(&self) -> GamePhase {
        self.phase_of(self.current_player)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.map(|r| r.winner)
    }
}
