//! Game phases.

use serde::{Deserialize, Serialize};

/// The rule set that governs the acting player's next move.
///
/// `Placement` ends for both players at once, when both hands are empty.
/// `Flying` is per player: one side may fly while the other still steps.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum GamePhase {
    /// Stones are dropped from hand onto empty positions.
    #[default]
    Placement,
    /// Stones step to an adjacent empty position.
    Movement,
    /// Stones jump to any empty position.
    Flying,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Placement => "placement",
            GamePhase::Movement => "movement",
            GamePhase::Flying => "flying",
        };
        f.write_str(name)
    }
}
