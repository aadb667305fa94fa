//! Computer-controlled seat.
//!
//! `AiPlayer` turns a strategy decision into the clicks a human would make,
//! so the engine cannot tell the two apart. Timing (a "thinking" delay) is
//! left to whoever feeds the clicks back.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameRng, Player, Position};
use crate::engine::GameStateMachine;

use super::config::AiConfig;
use super::strategy::{select_capture, select_move};

/// Clicks for one decision; never more than three.
pub type Clicks = SmallVec<[Position; 3]>;

/// An AI opponent bound to one side.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    side: Player,
    config: AiConfig,
    rng: GameRng,
}

impl AiPlayer {
    /// Create an AI for `side`, seeding its RNG from the config.
    #[must_use]
    pub fn new(side: Player, config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed).fork(&side.to_string());
        Self { side, config, rng }
    }

    #[must_use]
    pub fn side(&self) -> Player {
        self.side
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// The clicks that carry out this AI's next action.
    ///
    /// Empty when it is not this side's turn, the game is over, or there is
    /// no legal action. A stale selection is released first.
    pub fn plan(&mut self, game: &GameStateMachine) -> Clicks {
        let mut clicks = Clicks::new();
        if game.is_game_over() || game.current_player() != self.side {
            return clicks;
        }

        let board = game.board();
        let difficulty = self.config.difficulty;

        if game.removal_pending() {
            if let Some(pos) = select_capture(board, self.side, difficulty, &mut self.rng) {
                debug!(side = %self.side, %pos, "AI captures");
                clicks.push(pos);
            }
            return clicks;
        }

        let Some(m) = select_move(board, game.current_phase(), self.side, difficulty, &mut self.rng)
        else {
            return clicks;
        };
        debug!(side = %self.side, %m, %difficulty, "AI moves");

        match (game.selected(), m.origin()) {
            // Already holding the right stone
            (Some(held), Some(from)) if held == from => clicks.push(m.destination()),
            (Some(held), _) => {
                clicks.push(held);
                clicks.extend(m.clicks());
            }
            (None, _) => clicks.extend(m.clicks()),
        }
        clicks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::engine::ClickOutcome;

    #[test]
    fn test_waits_for_its_turn() {
        let game = GameStateMachine::default();
        let mut ai = AiPlayer::new(Player::Two, AiConfig::default());

        assert!(ai.plan(&game).is_empty());
    }

    #[test]
    fn test_placement_is_one_click() {
        let mut game = GameStateMachine::default();
        let mut ai = AiPlayer::new(Player::One, AiConfig::default());

        let clicks = ai.plan(&game);
        assert_eq!(clicks.len(), 1);
        assert_eq!(game.on_position_clicked(clicks[0].index()), ClickOutcome::Placed);
    }

    #[test]
    fn test_releases_stale_selection() {
        let mut game = GameStateMachine::default();
        // Fill the hands with a sequence that forms no mill.
        for pos in [4, 18, 2, 8, 3, 15, 14, 22, 12, 16, 19, 1, 7, 0, 6, 9, 10, 5] {
            assert!(!game.on_position_clicked(pos).is_ignored(), "click {pos}");
        }
        assert!(!game.current_phase().is_placement());

        let side = game.current_player();
        let own: Vec<Position> = game.board().positions_owned_by(side).collect();
        // Hold a stone, then let the AI act.
        let held = own
            .iter()
            .copied()
            .find(|&p| game.valid_destinations(p).is_empty())
            .unwrap_or(own[0]);
        game.on_position_clicked(held.index());

        let mut ai = AiPlayer::new(side, AiConfig::default().with_difficulty(Difficulty::Easy));
        let clicks = ai.plan(&game);
        assert!(!clicks.is_empty());
        let mut last = ClickOutcome::Ignored;
        for pos in clicks {
            last = game.on_position_clicked(pos.index());
            assert!(!last.is_ignored());
        }
        assert_eq!(last, ClickOutcome::Moved);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let game = GameStateMachine::default();
        let mut a = AiPlayer::new(Player::One, AiConfig::default().with_seed(5));
        let mut b = AiPlayer::new(Player::One, AiConfig::default().with_seed(5));

        assert_eq!(a.plan(&game), b.plan(&game));
    }
}
