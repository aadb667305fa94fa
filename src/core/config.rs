//! Game configuration.
//!
//! The defaults are the standard Nine Men's Morris rules: nine stones per
//! player, flying once a player is down to three stones, player one starts.
//! Restart always reinitialises from the configuration held by the engine.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Rule parameters for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stones each player starts with in hand.
    pub stones_per_player: u8,

    /// A player whose on-board count falls to this value (or below) after
    /// one of their own moves flies from then on.
    pub flying_threshold: u8,

    /// Whether the flying rule applies at all.
    pub flying_enabled: bool,

    /// Who acts first after a (re)start.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_player: 9,
            flying_threshold: 3,
            flying_enabled: true,
            first_player: Player::One,
        }
    }
}

impl GameConfig {
    /// Set the number of stones per player.
    #[must_use]
    pub fn with_stones_per_player(mut self, stones: u8) -> Self {
        self.stones_per_player = stones;
        self
    }

    /// Set the flying threshold.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u8) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Enable or disable flying.
    #[must_use]
    pub fn with_flying(mut self, enabled: bool) -> Self {
        self.flying_enabled = enabled;
        self
    }

    /// Set the starting player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Panic if the parameters cannot describe a playable game.
    ///
    /// The `with_*` setters do not call this; the engine does, on the
    /// finished config.
    pub fn assert_valid(&self) {
        assert!(
            (4..=12).contains(&self.stones_per_player),
            "stones_per_player must be 4-12"
        );
        assert!(
            self.flying_threshold >= 3 && self.flying_threshold < self.stones_per_player,
            "flying_threshold must be at least 3 and below stones_per_player"
        );
    }
}
