//! AI configuration.

use serde::{Deserialize, Serialize};

/// How hard the computer opponent plays.
///
/// Parses case-insensitively from the variant name (`"hard"`, `"Medium"`).
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
    derive_more::FromStr,
    derive_more::Display,
)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Completes and blocks mills, otherwise random.
    #[default]
    Medium,
    /// Medium plus strategic placement and mobility.
    Hard,
}

/// AI parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Strength tier.
    pub difficulty: Difficulty,

    /// Random seed for tie-breaking and random tiers.
    /// Same seed produces the same choices from the same position.
    pub seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 42,
        }
    }
}

impl AiConfig {
    /// Set the difficulty tier.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_builder() {
        let config = AiConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_seed(7);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = AiConfig::default().with_difficulty(Difficulty::Easy);
        let json = serde_json::to_string(&config).unwrap();
        let back: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
