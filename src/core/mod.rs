//! Core engine types: players, positions, phases, moves, RNG, configuration.
//!
//! These are the vocabulary shared by the board, the rules, the turn
//! sequencer and the AI.

pub mod action;
pub mod config;
pub mod phase;
pub mod player;
pub mod position;
pub mod rng;

pub use action::Move;
pub use config::GameConfig;
pub use phase::GamePhase;
pub use player::{Player, PlayerMap, StoneCounts};
pub use position::Position;
pub use rng::GameRng;
