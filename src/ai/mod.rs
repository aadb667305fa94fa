//! Computer opponent.
//!
//! - `candidates`: legal move generation shared by every tier
//! - `strategy`: `MoveStrategy` policies and the per-difficulty dispatch
//! - `player`: `AiPlayer`, which turns decisions into clicks
//! - `config`: `Difficulty` and `AiConfig`
//!
//! Selection is synchronous and deterministic for a given seed.

pub mod candidates;
pub mod config;
pub mod player;
pub mod strategy;

pub use candidates::candidates;
pub use config::{AiConfig, Difficulty};
pub use player::{AiPlayer, Clicks};
pub use strategy::{
    select_capture, select_move, HeuristicStrategy, MoveStrategy, RandomStrategy,
    STRATEGIC_POSITIONS,
};
