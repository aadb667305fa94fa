//! # morris-engine
//!
//! A Nine Men's Morris rules engine with a tiered computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Click-Driven**: The engine consumes raw position clicks and a
//!    restart request, exactly what a board UI produces. Humans and the AI
//!    use the same command surface.
//!
//! 2. **Reject, Don't Fail**: Illegal input is a silent no-op reported as
//!    `ClickOutcome::Ignored`. The engine never enters an undefined state,
//!    whatever the click sequence.
//!
//! 3. **Pure Rules**: Mill detection, capture protection, loss detection and
//!    AI move choice read a board snapshot and never mutate it.
//!
//! ## Architecture
//!
//! - **Event Queue**: Every observable change is queued as a `GameEvent`
//!   and drained by the caller after each command. `GameObserver` offers a
//!   callback view over the same events.
//!
//! - **Per-Player Flying**: Placement and Movement are global; Flying is
//!   tracked for each player separately.
//!
//! ## Modules
//!
//! - `core`: Players, positions, phases, moves, RNG, configuration
//! - `board`: Adjacency, mill lines, stone occupancy
//! - `rules`: Mill detection, capture protection, loss detection
//! - `engine`: The click-driven state machine and its events
//! - `ai`: Move generation and difficulty tiers

pub mod core;
pub mod board;
pub mod rules;
pub mod engine;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GamePhase, GameRng, Move, Player, PlayerMap, Position, StoneCounts,
};

pub use crate::board::Board;

pub use crate::rules::{GameResult, LossReason};

pub use crate::engine::{ClickOutcome, GameEvent, GameObserver, GameStateMachine, TurnState};

pub use crate::ai::{AiConfig, AiPlayer, Difficulty, MoveStrategy};
