//! Turn sequencing and notifications.
//!
//! - `machine`: `GameStateMachine`, the click-driven rules engine
//! - `turn`: `TurnState`, whose turn it is and any pending selection/capture
//! - `events`: `GameEvent` queue entries and the `GameObserver` callbacks

pub mod events;
pub mod machine;
pub mod turn;

pub use events::{GameEvent, GameObserver};
pub use machine::{ClickOutcome, GameStateMachine};
pub use turn::TurnState;
