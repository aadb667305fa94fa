//! Read-only rule checks over a `Board`.
//!
//! - `mill`: mill detection and the capture-protection rule
//! - `win`: loss detection and the game result
//!
//! Nothing here mutates the board; the state machine owns every change.

pub mod mill;
pub mod win;

pub use mill::{
    can_capture, count_mills, forms_mill, is_in_mill, open_two_lines, removable_positions,
    would_form_mill,
};
pub use win::{has_legal_move, has_lost, loss_reason, GameResult, LossReason};
