//! Turn-state machine.
//!
//! `Game` is the aggregate root: it owns the board and both players and is
//! the only place where turn order, terminal state and modifiers change.

mod modifiers;
mod state;

pub use modifiers::{ExtraTurnsWindow, Modifiers};
pub use state::{Game, MoveOutcome, Settings};
