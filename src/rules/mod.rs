//! Base win and draw rules.
//!
//! - `check_win`: five (or more) in a row through the last placed stone
//! - `check_draw`: board full
//! - `GameResult`: how a finished game ended
//!
//! Skills and turn modifiers never change these rules; they only change the
//! board the rules look at.

mod result;
mod win;

pub use result::GameResult;
pub use win::{check_draw, check_win, run_length, AXES};
