//! Board representation.
//!
//! - `Pos`: a (row, col) coordinate
//! - `Cell`: empty, a player's stone, or blocked
//! - `Board`: the square grid and its primitives
//!
//! The board holds no rule knowledge. Win detection, turn order and skills
//! are layered on top.

mod pos;
mod grid;

pub use pos::Pos;
pub use grid::{Board, Cell};
