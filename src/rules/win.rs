//! Line detection.
//!
//! A win is checked only around the stone just placed: for each of the four
//! axes, count that stone plus the contiguous same-owner stones extending in
//! both directions.

use crate::board::{Board, Pos};
use crate::core::PlayerId;

/// The four line axes, each as one direction; the opposite is implied.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Length of the same-owner run through `pos` along `(dr, dc)`.
///
/// Returns 0 if `pos` does not hold a stone of `owner`.
#[must_use]
pub fn run_length(board: &Board, pos: Pos, owner: PlayerId, (dr, dc): (isize, isize)) -> usize {
    if board.owner_at(pos) != Some(owner) {
        return 0;
    }

    let mut count = 1;
    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        let mut cursor = pos;
        while let Some(next) = cursor.offset(sr, sc, board.size()) {
            if board.owner_at(next) != Some(owner) {
                break;
            }
            count += 1;
            cursor = next;
        }
    }
    count
}

/// True if the stone at `pos` completes a line of at least `win_length`.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, owner: PlayerId, win_length: usize) -> bool {
    AXES
        .iter()
        .any(|&axis| run_length(board, pos, owner, axis) >= win_length)
}

/// True if no cell is left to play.
#[must_use]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}
