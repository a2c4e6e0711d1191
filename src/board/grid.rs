//! The board grid.
//!
//! `Board` owns the cells and exposes placement, removal and query
//! primitives. It has no notion of turns, wins or skills: rule code lives in
//! `rules` and `skills` and mutates the board only through these methods.

use serde::{Deserialize, Serialize};

use super::Pos;
use crate::core::PlayerId;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// A stone owned by a player.
    Stone(PlayerId),
    /// Sealed off by the Block skill. Not a stone, but nothing can be placed.
    Blocked,
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the stone in this cell, if any.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Stone(owner) => Some(owner),
            Cell::Empty | Cell::Blocked => None,
        }
    }
}

/// Square grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Standard board side length.
    pub const DEFAULT_SIZE: usize = 15;

    /// Largest side length a configuration may ask for.
    pub const MAX_SIZE: usize = 255;

    /// Create an empty `size` × `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Place a stone. Returns `false` without side effects if the cell is out
    /// of range or not empty.
    pub fn place_piece(&mut self, pos: Pos, owner: PlayerId) -> bool {
        match self.index(pos) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = Cell::Stone(owner);
                true
            }
            _ => false,
        }
    }

    /// Contents of a cell, `None` when out of range.
    #[must_use]
    pub fn get_cell(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Owner of the stone at `pos`, if any.
    #[must_use]
    pub fn owner_at(&self, pos: Pos) -> Option<PlayerId> {
        self.get_cell(pos).and_then(Cell::owner)
    }

    /// Clear a cell unconditionally. Out of range is a no-op.
    pub fn remove_piece(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Seal an empty cell. Returns `false` if out of range or not empty.
    pub fn block(&mut self, pos: Pos) -> bool {
        match self.index(pos) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = Cell::Blocked;
                true
            }
            _ => false,
        }
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of stones owned by `owner`.
    #[must_use]
    pub fn count_stones(&self, owner: PlayerId) -> usize {
        self.cells.iter().filter(|c| c.owner() == Some(owner)).count()
    }

    /// Positions holding a stone of either owner, row-major.
    #[must_use]
    pub fn occupied(&self) -> Vec<Pos> {
        self.positions()
            .filter(|&pos| self.owner_at(pos).is_some())
            .collect()
    }

    /// The stone of `owner` found first when scanning from the last row to
    /// the first and, within a row, from the last column to the first.
    ///
    /// No move history is kept; this scan stands in for "most recent stone".
    #[must_use]
    pub fn last_stone_of(&self, owner: PlayerId) -> Option<Pos> {
        self.cells
            .iter()
            .rposition(|c| c.owner() == Some(owner))
            .map(|idx| Pos::new(idx / self.size, idx % self.size))
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::new(idx / size, idx % size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
