//! Board module - manages the 3x3 grid
//!
//! The board is a flat array of 9 cells in row-major order (index = row * 3 + col).
//! Each cell is empty or holds a player's mark. The board is pure data: outcome
//! classification lives in [`crate::core::rules`].

use arrayvec::ArrayVec;

use crate::types::{Cell, Player, BOARD_CELLS};

/// The game board - 9 cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get cell at index. Returns None if out of bounds.
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Set cell at index. Returns false if out of bounds.
    pub fn set(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is within bounds and unmarked
    pub fn is_free(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(None))
    }

    /// Check if a cell is within bounds and marked
    pub fn is_marked(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(Some(_)))
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indices of all empty cells, in ascending order (zero-allocation)
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Place marks at the given indices, alternating X first.
    ///
    /// Test/bench convenience for scripting positions without a session.
    pub fn with_moves(moves: &[usize]) -> Self {
        let mut board = Self::new();
        let mut player = Player::X;
        for &idx in moves {
            board.set(idx, Some(player));
            player = player.other();
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
