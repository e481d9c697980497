//! Rules module - outcome detection over the fixed winning lines
//!
//! The 8 winning lines are constant data, never derived at runtime. Detection
//! checks them in table order, so if a move completes two lines at once the
//! lower-indexed line is the one reported.

use crate::core::Board;
use crate::types::{Line, Outcome, Player};

/// The 8 winning lines: rows, columns, then diagonals
pub const WIN_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classify a board. Pure and total: every board maps to exactly one outcome.
pub fn detect(board: &Board) -> Outcome {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(Some(player)) = board.get(a) {
            if board.get(b) == Some(Some(player)) && board.get(c) == Some(Some(player)) {
                return Outcome::Win { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Would marking `idx` give `player` a completed line?
///
/// Probes a copy of the board; the input is untouched.
pub fn completes_line(board: &Board, idx: usize, player: Player) -> bool {
    if !board.is_free(idx) {
        return false;
    }
    let mut probe = *board;
    probe.set(idx, Some(player));
    detect(&probe).winner() == Some(player)
}
