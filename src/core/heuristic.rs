//! Bot move selection - a fixed-priority cascade
//!
//! Greedy one-ply lookahead, not search: take a win, deny the opponent's win,
//! then prefer center, corners, sides. It can lose to an optimal adversary in
//! rare double-threat positions; that is an accepted limitation.

use crate::core::{rules, Board};
use crate::types::Player;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const SIDES: [usize; 4] = [1, 3, 5, 7];

/// Pick a cell for `me` to mark. Returns None only when the board is full.
///
/// Each tier scans empty cells in ascending index order and the first
/// qualifying cell short-circuits the remaining tiers.
pub fn choose_move(board: &Board, me: Player, opponent: Player) -> Option<usize> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    // 1) Win now.
    if let Some(&idx) = empty
        .iter()
        .find(|&&idx| rules::completes_line(board, idx, me))
    {
        return Some(idx);
    }

    // 2) Block the opponent's winning move.
    if let Some(&idx) = empty
        .iter()
        .find(|&&idx| rules::completes_line(board, idx, opponent))
    {
        return Some(idx);
    }

    // 3) Take the center.
    if board.is_free(CENTER) {
        return Some(CENTER);
    }

    // 4) Take the lowest free corner.
    if let Some(&idx) = CORNERS.iter().find(|&&idx| board.is_free(idx)) {
        return Some(idx);
    }

    // 5) Take the lowest free side, falling back to any free cell.
    if let Some(&idx) = SIDES.iter().find(|&&idx| board.is_free(idx)) {
        return Some(idx);
    }
    empty.first().copied()
}
