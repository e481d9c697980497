//! Bot cascade tests against the public API

use tui_xo::core::{choose_move, Board, WIN_LINES};
use tui_xo::types::Player;

/// Board with `player` on two cells of a line and the third left open.
fn two_in_line(line: [usize; 3], open: usize, player: Player) -> Board {
    let mut board = Board::new();
    for idx in line {
        if idx != open {
            board.set(idx, Some(player));
        }
    }
    board
}

#[test]
fn test_completing_cell_chosen_for_every_line() {
    for line in WIN_LINES {
        for open in line {
            let board = two_in_line(line, open, Player::O);
            assert_eq!(
                choose_move(&board, Player::O, Player::X),
                Some(open),
                "line {:?} open at {}",
                line,
                open
            );
        }
    }
}

#[test]
fn test_blocking_cell_chosen_for_every_line() {
    for line in WIN_LINES {
        for open in line {
            // Only X threatens; O must deny the open cell.
            let board = two_in_line(line, open, Player::X);
            assert_eq!(
                choose_move(&board, Player::X.other(), Player::X),
                Some(open),
                "line {:?} open at {}",
                line,
                open
            );
        }
    }
}

#[test]
fn test_cascade_walkthrough() {
    let mut board = Board::new();

    // Empty board: center.
    assert_eq!(choose_move(&board, Player::O, Player::X), Some(4));

    // Center taken: lowest corner.
    board.set(4, Some(Player::X));
    assert_eq!(choose_move(&board, Player::O, Player::X), Some(0));

    // Corners filling up in ascending order.
    // X@4 O@0 holds no two-in-a-line for either side, so the cascade
    // falls through to the next free corner.
    board.set(0, Some(Player::O));
    assert_eq!(choose_move(&board, Player::O, Player::X), Some(2));
}

#[test]
fn test_none_only_when_board_full() {
    // X O X / O O X / X X O - a drawn board.
    let board = Board::with_moves(&[0, 1, 2, 3, 5, 4, 6, 8, 7]);
    assert!(board.is_full());
    assert_eq!(choose_move(&board, Player::O, Player::X), None);

    // One cell short of full still yields a move.
    let mut board = board;
    board.set(7, None);
    assert_eq!(choose_move(&board, Player::O, Player::X), Some(7));
}
