//! Win and end-of-game detection

use crate::board::{Board, Side};
use crate::{CONNECT, HEIGHT, WIDTH};

/// True iff `side` has four of its discs in a row anywhere on the board
///
/// All four orientations are scanned over the whole board rather than
/// just around the last move, so the query is valid for any board
/// regardless of how it was built.
pub fn has_four_in_a_row(board: &Board, side: Side) -> bool {
    let disc = side.disc();

    // horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            if (0..CONNECT).all(|i| board.get(column + i, row) == disc) {
                return true;
            }
        }
    }

    // vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            if (0..CONNECT).all(|i| board.get(column, row + i) == disc) {
                return true;
            }
        }
    }

    // ascending diagonal /
    for column in 0..=WIDTH - CONNECT {
        for row in 0..=HEIGHT - CONNECT {
            if (0..CONNECT).all(|i| board.get(column + i, row + i) == disc) {
                return true;
            }
        }
    }

    // descending diagonal \
    for column in 0..=WIDTH - CONNECT {
        for row in CONNECT - 1..HEIGHT {
            if (0..CONNECT).all(|i| board.get(column + i, row - i) == disc) {
                return true;
            }
        }
    }

    false
}

/// True iff the game is over: someone connected four or the board is full
pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Side::Human)
        || has_four_in_a_row(board, Side::Engine)
        || board.legal_columns().is_empty()
}
