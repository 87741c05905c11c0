//! Static evaluation of non-terminal positions
//!
//! The score is a threat-counting proxy used only when the search runs
//! out of depth on an unfinished game: every 4-cell window on the board
//! is scored independently, plus a small bonus for discs in the centre
//! column. Finished games never reach this code, the search returns its
//! win/loss sentinels for those instead.

use crate::board::{Board, Cell, Side};
use crate::{CONNECT, HEIGHT, WIDTH};

/// Scores a single 4-cell window for `side`
///
/// 100 for a completed run, 5 for three discs with one gap, 2 for two
/// discs with two gaps, and -4 when the opposing side is one disc away
/// from completing the window.
pub fn score_window(window: [Cell; CONNECT], side: Side) -> i64 {
    let own = window.iter().filter(|&&c| c == side.disc()).count();
    let opp = window.iter().filter(|&&c| c == side.other().disc()).count();
    let empty = window.iter().filter(|c| c.is_empty()).count();

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Scores a whole board from `side`'s perspective
pub fn evaluate(board: &Board, side: Side) -> i64 {
    let mut score = 0;

    // centre column bonus, controlling the middle opens the most windows
    let centre = WIDTH / 2;
    for row in 0..HEIGHT {
        if board.get(centre, row) == side.disc() {
            score += 3;
        }
    }

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            let window = [
                board.get(column, row),
                board.get(column + 1, row),
                board.get(column + 2, row),
                board.get(column + 3, row),
            ];
            score += score_window(window, side);
        }
    }

    // vertical windows
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            let window = [
                board.get(column, row),
                board.get(column, row + 1),
                board.get(column, row + 2),
                board.get(column, row + 3),
            ];
            score += score_window(window, side);
        }
    }

    // ascending diagonal windows /
    for column in 0..=WIDTH - CONNECT {
        for row in 0..=HEIGHT - CONNECT {
            let window = [
                board.get(column, row),
                board.get(column + 1, row + 1),
                board.get(column + 2, row + 2),
                board.get(column + 3, row + 3),
            ];
            score += score_window(window, side);
        }
    }

    // descending diagonal windows \
    for column in 0..=WIDTH - CONNECT {
        for row in 0..=HEIGHT - CONNECT {
            let window = [
                board.get(column, row + 3),
                board.get(column + 1, row + 2),
                board.get(column + 2, row + 1),
                board.get(column + 3, row),
            ];
            score += score_window(window, side);
        }
    }

    score
}
