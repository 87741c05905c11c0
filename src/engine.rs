//! Depth-limited minimax move selection with alpha-beta pruning

use anyhow::{anyhow, bail, Result};

use crate::board::{Board, Side};
use crate::heuristic::evaluate;
use crate::rules::{has_four_in_a_row, is_terminal};

/// Sentinel score for a decided game, far above any heuristic sum
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Plies searched by the live opponent
pub const SEARCH_DEPTH: u32 = 6;

/// One node of the game tree search
///
/// Returns the backed-up score of `board` and the column the side to
/// move should play, `None` when the node is a leaf (depth exhausted or
/// game over). Scores are always from the engine's perspective,
/// `maximizing` is true on the engine's turns. Sibling columns are
/// visited in ascending order and only a strictly better score replaces
/// the current best, so of equal-scoring moves the leftmost is kept.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
) -> (Option<usize>, i64) {
    let legal = board.legal_columns();

    if depth == 0 || is_terminal(board) {
        return if has_four_in_a_row(board, Side::Engine) {
            (None, WIN_SCORE)
        } else if has_four_in_a_row(board, Side::Human) {
            (None, -WIN_SCORE)
        } else if legal.is_empty() {
            // drawn, nothing left to play
            (None, 0)
        } else {
            (None, evaluate(board, Side::Engine))
        };
    }

    let side = if maximizing { Side::Engine } else { Side::Human };
    // fallback in case no column ever improves on the starting score
    let mut best_column = legal[0];
    let mut best_score = if maximizing { i64::MIN } else { i64::MAX };

    for &column in &legal {
        let mut child = *board;
        child
            .drop_disc(column, side)
            .expect("legal column rejected a drop");

        let (_, score) = minimax(&child, depth - 1, alpha, beta, !maximizing);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_column = column;
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_column = column;
            }
            beta = beta.min(best_score);
        }
        // no sibling can change what the parent picks
        if alpha >= beta {
            break;
        }
    }

    (Some(best_column), best_score)
}

/// The automated opponent
///
/// Wraps the tree search behind the one call the surrounding
/// application needs: "it is your turn, pick a column".
#[derive(Copy, Clone, Debug)]
pub struct Engine {
    depth: u32,
}

impl Engine {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Picks the column the engine plays on `board`
    ///
    /// The caller must have checked the game is still running, calling
    /// this on a finished board is a driver bug and returns an error.
    pub fn select_move(&self, board: &Board) -> Result<usize> {
        if board.legal_columns().is_empty() {
            bail!("select_move called with no legal columns, game is already over");
        }
        let (column, _score) = minimax(board, self.depth, i64::MIN, i64::MAX, true);
        column.ok_or_else(|| anyhow!("select_move called on a decided game"))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_at_depth_one_gives_a_legal_column() {
        let board = Board::new();
        let column = Engine::new(1).select_move(&board).unwrap();
        assert!(board.is_legal(column));
        // every depth-1 leaf is heuristic-only here, the centre drop
        // scores highest so it should be picked
        assert_eq!(column, crate::WIDTH / 2);
    }

    #[test]
    fn takes_an_immediate_win() {
        // engine discs at the bottom of columns 0..3
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_disc(column, Side::Engine).unwrap();
            board.drop_disc(column, Side::Human).unwrap();
        }
        let column = Engine::default().select_move(&board).unwrap();
        assert_eq!(column, 3);
    }

    #[test]
    fn blocks_an_immediate_loss() {
        // human discs at the bottom of columns 0..3, column 3 open
        let mut board = Board::new();
        board.drop_disc(0, Side::Human).unwrap();
        board.drop_disc(6, Side::Engine).unwrap();
        board.drop_disc(1, Side::Human).unwrap();
        board.drop_disc(6, Side::Engine).unwrap();
        board.drop_disc(2, Side::Human).unwrap();

        let column = Engine::default().select_move(&board).unwrap();
        assert_eq!(column, 3);
    }

    #[test]
    fn prefers_its_own_win_over_a_block() {
        // both sides threaten column 3: engine on the bottom row, human
        // on the row above
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_disc(column, Side::Engine).unwrap();
            board.drop_disc(column, Side::Human).unwrap();
        }
        let column = Engine::default().select_move(&board).unwrap();
        assert_eq!(column, 3);
    }

    #[test]
    fn refuses_a_full_board() {
        let mut board = Board::new();
        for column in 0..crate::WIDTH {
            for _ in 0..crate::HEIGHT {
                board.drop_disc(column, Side::Human).unwrap();
            }
        }
        assert!(Engine::default().select_move(&board).is_err());
    }
}
