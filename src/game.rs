//! Live game session shared by the human input layer and the engine

use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use crate::board::{Board, Cell, Side};
use crate::rules;
use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    HumanWin,
    EngineWin,
    Draw,
}

/// One game in progress: the board plus whose turn it is, the move log
/// and the current outcome
pub struct Game {
    pub board: Board,
    pub to_move: Side,
    pub moves: String,
    pub state: Outcome,
}

impl Game {
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            moves: String::new(),
            state: Outcome::Playing,
        }
    }

    /// Plays a move for the side to move, both human and engine moves
    /// go through here
    ///
    /// Rejects out-of-range and full columns without changing anything,
    /// the caller just asks for another input. Columns are 1-indexed as
    /// typed by the player.
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Outcome> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_legal(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        let side = self.to_move;
        self.board.drop_disc(column, side)?;
        self.moves.push_str(&column_one_indexed.to_string());
        self.to_move = side.other();

        self.state = if rules::has_four_in_a_row(&self.board, side) {
            match side {
                Side::Human => Outcome::HumanWin,
                Side::Engine => Outcome::EngineWin,
            }
        } else if self.board.legal_columns().is_empty() {
            Outcome::Draw
        } else {
            Outcome::Playing
        };

        Ok(self.state)
    }

    /// Draws the board in place with crossterm
    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.get(column, row) {
                                Cell::Human => Color::Red,
                                Cell::Engine => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_input() {
        let mut game = Game::new(Side::Human);
        assert!(game.play_checked(0).is_err());
        assert!(game.play_checked(WIDTH + 1).is_err());
        assert_eq!(game.state, Outcome::Playing);
        assert_eq!(game.to_move, Side::Human);
        assert!(game.moves.is_empty());
    }

    #[test]
    fn rejects_a_full_column_without_flipping_the_turn() {
        let mut game = Game::new(Side::Human);
        for _ in 0..HEIGHT {
            game.play_checked(1).unwrap();
        }
        let side_before = game.to_move;
        assert!(game.play_checked(1).is_err());
        assert_eq!(game.to_move, side_before);
    }

    #[test]
    fn alternates_sides_and_logs_moves() {
        let mut game = Game::new(Side::Human);
        game.play_checked(4).unwrap();
        assert_eq!(game.to_move, Side::Engine);
        game.play_checked(5).unwrap();
        assert_eq!(game.to_move, Side::Human);
        assert_eq!(game.moves, "45");
        assert_eq!(game.board, Board::from_moves("45").unwrap());
    }

    #[test]
    fn reports_a_win() {
        let mut game = Game::new(Side::Human);
        // human stacks column 1, engine column 2
        for _ in 0..3 {
            game.play_checked(1).unwrap();
            game.play_checked(2).unwrap();
        }
        assert_eq!(game.play_checked(1).unwrap(), Outcome::HumanWin);
    }

    #[test]
    fn reports_a_draw_on_a_full_board() {
        let mut game = Game::new(Side::Human);
        // a filling order that never lines up four of a kind: pairs of
        // columns swap ownership every two rows
        for &column_one_indexed in &[
            1, 2, 3, 4, 5, 6, 7, //
            1, 2, 3, 4, 5, 6, 7, //
            2, 1, 4, 3, 6, 5, 7, //
            2, 1, 4, 3, 6, 5, 7, //
            1, 2, 3, 4, 5, 6, 7, //
            1, 2, 3, 4, 5, 6, 7,
        ] {
            assert_eq!(game.state, Outcome::Playing);
            game.play_checked(column_one_indexed).unwrap();
        }
        assert_eq!(game.state, Outcome::Draw);
        assert!(game.board.legal_columns().is_empty());
    }
}
