use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Human,
    Engine,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// One of the two players, also the perspective a score is computed from
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Human,
    Engine,
}

impl Side {
    pub fn disc(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Engine => Cell::Engine,
        }
    }
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Engine,
            Side::Engine => Side::Human,
        }
    }
}

/// The playing grid
///
/// A plain value type: hypothetical positions in the search are made by
/// copying a board and dropping into the copy. Discs in a column are
/// always contiguous from the bottom, the only mutator places at the
/// lowest open row.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Rebuilds a board from a recorded move list of 1-indexed column
    /// digits, alternating sides starting with the human
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut side = Side::Human;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.drop_disc(column - 1, side)?;
                    side = side.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `column` and `row`, row 0 being the bottom row
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// True iff the column exists and its top cell is still empty
    pub fn is_legal(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// The lowest empty row of a column, `None` when the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if self.heights[column] < HEIGHT {
            Some(self.heights[column])
        } else {
            None
        }
    }

    /// All playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_legal(c)).collect()
    }

    /// Drops a disc for `side` into `column`, returning the row it
    /// landed on
    ///
    /// Fails without touching the board when the column is out of range
    /// or full.
    pub fn drop_disc(&mut self, column: usize, side: Side) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        let row = self
            .next_open_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column))?;

        self.cells[column + WIDTH * row] = side.disc();
        self.heights[column] += 1;
        Ok(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                f.write_str(match self.get(column, row) {
                    Cell::Human => "X",
                    Cell::Engine => "O",
                    Cell::Empty => ".",
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
