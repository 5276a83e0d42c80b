use super::Player;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Player1,
    Player2,
}

/// Rectangular grid of cells. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

impl Board {
    /// Create a blank board of the given size
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::Empty);
        }
        Ok(Board {
            cells: vec![vec![Cell::Blank; width]; height],
            width,
        })
    }

    /// The standard 6x7 board
    pub fn standard() -> Self {
        Board {
            cells: vec![vec![Cell::Blank; COLS]; ROWS],
            width: COLS,
        }
    }

    /// Build a board from known contents, rejecting empty or ragged grids.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let width = rows.first().map(Vec::len).ok_or(BoardError::Empty)?;
        if width == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(BoardError::Ragged {
                row,
                expected: width,
                found,
            });
        }
        Ok(Board { cells: rows, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Lowest blank row in `col`, or `None` when the column is full.
    pub fn next_free_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        if col >= self.width {
            return Err(BoardError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        Ok((0..self.height())
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Blank))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Blank)
    }

    /// Put `player`'s marker at (row, col). The caller picks the row with
    /// [`Board::next_free_row`].
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(row < self.height() && col < self.width);
        debug_assert_eq!(self.cells[row][col], Cell::Blank);
        self.cells[row][col] = player.to_cell();
    }
}
