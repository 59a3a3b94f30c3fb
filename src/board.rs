//! The game grid and the moves that can be played on it

use crate::error::MoveError;
use crate::win::check_win;
use crate::{COLUMNS, ROWS, WINDOW_LENGTH};

/// A marker owned by one of the two sides
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    /// The other side's piece
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Ai => Cell::Ai,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A grid of cells with row 0 at the top
///
/// Pieces only enter the grid by dropping into a column, so within any
/// column the occupied cells are contiguous from the bottom row upwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    window_length: usize,
    // cells are stored row by row, top to bottom
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the default size
    pub fn new() -> Self {
        Self::with_dimensions(ROWS, COLUMNS, WINDOW_LENGTH)
    }

    /// Creates an empty board with `window_length` pieces in a row needed to win
    pub fn with_dimensions(rows: usize, columns: usize, window_length: usize) -> Self {
        debug_assert!(
            rows >= 1 && columns >= 1 && window_length >= 1,
            "board needs at least one row, one column and a window of one cell"
        );
        Self {
            rows,
            columns,
            window_length,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Builds a default-sized position from a string of 1-indexed column digits
    ///
    /// Moves alternate between the two sides, starting with [`Piece::Player`].
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, MoveError> {
        let mut board = Self::new();
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    // nothing can be played once a side has connected
                    if check_win(&board, Piece::Player) || check_win(&board, Piece::Ai) {
                        return Err(MoveError::GameOver);
                    }
                    board.play(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => {
                    return Err(MoveError::InvalidCharacter {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    /// A column can be played if it exists and its top cell is empty
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < self.columns && self.get(0, column).is_empty()
    }

    /// All playable columns in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        self.open_moves().map(|(column, _row)| column).collect()
    }

    /// (column, landing row) of every playable column in ascending column order
    pub fn open_moves(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.columns).filter_map(move |column| {
            if self.is_valid_column(column) {
                self.next_open_row(column).map(|row| (column, row))
            } else {
                None
            }
        })
    }

    /// The lowest empty row of `column`, or `None` if nothing can land there
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, column).is_empty())
    }

    /// Places `piece` at an empty cell
    ///
    /// The row must come from [`Board::next_open_row`] for the column to keep
    /// its pieces stacked from the bottom.
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        let index = row * self.columns + column;
        debug_assert!(self.cells[index].is_empty(), "cell ({}, {}) is occupied", row, column);
        self.cells[index] = piece.cell();
    }

    /// Drops `piece` into `column`, returning the row it landed on
    pub fn play(&mut self, column: usize, piece: Piece) -> Result<usize, MoveError> {
        if column >= self.columns {
            return Err(MoveError::OutOfRange {
                column,
                columns: self.columns,
            });
        }
        let row = self
            .next_open_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        self.drop_piece(row, column, piece);
        Ok(row)
    }

    /// True once every column's top cell is taken
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| !self.get(0, column).is_empty())
    }

    /// Either side has connected or no more moves can be played
    pub fn is_terminal(&self) -> bool {
        check_win(self, Piece::Player) || check_win(self, Piece::Ai) || self.is_full()
    }

    /// Number of `piece`'s cells in `column`
    pub fn count_in_column(&self, column: usize, piece: Piece) -> usize {
        (0..self.rows)
            .filter(|&row| self.get(row, column) == piece.cell())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a new empty board of the default size
pub fn create_board() -> Board {
    Board::new()
}

pub fn is_valid_column(board: &Board, column: usize) -> bool {
    board.is_valid_column(column)
}

pub fn next_open_row(board: &Board, column: usize) -> Option<usize> {
    board.next_open_row(column)
}

pub fn drop_piece(board: &mut Board, row: usize, column: usize, piece: Piece) {
    board.drop_piece(row, column, piece)
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}
