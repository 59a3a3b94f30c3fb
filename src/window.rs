//! Enumeration of the runs of cells that can hold a connection

use crate::board::{Board, Cell};

/// The four lines a connection can run along
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    /// left to right
    Horizontal,
    /// top to bottom
    Vertical,
    /// top-left to bottom-right
    DiagonalDown,
    /// bottom-left to top-right
    DiagonalUp,
}

pub static DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::DiagonalDown,
    Direction::DiagonalUp,
];

impl Direction {
    // (row, column) step between consecutive cells
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// `length` consecutive cells starting at (`row`, `column`)
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Window {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Window {
    pub fn cells<'a>(&self, board: &'a Board) -> impl Iterator<Item = Cell> + 'a {
        let (row_step, column_step) = self.direction.step();
        let (row, column) = (self.row as isize, self.column as isize);
        (0..self.length as isize).map(move |i| {
            board.get(
                (row + row_step * i) as usize,
                (column + column_step * i) as usize,
            )
        })
    }
}

impl Board {
    /// Every window on the board, each start position visited once per direction
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS
            .iter()
            .flat_map(move |&direction| self.windows_in(direction))
    }

    /// Every window running along `direction`
    pub fn windows_in(&self, direction: Direction) -> impl Iterator<Item = Window> {
        let length = self.window_length();
        let (rows, columns) = (self.rows(), self.columns());

        let row_starts = match direction {
            Direction::Horizontal => 0..rows,
            Direction::Vertical | Direction::DiagonalDown => 0..(rows + 1).saturating_sub(length),
            // upward windows start low enough to fit above them
            Direction::DiagonalUp if rows >= length => length - 1..rows,
            Direction::DiagonalUp => 0..0,
        };
        let column_starts = match direction {
            Direction::Vertical => columns,
            _ => (columns + 1).saturating_sub(length),
        };

        row_starts.flat_map(move |row| {
            (0..column_starts).map(move |column| Window {
                row,
                column,
                direction,
                length,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn window_counts_on_default_board() {
        let board = Board::new();
        let count = |direction| board.windows_in(direction).count();

        assert_eq!(count(Direction::Horizontal), 6 * 4);
        assert_eq!(count(Direction::Vertical), 3 * 7);
        assert_eq!(count(Direction::DiagonalDown), 3 * 4);
        assert_eq!(count(Direction::DiagonalUp), 3 * 4);
        assert_eq!(board.windows().count(), 69);
    }

    #[test]
    fn no_windows_when_too_short() {
        let board = Board::with_dimensions(2, 5, 3);
        assert_eq!(board.windows_in(Direction::Vertical).count(), 0);
        assert_eq!(board.windows_in(Direction::DiagonalUp).count(), 0);
        assert_eq!(board.windows_in(Direction::Horizontal).count(), 2 * 3);
    }

    #[test]
    fn upward_diagonal_cells() {
        let mut board = Board::new();
        board.drop_piece(5, 0, Piece::Player);
        board.drop_piece(2, 3, Piece::Ai);

        let window = Window {
            row: 5,
            column: 0,
            direction: Direction::DiagonalUp,
            length: 4,
        };
        let cells: Vec<Cell> = window.cells(&board).collect();
        assert_eq!(cells, vec![Cell::Player, Cell::Empty, Cell::Empty, Cell::Ai]);
    }
}
