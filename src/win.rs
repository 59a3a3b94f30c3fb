//! Four-in-a-row detection

use crate::board::{Board, Piece};

/// Returns true if `piece` fills any window on the board
pub fn check_win(board: &Board, piece: Piece) -> bool {
    let cell = piece.cell();
    board
        .windows()
        .any(|window| window.cells(board).all(|c| c == cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize)], piece: Piece) -> Board {
        let mut board = Board::new();
        for &(row, column) in cells {
            board.drop_piece(row, column, piece);
        }
        board
    }

    #[test]
    fn empty_board_has_no_win() {
        let board = Board::new();
        assert!(!check_win(&board, Piece::Player));
        assert!(!check_win(&board, Piece::Ai));
    }

    #[test]
    fn horizontal_win() {
        let board = board_with(&[(5, 3), (5, 4), (5, 5), (5, 6)], Piece::Ai);
        assert!(check_win(&board, Piece::Ai));
        assert!(!check_win(&board, Piece::Player));
    }

    #[test]
    fn vertical_win() {
        let board = board_with(&[(0, 6), (1, 6), (2, 6), (3, 6)], Piece::Player);
        assert!(check_win(&board, Piece::Player));
    }

    #[test]
    fn downward_diagonal_win() {
        let board = board_with(&[(2, 3), (3, 4), (4, 5), (5, 6)], Piece::Ai);
        assert!(check_win(&board, Piece::Ai));
    }

    #[test]
    fn upward_diagonal_win() {
        let board = board_with(&[(5, 0), (4, 1), (3, 2), (2, 3)], Piece::Player);
        assert!(check_win(&board, Piece::Player));
    }

    #[test]
    fn three_is_not_a_win() {
        let board = board_with(&[(5, 0), (5, 1), (5, 2), (4, 4), (3, 5), (2, 6)], Piece::Ai);
        assert!(!check_win(&board, Piece::Ai));
    }

    #[test]
    fn broken_line_is_not_a_win() {
        let mut board = board_with(&[(5, 0), (5, 1), (5, 3), (5, 4)], Piece::Ai);
        board.drop_piece(5, 2, Piece::Player);
        assert!(!check_win(&board, Piece::Ai));
        assert!(!check_win(&board, Piece::Player));
    }

    #[test]
    fn window_length_follows_board() {
        let mut board = Board::with_dimensions(4, 4, 3);
        board.drop_piece(3, 0, Piece::Ai);
        board.drop_piece(3, 1, Piece::Ai);
        assert!(!check_win(&board, Piece::Ai));
        board.drop_piece(3, 2, Piece::Ai);
        assert!(check_win(&board, Piece::Ai));
    }
}
