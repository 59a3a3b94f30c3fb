//! Heuristic scoring of positions at the search horizon
//!
//! The score is always from one piece's point of view: the evaluator is not
//! zero-sum, so scoring the same board for the other piece is a separate call.

use crate::board::{Board, Cell, Piece};
use crate::search::Score;

/// Bonus per own piece in the center column
const CENTER_WEIGHT: Score = 3;

const WINDOW_FULL: Score = 100;
const WINDOW_ONE_SHORT: Score = 5;
const WINDOW_TWO_SHORT: Score = 2;
const OPPONENT_ONE_SHORT: Score = -4;

/// Scores one window of cells for `piece`
pub fn evaluate_window<I: IntoIterator<Item = Cell>>(cells: I, piece: Piece) -> Score {
    let (own_cell, opponent_cell) = (piece.cell(), piece.opponent().cell());
    let (mut own, mut opponent, mut empty, mut length) = (0, 0, 0, 0);
    for cell in cells {
        length += 1;
        if cell == own_cell {
            own += 1;
        } else if cell == opponent_cell {
            opponent += 1;
        } else {
            empty += 1;
        }
    }

    let mut score = 0;
    if own == length {
        score += WINDOW_FULL;
    } else if own + 1 == length && empty == 1 {
        score += WINDOW_ONE_SHORT;
    } else if own + 2 == length && empty == 2 {
        score += WINDOW_TWO_SHORT;
    }
    if opponent + 1 == length && empty == 1 {
        score += OPPONENT_ONE_SHORT;
    }
    score
}

/// Heuristic value of a non-terminal board for `piece`
pub fn score_position(board: &Board, piece: Piece) -> Score {
    let center = board.count_in_column(board.columns() / 2, piece) as Score * CENTER_WEIGHT;

    center
        + board
            .windows()
            .map(|window| evaluate_window(window.cells(board), piece))
            .sum::<Score>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell::{Ai as A, Empty as E, Player as P};

    #[test]
    fn window_classes() {
        assert_eq!(evaluate_window(vec![A, A, A, A], Piece::Ai), 100);
        assert_eq!(evaluate_window(vec![A, E, A, A], Piece::Ai), 5);
        assert_eq!(evaluate_window(vec![E, A, A, E], Piece::Ai), 2);
        assert_eq!(evaluate_window(vec![P, E, P, P], Piece::Ai), -4);
        assert_eq!(evaluate_window(vec![A, A, A, P], Piece::Ai), 0);
        assert_eq!(evaluate_window(vec![A, P, A, E], Piece::Ai), 0);
        assert_eq!(evaluate_window(vec![E, E, E, E], Piece::Ai), 0);
        assert_eq!(evaluate_window(vec![P, E, P, P], Piece::Player), 5);
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(score_position(&board, Piece::Ai), 0);
        assert_eq!(score_position(&board, Piece::Player), 0);
    }

    #[test]
    fn center_and_pairs() {
        let mut board = Board::new();
        board.drop_piece(5, 3, Piece::Ai);
        assert_eq!(score_position(&board, Piece::Ai), 3);

        // three bottom-row windows hold both pieces and two empty cells
        board.drop_piece(5, 4, Piece::Ai);
        assert_eq!(score_position(&board, Piece::Ai), 3 + 3 * 2);
        assert_eq!(score_position(&board, Piece::Player), 0);
    }

    #[test]
    fn scoring_is_directional() {
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(5, column, Piece::Player);
        }
        // only the open end of the three counts against the other side
        assert_eq!(score_position(&board, Piece::Ai), -4);
        assert_eq!(score_position(&board, Piece::Player), 5 + 2);
    }
}
