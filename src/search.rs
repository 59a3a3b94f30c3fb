//! Depth-limited minimax search with alpha-beta pruning

use rayon::prelude::*;
use tracing::debug;

use std::time::Instant;

use crate::board::{Board, Piece};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::evaluate::score_position;
use crate::win::check_win;

/// Position scores, always from the AI's point of view
pub type Score = i64;

/// The score of a won position, far beyond any heuristic score
pub const LARGE_WIN: Score = 100_000_000_000_000;

/// A lower bound below every reachable score
pub const NEG_INFINITY: Score = Score::MIN;
/// An upper bound above every reachable score
pub const INFINITY: Score = Score::MAX;

/// The outcome of a search: the column to play and its score
///
/// `column` is `None` when the searched position was itself a leaf.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// Runs minimax over copies of a board
///
/// # Notes
/// Every child position is a fresh clone of its parent, so sibling branches
/// never share a board. Columns are explored in ascending order and a column
/// only replaces the current best when it scores strictly better, so ties go
/// to the lowest column.
#[derive(Clone, Debug)]
pub struct Searcher {
    /// The number of positions visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    pruning: bool,
}

impl Searcher {
    /// Creates a `Searcher` with alpha-beta pruning
    pub fn new() -> Self {
        Self {
            node_count: 0,
            pruning: true,
        }
    }

    /// Creates a `Searcher` that explores every branch
    pub fn without_pruning() -> Self {
        Self {
            node_count: 0,
            pruning: false,
        }
    }

    /// Searches `depth` plies below `board`
    ///
    /// The AI is the maximizing side and the human the minimizing side. Won
    /// positions score ±[`LARGE_WIN`], drawn ones 0, and positions at the
    /// depth limit are scored heuristically for the AI.
    ///
    /// # Panics
    /// If a position with no playable column is not recognised as terminal.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let ai_won = check_win(board, Piece::Ai);
        let player_won = !ai_won && check_win(board, Piece::Player);
        let full = board.is_full();
        if depth == 0 || ai_won || player_won || full {
            return SearchResult::leaf(if ai_won {
                LARGE_WIN
            } else if player_won {
                -LARGE_WIN
            } else if full {
                0
            } else {
                score_position(board, Piece::Ai)
            });
        }

        let moves: Vec<(usize, usize)> = board.open_moves().collect();
        let mut best_column = match moves.first() {
            Some(&(column, _)) => column,
            None => unreachable!("non-terminal position has no playable column"),
        };

        if maximizing {
            let mut value = NEG_INFINITY;
            for &(column, row) in moves.iter() {
                let mut child = board.clone();
                child.drop_piece(row, column, Piece::Ai);

                let score = self.minimax(&child, depth - 1, alpha, beta, false).score;
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
                // the minimizing side above already has something better
                if self.pruning && alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(best_column),
                score: value,
            }
        } else {
            let mut value = INFINITY;
            for &(column, row) in moves.iter() {
                let mut child = board.clone();
                child.drop_piece(row, column, Piece::Player);

                let score = self.minimax(&child, depth - 1, alpha, beta, true).score;
                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
                if self.pruning && alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(best_column),
                score: value,
            }
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a pruned minimax search on `board`
pub fn minimax(board: &Board, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> SearchResult {
    Searcher::new().minimax(board, depth, alpha, beta, maximizing)
}

/// The AI opponent: picks a column for the AI piece
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,

    /// The number of positions visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            node_count: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches the configured depth with the AI to move
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        debug_assert_eq!(
            (board.rows(), board.columns(), board.window_length()),
            (self.config.rows, self.config.columns, self.config.window_length),
            "board does not match the engine's dimensions"
        );
        let start = Instant::now();
        let depth = self.config.depth;

        let (result, node_count) = if self.config.parallel && depth > 0 && !board.is_terminal() {
            Self::parallel_search(board, depth)
        } else {
            let mut searcher = Searcher::new();
            let result = searcher.minimax(board, depth, NEG_INFINITY, INFINITY, true);
            (result, searcher.node_count)
        };
        self.node_count = node_count;

        debug!(
            column = ?result.column,
            score = result.score,
            nodes = node_count,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "engine search finished"
        );
        result
    }

    /// Searches each root move on its own thread
    ///
    /// Root branches cannot tighten each other's bounds, so each one gets the
    /// full window and returns its exact score. Merging in column order with
    /// the same strictly-better rule gives the sequential search's answer.
    fn parallel_search(board: &Board, depth: u32) -> (SearchResult, usize) {
        let moves: Vec<(usize, usize)> = board.open_moves().collect();

        let scored: Vec<(usize, Score, usize)> = moves
            .into_par_iter()
            .map(|(column, row)| {
                let mut child = board.clone();
                child.drop_piece(row, column, Piece::Ai);

                let mut searcher = Searcher::new();
                let result = searcher.minimax(&child, depth - 1, NEG_INFINITY, INFINITY, false);
                (column, result.score, searcher.node_count)
            })
            .collect();

        let mut best = SearchResult {
            column: None,
            score: NEG_INFINITY,
        };
        let mut node_count = 1;
        for &(column, score, nodes) in scored.iter() {
            node_count += nodes;
            if best.column.is_none() || score > best.score {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }
        (best, node_count)
    }
}
