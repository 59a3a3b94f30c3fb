use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Cell, Piece};
use connect4_minimax::config::EngineConfig;
use connect4_minimax::error::MoveError;
use connect4_minimax::search::{Engine, SearchResult};
use connect4_minimax::win::check_win;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

/// One game of a human against the engine
pub struct Session {
    board: Board,
    engine: Engine,
    pub state: GameState,
    // 1-indexed columns played so far
    pub game: String,
}

impl Session {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let board = config.new_board();
        Ok(Self {
            board,
            engine: Engine::new(config)?,
            state: GameState::Playing,
            game: String::new(),
        })
    }

    #[allow(unused)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the human's move, columns counted from 1
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(MoveError::GameOver.into());
        }
        if column_one_indexed < 1 || column_one_indexed > self.board.columns() {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.board.columns()
            ));
        }
        let column = column_one_indexed - 1;
        if !self.board.is_valid_column(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.board.play(column, Piece::Player)?;
        self.game.push_str(&column_one_indexed.to_string());
        Ok(self.update_state(Piece::Player))
    }

    /// Lets the engine choose and play its move
    pub fn ai_move(&mut self) -> Result<SearchResult> {
        if self.state != GameState::Playing {
            return Err(MoveError::GameOver.into());
        }
        let result = self.engine.best_move(&self.board);
        let column = result
            .column
            .ok_or_else(|| anyhow!("engine found no move in an unfinished game"))?;

        self.board.play(column, Piece::Ai)?;
        self.game.push_str(&(column + 1).to_string());
        self.update_state(Piece::Ai);
        Ok(result)
    }

    #[allow(unused)]
    pub fn node_count(&self) -> usize {
        self.engine.node_count
    }

    fn update_state(&mut self, mover: Piece) -> GameState {
        self.state = if check_win(&self.board, mover) {
            match mover {
                Piece::Player => GameState::PlayerWin,
                Piece::Ai => GameState::AiWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.state
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.board.columns()).map(|x| (x % 10).to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..self.board.rows() {
            for column in 0..self.board.columns() {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, column) {
                            Cell::Player => Color::Red,
                            Cell::Ai => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(EngineConfig {
            depth: 2,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn rejects_out_of_range_columns() {
        let mut session = session();
        assert!(session.play_checked(0).is_err());
        assert!(session.play_checked(8).is_err());
        assert_eq!(session.game, "");
    }

    #[test]
    fn rejects_full_column() {
        let mut session = session();
        // alternating pieces fill the first column without a four
        session.board = Board::from_moves("111111").unwrap();
        assert_eq!(session.state, GameState::Playing);

        let err = session.play_checked(1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid move, column 1 full");
        assert_eq!(session.game, "");
        assert_eq!(session.play_checked(2).unwrap(), GameState::Playing);
    }

    #[test]
    fn human_win_ends_the_game() {
        let mut session = session();
        for column in 1..=3 {
            assert_eq!(session.play_checked(column).unwrap(), GameState::Playing);
        }
        assert_eq!(session.play_checked(4).unwrap(), GameState::PlayerWin);
        assert!(session.ai_move().is_err());
        assert!(session.play_checked(5).is_err());
    }

    #[test]
    fn engine_blocks_and_records_its_move() {
        let mut session = session();
        for column in 1..=3 {
            session.play_checked(column).unwrap();
        }
        let result = session.ai_move().unwrap();

        assert_eq!(result.column, Some(3));
        assert_eq!(session.board().get(5, 3), Cell::Ai);
        assert_eq!(session.game, "1234");
        assert_eq!(session.state, GameState::Playing);
        assert!(session.node_count() > 1);
    }
}
