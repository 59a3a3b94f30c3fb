use anyhow::Result;
use tracing::info;

use std::io::{stdin, stdout, Write};
use std::path::Path;

use connect4_minimax::config::EngineConfig;

mod session;
use session::*;

const CONFIG_PATH: &str = "connect4.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = EngineConfig::load_or_default(Path::new(CONFIG_PATH))?;
    info!(
        rows = config.rows,
        columns = config.columns,
        depth = config.depth,
        parallel = config.parallel,
        "engine configured"
    );
    let mut session = Session::new(config)?;

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose who moves first
    let mut human_to_move = loop {
        let mut buffer = String::new();
        print!("Do you want to move first? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => break true,
            Some(_letter @ 'n') => break false,
            _ => println!("Unknown answer given"),
        }
    };

    // game loop
    loop {
        session.display()?;

        match session.state {
            GameState::Playing => {
                if human_to_move {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // stdin closed
                        break;
                    }

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    if let Err(err) = session.play_checked(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                } else {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    let result = session.ai_move()?;
                    if let Some(column) = result.column {
                        println!("AI plays column {} (score {})", column + 1, result.score);
                    }
                }
                human_to_move = !human_to_move;
            }

            // end states
            GameState::PlayerWin => {
                println!("Player wins!");
                break;
            }
            GameState::AiWin => {
                println!("AI wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!(moves = %session.game, "game finished");
    Ok(())
}
