use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    search::{find_best_move, find_best_move_parallel},
    Board, BoardExt, ConnectFourBoard, GameError, Piece, WIDTH,
};

mod cli;
use cli::*;

mod terminal;

fn ask_controller(stdin: &Stdin, player: usize) -> Result<Controller> {
    loop {
        let mut buffer = String::new();
        print!("Is player {} AI controlled? y/n: ", player);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(Controller::Ai),
            Some(_letter @ 'n') => return Ok(Controller::Human),
            _ => println!("Unknown answer given"),
        }
    }
}

fn player_number(piece: Piece) -> usize {
    match piece {
        Piece::PlayerTwo => 2,
        _ => 1,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let controllers = (
        match cli.player_one {
            Some(controller) => controller,
            None => ask_controller(&stdin, 1)?,
        },
        match cli.player_two {
            Some(controller) => controller,
            None => ask_controller(&stdin, 2)?,
        },
    );
    info!(?controllers, depth = cli.depth, parallel = cli.parallel, "starting game");

    let mut board = if cli.second {
        ConnectFourBoard::starting_with(Piece::PlayerTwo)?
    } else {
        ConnectFourBoard::new()
    };
    let mut history = Vec::new();

    // game loop
    loop {
        if cli.plain {
            println!("\n{}\n", board);
        } else {
            terminal::draw(&board)?;
        }

        if board.is_win() {
            // the player who just moved made the alignment
            println!("Player {} wins!", player_number(board.turn().opposite()));
            break;
        }
        if board.is_draw() {
            println!("Draw!");
            break;
        }

        let controller = match board.turn() {
            Piece::PlayerTwo => controllers.1,
            _ => controllers.0,
        };

        let next_move = match controller {
            Controller::Ai => {
                println!("AI is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                // slow down play if both players are AI
                if controllers == (Controller::Ai, Controller::Ai) {
                    std::thread::sleep(std::time::Duration::new(1, 0));
                }

                let depth = cli.depth as usize;
                let best_move = if cli.parallel {
                    find_best_move_parallel(&board, depth)?
                } else {
                    find_best_move(&board, depth)?
                };
                println!(
                    "Player {} plays column {}",
                    player_number(board.turn()),
                    best_move + 1
                );
                best_move
            }
            Controller::Human => {
                print!("Move input > ");
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                match input_str.trim().parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!(
                            "Invalid move '{}'. Columns must be between 1 and {}",
                            input_str.trim(),
                            WIDTH
                        );
                        continue;
                    }
                }
            }
        };

        board = match board.play(next_move) {
            Ok(next) => next,
            Err(GameError::ColumnFull { column }) => {
                println!("Invalid move, column {} full", column + 1);
                // try the move again
                continue;
            }
            Err(err) => {
                println!("{}", err);
                // try the move again
                continue;
            }
        };
        history.push(next_move + 1);
    }

    let moves: Vec<String> = history.iter().map(|column| column.to_string()).collect();
    println!("Moves: {}", moves.join(""));
    Ok(())
}
