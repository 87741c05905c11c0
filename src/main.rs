use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_engine::board::Side;
use connect4_engine::engine::Engine;
use connect4_engine::game::{Game, Outcome};

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose who moves first
    let mut first = Side::Human;
    loop {
        let mut buffer = String::new();
        print!("Do you want to move first? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => break,
            Some(_letter @ 'n') => {
                first = Side::Engine;
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    let mut game = Game::new(first);
    let engine = Engine::default();

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            Outcome::Playing => {
                let next_move =
                    // engine turn
                    if game.to_move == Side::Engine {
                        println!("Engine is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let column = engine.select_move(&game.board)?;
                        println!("Engine plays: {}", column + 1);
                        column + 1

                    // human turn
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::HumanWin => {
                game.display().expect("Failed to draw board!");
                println!("You win!");
                break;
            }
            Outcome::EngineWin => {
                game.display().expect("Failed to draw board!");
                println!("The engine wins!");
                break;
            }
            Outcome::Draw => {
                game.display().expect("Failed to draw board!");
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
