use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::game::{Game, GameStatus};
use crate::position::Color;
use crate::utils::{parse_move, parse_square};

/// What the player typed at the prompt.
#[derive(Debug, PartialEq)]
enum Command {
    Quit,
    Display,
    Undo,
    Moves(String),
    Play(String),
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let mut words = input.split_whitespace();
    match (words.next(), words.next()) {
        (Some("quit"), _) | (Some("exit"), _) => Command::Quit,
        (Some("display"), _) => Command::Display,
        (Some("undo"), _) => Command::Undo,
        (Some("moves"), Some(square)) => Command::Moves(square.to_string()),
        _ => Command::Play(input),
    }
}

/// Terminal front end: a person plays one side, the engine the other.
pub struct ChessUI {
    game: Game,
    player_color: Color,
}

impl ChessUI {
    pub fn new(depth: u32, player_color: Color) -> Self {
        ChessUI {
            game: Game::new(depth),
            player_color,
        }
    }

    pub fn play_game(&mut self) -> io::Result<()> {
        println!("Welcome to Gambit! You play {:?}, engine depth {}.", self.player_color, self.game.depth());
        println!("Enter moves in format: e2e4");
        println!("Commands: 'moves e2' to list destinations, 'undo', 'display', 'quit'\n");
        println!("{}", self.game.position());

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            if self.is_game_over() {
                break;
            }

            if self.game.to_move() != self.player_color {
                println!("Engine is thinking...");
                match self.game.engine_move() {
                    Some(record) => {
                        println!("Engine plays: {}", record.mv);
                        println!("{}", self.game.position());
                    }
                    None => {
                        println!("Engine could not find a move!");
                        break;
                    }
                }
                continue;
            }

            print!("Your move: ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match parse_command(&line) {
                Command::Quit => break,
                Command::Display => println!("{}", self.game.position()),
                Command::Undo => self.undo_turn(),
                Command::Moves(square) => self.show_destinations(&square),
                Command::Play(text) => match parse_move(&text).and_then(|mv| self.game.apply_player_move(mv)) {
                    Ok(_) => println!("{}", self.game.position()),
                    Err(e) => {
                        warn!("rejected input {:?}: {}", text, e);
                        println!("Invalid move: {}", e);
                    }
                },
            }
        }
        Ok(())
    }

    fn show_destinations(&self, square: &str) {
        match parse_square(square) {
            Ok(square) => {
                let names: Vec<String> = self
                    .game
                    .legal_destinations(square)
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                if names.is_empty() {
                    println!("No moves from {}", square);
                } else {
                    println!("{}: {}", square, names.join(" "));
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    /// Takes back the engine's reply and the player's move before it.
    fn undo_turn(&mut self) {
        if self.game.take_back().is_none() {
            println!("Nothing to undo");
            return;
        }
        if self.game.to_move() != self.player_color {
            self.game.take_back();
        }
        println!("{}", self.game.position());
    }

    fn is_game_over(&mut self) -> bool {
        let color = self.game.to_move();
        let status = match self.game.status(color) {
            Ok(status) => status,
            Err(e) => {
                println!("Game cannot continue: {}", e);
                return true;
            }
        };
        match status {
            GameStatus::Checkmate => {
                info!("{:?} is checkmated after {} plies", color, self.game.position().history().len());
                println!("{:?} wins by checkmate!", color.opponent());
            }
            GameStatus::Stalemate => {
                info!("{:?} is stalemated", color);
                println!("Game drawn by stalemate!");
            }
            GameStatus::Check => println!("{:?} is in check.", color),
            GameStatus::Ongoing => {}
        }
        status.is_over()
    }
}
