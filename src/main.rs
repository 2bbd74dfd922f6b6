//! Chess engine main module.
//!
//! This module serves as the entry point for the engine. It parses the
//! command line, sets up logging and hands control to the terminal front end
//! or, with `--perft`, prints move-tree node counts and exits.

pub mod position;
pub mod chess_move;
pub mod errors;
pub mod utils;
pub mod movegen_tables;
pub mod movegeneration;
pub mod moveexecution;
pub mod check;
pub mod evaluation;
pub mod search;
pub mod perft;
pub mod game;
pub mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use game::Difficulty;
use perft::Perft;
use position::{Color, Position};
use ui::ChessUI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a fixed-depth minimax engine", long_about = None)]
struct Args {
    /// Engine strength: easy, medium or hard (search depth 1, 2 or 3)
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Search depth in plies, overriding the difficulty
    #[arg(long)]
    depth: Option<u32>,

    /// The side you play
    #[arg(long, value_enum, default_value_t = Side::White)]
    color: Side,

    /// Print node counts of the move tree from the initial position to this depth and exit
    #[arg(long)]
    perft: Option<u32>,
}

fn run_perft(max_depth: u32) {
    for depth in 1..=max_depth {
        let mut position = Position::new();
        let mut perft = Perft::new();
        let nodes = perft.run(&mut position, Color::White, depth);
        println!(
            "depth {}: {} nodes, {} captures, {} en passant, {} castles, {} promotions",
            depth, nodes, perft.captures, perft.en_passants, perft.castles, perft.promotions
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(depth) = args.perft {
        run_perft(depth);
        return Ok(());
    }

    let depth = args.depth.unwrap_or_else(|| args.difficulty.depth());
    if depth == 0 {
        anyhow::bail!("search depth must be at least 1");
    }
    info!("starting game: player {:?}, depth {}", args.color, depth);

    let mut ui = ChessUI::new(depth, args.color.into());
    ui.play_game()?;
    Ok(())
}
