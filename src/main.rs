//! Terminal front-end for the Reversi engine
//!
//! Translates stdin input into board coordinates and renders the board as
//! text after every change; all game logic stays in the library.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use reversi::{Board, Disc, Engine, Game, Outcome, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Disc {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Disc::Black,
            Color::White => Disc::White,
        }
    }
}

/// Play Reversi against a fixed-depth minimax opponent.
#[derive(Debug, Parser)]
#[command(name = "reversi", version, about)]
struct Args {
    /// Engine search depth in plies
    #[arg(long, default_value_t = reversi::DEFAULT_DEPTH, value_parser = clap::value_parser!(u8).range(1..))]
    depth: u8,

    /// Side controlled by the human player
    #[arg(long, value_enum, default_value = "black")]
    color: Color,

    /// Start from an all-empty board instead of the standard opening
    #[arg(long)]
    empty_start: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let human: Disc = args.color.into();
    let engine = Engine::new(args.depth);

    let mut game = if args.empty_start {
        Game::with_position(Board::new(), Disc::Black)
    } else {
        Game::new()
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", game.board());
    while !game.is_over() {
        let side = game.to_move();

        if side == human {
            if !prompt_human_move(&mut game, &mut lines)? {
                return Ok(());
            }
        } else {
            // The controller only hands out turns that have a legal move.
            let Some(pos) = engine.get_move(game.board(), side) else {
                break;
            };
            println!("{side} plays {pos}");
            game.try_move(pos)?;
        }

        println!("{}", game.board());
    }

    println!("Final score: {}", game.score());
    match game.outcome() {
        Some(Outcome::Winner(disc)) => println!("{disc} wins"),
        Some(Outcome::Draw) => println!("Draw"),
        None => println!("Game aborted"),
    }

    Ok(())
}

/// Read moves until one applies. Returns `false` when the player quits or
/// the input stream ends.
fn prompt_human_move(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        let side = game.to_move();
        println!("{side} to move. Legal: {}", format_moves(&game.legal_moves()));
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            return Ok(false);
        }

        let pos: Pos = match input.parse() {
            Ok(pos) => pos,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match game.try_move(pos) {
            Ok(()) => return Ok(true),
            Err(err) => println!("{err}"),
        }
    }
}

fn format_moves(moves: &[Pos]) -> String {
    moves
        .iter()
        .map(Pos::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
