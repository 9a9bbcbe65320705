pub mod grid;
pub mod clause;
pub mod knowledge;
pub mod inference;
pub mod ai;
pub mod board;
pub mod game;
pub mod config;
pub mod error;
mod interaction;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use log::info;
use rand::RngCore;

use error::{MinesweeperError, Result};
use game::{Game, GameStatus, RevealOutcome};
use grid::Cell;
use interaction::{Command, CommandParser};

/// Something that learns from revealed counts and picks the next cell.
pub trait Agent {
    /// `count` is the number of mines around `cell`, which was just revealed safely.
    fn record(&mut self, cell: Cell, count: usize);
    fn generate_move(&self, rng: &mut dyn RngCore) -> Option<Cell>;
    fn known_mines(&self) -> HashSet<Cell>;
}

fn report<A: Agent, W: Write>(game: &Game<A>, out: &mut W) -> Result<GameStatus> {
    let status = game.status();
    match status {
        GameStatus::Won => writeln!(out, "you win!")?,
        GameStatus::Lost => writeln!(out, "you lose")?,
        GameStatus::Playing => writeln!(out, "game over")?
    }
    info!("game finished: {:?}", status);
    Ok(status)
}

/// Reads commands from `input` until the game ends, `quit`, or the input runs out.
pub fn game_loop<A: Agent, R: BufRead, W: Write>(game: &mut Game<A>, rng: &mut dyn RngCore,
                                                 input: &mut R, out: &mut W) -> Result<GameStatus> {
    let parser = CommandParser::new()?;
    let mut line = String::new();
    while game.status() == GameStatus::Playing {
        writeln!(out, "{}", game.render())?;
        writeln!(out, "Please input your move: reveal ROW COL | flag ROW COL | ai | quit")?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break
        }
        let result = match parser.parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Reveal(cell)) => game.reveal(cell).map(|_| ()),
            Ok(Command::Flag(cell)) => game.toggle_flag(cell),
            Ok(Command::Ai) => match game.ai_move(rng) {
                Ok(Some((cell, _))) => writeln!(out, "AI revealed {}", cell).map_err(MinesweeperError::from),
                Ok(None) => writeln!(out, "No moves left to make.").map_err(MinesweeperError::from),
                Err(e) => Err(e)
            },
            Err(e) => Err(e)
        };
        match result {
            Ok(()) => {}
            Err(e @ MinesweeperError::InvalidCommand(_)) | Err(e @ MinesweeperError::OutOfBounds{..}) => {
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e)
        }
    }
    writeln!(out, "{}", game.render())?;
    report(game, out)
}

/// Lets the agent play until the game ends or it has no move left.
pub fn ai_game_loop<A: Agent, W: Write>(game: &mut Game<A>, rng: &mut dyn RngCore,
                                        out: &mut W) -> Result<GameStatus> {
    writeln!(out, "{}", game.render())?;
    while let Some((cell, outcome)) = game.ai_move(rng)? {
        match outcome {
            RevealOutcome::Safe(count) => writeln!(out, "AI revealed {}: {}", cell, count)?,
            RevealOutcome::Mine => writeln!(out, "AI revealed {}: mine", cell)?,
            RevealOutcome::Ignored => writeln!(out, "AI skipped {}", cell)?
        }
        writeln!(out, "{}", game.render())?;
    }
    report(game, out)
}
