use std::env;
use std::io::{self, Write};
use std::process;
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;

use minesweeper_ai::ai::KnowledgeAgent;
use minesweeper_ai::board::Board;
use minesweeper_ai::config::GameConfig;
use minesweeper_ai::error::Result;
use minesweeper_ai::game::Game;

fn run(config: &GameConfig) -> Result<()> {
    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng())
    };
    let size = config.size();
    let board = Board::new(size, config.mines, &mut *rng);
    let mut game = Game::new(board, KnowledgeAgent::new(size));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.auto {
        minesweeper_ai::ai_game_loop(&mut game, &mut *rng, &mut out)?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        minesweeper_ai::game_loop(&mut game, &mut *rng, &mut input, &mut out)?;
    }
    write!(out, "{}", game.board())?;
    Ok(())
}

fn main() {
    let config = match GameConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: minesweeper-ai [--auto] [--seed N] [HEIGHT WIDTH MINES]");
            process::exit(2);
        }
    };
    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
