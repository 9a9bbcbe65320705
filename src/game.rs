use std::collections::{HashMap, HashSet};
use log::info;
use rand::RngCore;

use super::Agent;
use super::board::Board;
use super::error::{MinesweeperError, Result};
use super::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Safe(usize),
    Mine,
    /// Flagged, already revealed, or the game is over.
    Ignored
}

/// A board, what has been revealed on it, and the agent watching.
///
/// Every safe reveal is passed on to the agent, whoever made it.
pub struct Game<A: Agent> {
    board: Board,
    agent: A,
    revealed: HashMap<Cell, usize>,
    flags: HashSet<Cell>,
    lost: bool
}

impl<A: Agent> Game<A> {
    pub fn new(board: Board, agent: A) -> Game<A> {
        Game{board, agent, revealed: HashMap::new(), flags: HashSet::new(), lost: false}
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn flags(&self) -> &HashSet<Cell> {
        &self.flags
    }

    pub fn revealed(&self) -> &HashMap<Cell, usize> {
        &self.revealed
    }

    fn check_bounds(&self, cell: &Cell) -> Result<()> {
        let size = self.board.size();
        if !size.contains(cell) {
            return Err(MinesweeperError::OutOfBounds{cell: *cell, height: size.height, width: size.width})
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        if self.lost {
            return GameStatus::Lost
        }
        let safe_cells = self.board.size().area() - self.board.mine_count();
        if self.board.won(&self.flags) || self.revealed.len() == safe_cells {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn reveal(&mut self, cell: Cell) -> Result<RevealOutcome> {
        self.check_bounds(&cell)?;
        if self.status() != GameStatus::Playing
            || self.revealed.contains_key(&cell)
            || self.flags.contains(&cell) {
            return Ok(RevealOutcome::Ignored)
        }
        let count = self.board.nearby_mines(&cell);
        self.revealed.insert(cell, count);
        if self.board.is_mine(&cell) {
            info!("revealed a mine at {}", cell);
            self.lost = true;
            return Ok(RevealOutcome::Mine)
        }
        self.agent.record(cell, count);
        if self.status() == GameStatus::Won {
            info!("every safe cell revealed after {} moves", self.revealed.len());
        }
        Ok(RevealOutcome::Safe(count))
    }

    pub fn toggle_flag(&mut self, cell: Cell) -> Result<()> {
        self.check_bounds(&cell)?;
        if self.revealed.contains_key(&cell) {
            return Ok(())
        }
        if !self.flags.remove(&cell) {
            self.flags.insert(cell);
        }
        Ok(())
    }

    /// Lets the agent flag what it knows and reveal one cell.
    ///
    /// Returns `None` once the game is over or the agent has nowhere left to go.
    pub fn ai_move(&mut self, rng: &mut dyn RngCore) -> Result<Option<(Cell, RevealOutcome)>> {
        if self.status() != GameStatus::Playing {
            return Ok(None)
        }
        self.flags = self.agent.known_mines();
        let cell = match self.agent.generate_move(rng) {
            Some(cell) => cell,
            None => {
                info!("no moves left to make");
                return Ok(None)
            }
        };
        let outcome = self.reveal(cell)?;
        Ok(Some((cell, outcome)))
    }

    pub fn render(&self) -> String {
        self.board.render(&self.revealed, &self.flags)
    }
}
