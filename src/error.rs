use std::io;
use thiserror::Error;

use super::grid::Cell;

#[derive(Error, Debug)]
pub enum MinesweeperError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("cell {cell} is outside the {height}x{width} board")]
    OutOfBounds { cell: Cell, height: usize, width: usize },

    #[error("could not understand {0:?}, expected: reveal ROW COL | flag ROW COL | ai | quit")]
    InvalidCommand(String),

    #[error("bad command pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MinesweeperError>;
