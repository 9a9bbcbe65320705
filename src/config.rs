use std::convert::TryFrom;

use super::error::{MinesweeperError, Result};
use super::grid::BoardSize;

/// Largest board a game may use; every cell is held in memory several times over.
pub const MAX_AREA: usize = 10_000;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
    /// Fixes both mine placement and the agent's random moves.
    pub seed: Option<u64>,
    /// Let the agent play the whole game without reading commands.
    pub auto: bool
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig{height: 8, width: 8, mines: 8, seed: None, auto: false}
    }
}

impl GameConfig {
    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.height, self.width)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(MinesweeperError::InvalidConfig(
                format!("board must have at least one row and column, got {}x{}", self.height, self.width)))
        }
        let area = self.height.checked_mul(self.width)
            .filter(|&area| area <= MAX_AREA)
            .ok_or_else(|| MinesweeperError::InvalidConfig(
                format!("a {}x{} board is larger than {} cells", self.height, self.width, MAX_AREA)))?;
        if self.mines >= area {
            return Err(MinesweeperError::InvalidConfig(
                format!("{} mines do not fit on a {}x{} board with room to play", self.mines, self.height, self.width)))
        }
        Ok(())
    }

    /// Reads `[--auto] [--seed N] [HEIGHT WIDTH MINES]`, leaving defaults for anything missing.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<GameConfig> {
        let mut config = GameConfig::default();
        let mut positional = Vec::with_capacity(3);
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--auto" => config.auto = true,
                "--seed" => {
                    let value = args.next()
                        .ok_or_else(|| MinesweeperError::InvalidConfig(String::from("--seed needs a value")))?;
                    config.seed = Some(parse_number(&value)?);
                }
                _ => positional.push(parse_size(&arg)?)
            }
        }
        match positional.len() {
            0 => {}
            3 => {
                config.height = positional[0];
                config.width = positional[1];
                config.mines = positional[2];
            }
            n => return Err(MinesweeperError::InvalidConfig(
                format!("expected HEIGHT WIDTH MINES, got {} numbers", n)))
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_number(value: &str) -> Result<u64> {
    value.parse()
        .map_err(|_| MinesweeperError::InvalidConfig(format!("{:?} is not a number", value)))
}

fn parse_size(value: &str) -> Result<usize> {
    usize::try_from(parse_number(value)?)
        .map_err(|_| MinesweeperError::InvalidConfig(format!("{} is too large", value)))
}
