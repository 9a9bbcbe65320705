use regex::Regex;

use super::error::{MinesweeperError, Result};
use super::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal(Cell),
    Flag(Cell),
    Ai,
    Quit
}

pub struct CommandParser {
    cell_command: Regex,
    bare_command: Regex
}

impl CommandParser {
    pub fn new() -> Result<CommandParser> {
        let cell_command = Regex::new(r"^\s*(reveal|click|flag)\s+(\d+)\s+(\d+)\s*$")?;
        let bare_command = Regex::new(r"^\s*(ai|quit|exit)\s*$")?;
        Ok(CommandParser{cell_command, bare_command})
    }

    /// Reads `reveal ROW COL`, `flag ROW COL`, `ai` or `quit`.
    pub fn parse(&self, input: &str) -> Result<Command> {
        let input = input.trim().to_lowercase();
        let invalid = || MinesweeperError::InvalidCommand(input.clone());
        if let Some(cap) = self.bare_command.captures(&input) {
            return match &cap[1] {
                "ai" => Ok(Command::Ai),
                _ => Ok(Command::Quit)
            }
        }
        let cap = self.cell_command.captures(&input).ok_or_else(invalid)?;
        let row: usize = cap[2].parse().map_err(|_| invalid())?;
        let col: usize = cap[3].parse().map_err(|_| invalid())?;
        let cell = Cell(row, col);
        match &cap[1] {
            "flag" => Ok(Command::Flag(cell)),
            _ => Ok(Command::Reveal(cell))
        }
    }
}
