use std::fmt;
use itertools::iproduct;

/// A (row, column) coordinate on the board.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Cell(pub usize, pub usize);

impl Cell {
    pub fn distance(&self, other: &Cell) -> usize {
        //l-inf norm, so the 8 surrounding cells are at distance 1
        let rows = (self.0 as i64 - other.0 as i64).abs();
        let cols = (self.1 as i64 - other.1 as i64).abs();
        rows.max(cols) as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize
}

impl BoardSize {
    pub fn new(height: usize, width: usize) -> BoardSize {
        BoardSize{height, width}
    }

    pub fn area(&self) -> usize {
        self.height * self.width
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        cell.0 < self.height && cell.1 < self.width
    }

    /// Every cell on the board in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.area()).filter_map(|x| self.cell_from_integer(x)).collect()
    }

    pub fn cell_from_integer(&self, x: usize) -> Option<Cell> {
        if x >= self.area() {
            return None
        }
        Some(Cell(x / self.width, x % self.width))
    }

    /// The in-bounds cells at distance 1 from `cell`, excluding `cell` itself.
    pub fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        let height = self.height as i64;
        let width = self.width as i64;
        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&(i, j)| i != 0 || j != 0)
            .map(|(i, j)| (cell.0 as i64 + i, cell.1 as i64 + j))
            .filter(|&(row, col)| row >= 0 && row < height && col >= 0 && col < width)
            .map(|(row, col)| Cell(row as usize, col as usize))
            .collect()
    }
}

#[cfg(test)]
use proptest::prelude::*;
