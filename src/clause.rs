use std::collections::HashSet;
use std::fmt;
use itertools::Itertools;

use super::grid::Cell;

/// A statement about the board: exactly `count` of `cells` are mines.
///
/// Cells only ever leave a clause once it is built, and every removal keeps
/// `count <= cells.len()`. Equality compares the cell sets and the counts, so
/// the order cells were added in does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    cells: HashSet<Cell>,
    count: usize
}

impl Clause {
    pub fn new<I: IntoIterator<Item = Cell>>(cells: I, count: usize) -> Clause {
        let cells: HashSet<Cell> = cells.into_iter().collect();
        debug_assert!(count <= cells.len(), "clause claims more mines than cells");
        Clause{cells, count}
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Every cell, if all of them must be mines.
    pub fn known_mines(&self) -> HashSet<Cell> {
        if self.count == self.cells.len() {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Every cell, if none of them can be a mine.
    pub fn known_safes(&self) -> HashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    pub fn mark_mine(&mut self, cell: &Cell) {
        if self.cells.remove(cell) {
            self.count -= 1;
        }
    }

    pub fn mark_safe(&mut self, cell: &Cell) {
        self.cells.remove(cell);
    }

    pub fn is_subset(&self, other: &Clause) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// What `other` says about the cells it has beyond `self`.
    ///
    /// Only defined when `self` covers a subset of `other`'s cells: both talk
    /// about the same mines on the shared cells, so the leftover mines of
    /// `other` sit in the leftover cells.
    pub fn difference(&self, other: &Clause) -> Option<Clause> {
        if !self.is_subset(other) || self.count > other.count {
            return None
        }
        let cells = other.cells.difference(&self.cells).cloned();
        Some(Clause::new(cells, other.count - self.count))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} = {}", self.cells.iter().sorted().join(", "), self.count)
    }
}

#[cfg(test)]
use proptest::prelude::*;
