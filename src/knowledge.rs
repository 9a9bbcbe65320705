use std::slice;
use log::debug;

use super::clause::Clause;
use super::grid::Cell;

/// The clauses an agent believes, in the order it learned them.
///
/// A clause that is equal to one already held is never stored again, and
/// clauses with no cells carry nothing and are never stored at all.
#[derive(Debug, Default, Clone)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>
}

impl KnowledgeBase {
    pub fn new() -> KnowledgeBase {
        KnowledgeBase{clauses: Vec::new()}
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn iter(&self) -> slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Returns whether the clause was new.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if clause.is_empty() || self.contains(&clause) {
            return false
        }
        debug!("learned {}", clause);
        self.clauses.push(clause);
        true
    }

    /// Returns how many of the clauses were new.
    pub fn extend<I: IntoIterator<Item = Clause>>(&mut self, clauses: I) -> usize {
        clauses.into_iter()
            .map(|clause| self.insert(clause))
            .filter(|&added| added)
            .count()
    }

    pub fn mark_mine(&mut self, cell: &Cell) {
        for clause in self.clauses.iter_mut() {
            clause.mark_mine(cell);
        }
    }

    pub fn mark_safe(&mut self, cell: &Cell) {
        for clause in self.clauses.iter_mut() {
            clause.mark_safe(cell);
        }
    }

    pub fn mentions(&self, cell: &Cell) -> bool {
        self.clauses.iter().any(|clause| clause.contains(cell))
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a Clause;
    type IntoIter = slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
