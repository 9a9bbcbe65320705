//! Deduction and subset resolution over a knowledge base.
//!
//! Both steps only read the knowledge base; the agent applies what they find,
//! so every change to its state goes through one owner.

use std::collections::HashSet;

use super::clause::Clause;
use super::grid::Cell;
use super::knowledge::KnowledgeBase;

/// Cells some clause forces to be mines or safe.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deductions {
    pub mines: HashSet<Cell>,
    pub safes: HashSet<Cell>
}

impl Deductions {
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty() && self.safes.is_empty()
    }
}

pub fn deduce(knowledge: &KnowledgeBase) -> Deductions {
    knowledge.iter().fold(Deductions::default(), |mut acc, clause| {
        acc.mines.extend(clause.known_mines());
        acc.safes.extend(clause.known_safes());
        acc
    })
}

/// Clauses that follow from one clause sitting inside another.
///
/// Every ordered pair of distinct clauses is checked against the knowledge
/// base as it is now. A result is kept when it has cells and is neither
/// already known nor already produced by an earlier pair.
pub fn resolve(knowledge: &KnowledgeBase) -> Vec<Clause> {
    let mut derived: Vec<Clause> = Vec::new();
    for small in knowledge {
        for big in knowledge {
            if small == big {
                continue
            }
            let clause = match small.difference(big) {
                Some(clause) => clause,
                None => continue
            };
            if !clause.is_empty() && !knowledge.contains(&clause) && !derived.contains(&clause) {
                derived.push(clause);
            }
        }
    }
    derived
}
