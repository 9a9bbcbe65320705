use std::collections::HashSet;
use log::{debug, trace};
use rand::RngCore;
use rand::seq::IteratorRandom;

use super::Agent;
use super::clause::Clause;
use super::grid::{BoardSize, Cell};
use super::inference;
use super::knowledge::KnowledgeBase;

/// Plays by keeping clauses about the board and resolving them after every reveal.
///
/// Cells in `known_safe` or `known_mine` have been resolved out of every
/// clause, and no cell is ever in both sets.
#[derive(Debug, Clone)]
pub struct KnowledgeAgent {
    size: BoardSize,
    moves_made: HashSet<Cell>,
    known_safe: HashSet<Cell>,
    known_mine: HashSet<Cell>,
    knowledge: KnowledgeBase
}

impl KnowledgeAgent {
    pub fn new(size: BoardSize) -> KnowledgeAgent {
        KnowledgeAgent{
            size,
            moves_made: HashSet::new(),
            known_safe: HashSet::new(),
            known_mine: HashSet::new(),
            knowledge: KnowledgeBase::new()
        }
    }

    pub fn moves_made(&self) -> &HashSet<Cell> {
        &self.moves_made
    }

    pub fn known_safe(&self) -> &HashSet<Cell> {
        &self.known_safe
    }

    pub fn known_mine(&self) -> &HashSet<Cell> {
        &self.known_mine
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn mark_mine(&mut self, cell: Cell) {
        debug_assert!(!self.known_safe.contains(&cell), "{} is already known safe", cell);
        self.known_mine.insert(cell);
        self.knowledge.mark_mine(&cell);
    }

    pub fn mark_safe(&mut self, cell: Cell) {
        debug_assert!(!self.known_mine.contains(&cell), "{} is already known to be a mine", cell);
        self.known_safe.insert(cell);
        self.knowledge.mark_safe(&cell);
    }

    /// Marks every cell some clause forces. Returns whether there were any.
    pub fn conclude(&mut self) -> bool {
        let deductions = inference::deduce(&self.knowledge);
        if deductions.is_empty() {
            return false
        }
        debug!("concluded {} mines and {} safes", deductions.mines.len(), deductions.safes.len());
        for cell in deductions.mines {
            self.mark_mine(cell);
        }
        for cell in deductions.safes {
            self.mark_safe(cell);
        }
        true
    }

    /// Adds every clause subset resolution yields. Returns whether there were any.
    pub fn infer(&mut self) -> bool {
        let derived = inference::resolve(&self.knowledge);
        self.knowledge.extend(derived) > 0
    }

    /// Takes in the count revealed at `cell` and reasons until nothing new follows.
    ///
    /// `cell` must be on the board and not revealed before.
    pub fn record(&mut self, cell: Cell, mut count: usize) {
        debug_assert!(self.size.contains(&cell), "{} is off the board", cell);
        debug_assert!(!self.moves_made.contains(&cell), "{} was already played", cell);
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let mut unknown = Vec::with_capacity(8);
        for neighbor in self.size.neighbors(&cell) {
            if self.known_safe.contains(&neighbor) {
                continue
            }
            if self.known_mine.contains(&neighbor) {
                count -= 1;
                continue
            }
            unknown.push(neighbor);
        }
        self.knowledge.insert(Clause::new(unknown, count));

        let mut rounds = 0;
        loop {
            rounds += 1;
            let concluded = self.conclude();
            let inferred = self.infer();
            trace!("round {}: concluded {}, inferred {}", rounds, concluded, inferred);
            if !concluded && !inferred {
                break
            }
        }
        debug!("{} {} settled after {} rounds, {} clauses, {} safe, {} mines",
               cell, count, rounds, self.knowledge.len(), self.known_safe.len(), self.known_mine.len());
    }

    /// A known safe cell that has not been played, if there is one.
    ///
    /// Always the lowest such cell in row-major order, so play is repeatable.
    pub fn choose_safe_move(&self) -> Option<Cell> {
        self.known_safe.iter()
            .filter(|cell| !self.moves_made.contains(cell))
            .min()
            .copied()
    }

    /// Any unplayed cell not known to be a mine, chosen uniformly.
    pub fn choose_random_move(&self, rng: &mut dyn RngCore) -> Option<Cell> {
        self.size.cells().into_iter()
            .filter(|cell| !self.moves_made.contains(cell) && !self.known_mine.contains(cell))
            .choose(rng)
    }
}

impl Agent for KnowledgeAgent {
    fn record(&mut self, cell: Cell, count: usize) {
        KnowledgeAgent::record(self, cell, count)
    }

    fn generate_move(&self, rng: &mut dyn RngCore) -> Option<Cell> {
        self.choose_safe_move().or_else(|| self.choose_random_move(rng))
    }

    fn known_mines(&self) -> HashSet<Cell> {
        self.known_mine.clone()
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod agent_tests {
    use super::*;
    use super::super::board::Board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(cells: &[(usize, usize)]) -> HashSet<Cell> {
        cells.iter().map(|&(r, c)| Cell(r, c)).collect()
    }

    fn assert_consistent(agent: &KnowledgeAgent) {
        assert!(agent.known_mine().is_disjoint(agent.known_safe()));
        for clause in agent.knowledge() {
            assert!(clause.cells().is_disjoint(agent.known_mine()), "{} mentions a mine", clause);
            assert!(clause.cells().is_disjoint(agent.known_safe()), "{} mentions a safe", clause);
            assert!(clause.count() <= clause.len());
        }
    }

    #[test]
    fn zero_reveals_every_neighbor() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(3, 3));
        agent.record(Cell(1, 1), 0);
        let everything: HashSet<Cell> = BoardSize::new(3, 3).cells().into_iter().collect();
        assert_eq!(agent.known_safe(), &everything);
        assert!(agent.known_mine().is_empty());
        assert_consistent(&agent);
    }

    #[test]
    fn resolution_law() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(5, 5));
        agent.knowledge.insert(Clause::new(vec![Cell(0, 0), Cell(0, 1)], 1));
        agent.knowledge.insert(Clause::new(vec![Cell(0, 0), Cell(0, 1), Cell(0, 2)], 2));
        assert!(agent.infer());
        assert!(agent.knowledge().contains(&Clause::new(vec![Cell(0, 2)], 1)));
        assert!(agent.conclude());
        assert!(agent.known_mine().contains(&Cell(0, 2)));
    }

    #[test]
    fn two_constraints_isolate_the_mine() {
        // mine at (1, 1) on a 2x3 board
        //   . . .
        //   . X .
        let mut agent = KnowledgeAgent::new(BoardSize::new(2, 3));
        agent.record(Cell(0, 0), 1);
        assert!(agent.knowledge().contains(&Clause::new(vec![Cell(0, 1), Cell(1, 0), Cell(1, 1)], 1)));
        agent.record(Cell(0, 1), 1);
        // resolving against the first clause rules out (0, 2) and (1, 2)
        assert_eq!(agent.known_safe(), &set(&[(0, 0), (0, 1), (0, 2), (1, 2)]));
        agent.record(Cell(0, 2), 1);
        assert_eq!(agent.known_mine(), &set(&[(1, 1)]));
        assert!(agent.known_safe().contains(&Cell(1, 0)));
        // everything around (1, 0) is resolved, so it adds no clause
        let clauses = agent.knowledge().len();
        agent.record(Cell(1, 0), 1);
        assert_eq!(agent.knowledge().len(), clauses);
        assert_consistent(&agent);
    }

    #[test]
    fn subset_from_second_reveal_finds_safe_cell() {
        // mine at (1, 0) on a 2x2 board
        let mut agent = KnowledgeAgent::new(BoardSize::new(2, 2));
        agent.record(Cell(0, 0), 1);
        agent.record(Cell(0, 1), 1);
        // (0, 1) sees the same two cells as (0, 0) does by now
        assert_eq!(agent.knowledge().len(), 1);
        agent.record(Cell(1, 1), 1);
        assert_eq!(agent.known_mine(), &set(&[(1, 0)]));
        assert_consistent(&agent);
    }

    #[test]
    fn fixed_point_is_stable() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(4, 4));
        agent.record(Cell(0, 0), 1);
        agent.record(Cell(3, 3), 0);
        agent.record(Cell(0, 3), 1);
        let before = agent.clone();
        assert!(!agent.conclude());
        assert!(!agent.infer());
        assert_eq!(agent.known_mine(), before.known_mine());
        assert_eq!(agent.known_safe(), before.known_safe());
        assert_eq!(agent.knowledge().len(), before.knowledge().len());
    }

    #[test]
    fn known_mines_are_discounted_from_new_clauses() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(3, 3));
        agent.mark_mine(Cell(0, 1));
        agent.mark_safe(Cell(1, 0));
        agent.record(Cell(0, 0), 1);
        // the only other neighbour must be safe
        assert!(agent.known_safe().contains(&Cell(1, 1)));
        assert_consistent(&agent);
    }

    #[test]
    fn moves_skip_played_cells_and_mines() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(1, 3));
        assert_eq!(agent.choose_safe_move(), None);
        agent.mark_mine(Cell(0, 2));
        agent.record(Cell(0, 0), 0);
        assert_eq!(agent.choose_safe_move(), Some(Cell(0, 1)));
        agent.record(Cell(0, 1), 1);
        assert_eq!(agent.choose_safe_move(), None);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(agent.choose_random_move(&mut rng), None);
    }

    #[test]
    fn choosing_does_not_change_state() {
        let mut agent = KnowledgeAgent::new(BoardSize::new(3, 3));
        agent.record(Cell(0, 0), 1);
        let before = agent.clone();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            agent.choose_safe_move();
            agent.choose_random_move(&mut rng);
        }
        assert_eq!(agent.moves_made(), before.moves_made());
        assert_eq!(agent.known_safe(), before.known_safe());
        assert_eq!(agent.knowledge().len(), before.knowledge().len());
    }

    proptest! {
        #[test]
        fn agent_never_contradicts_the_board(seed in any::<u64>(), height in 2..7usize,
                                             width in 2..7usize, mines in 0..10usize) {
            let size = BoardSize::new(height, width);
            let mines = mines.min(size.area() - 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(size, mines, &mut rng);
            let mut agent = KnowledgeAgent::new(size);

            while let Some(cell) = agent.generate_move(&mut rng) {
                let was_known_safe = agent.known_safe().contains(&cell);
                if board.is_mine(&cell) {
                    prop_assert!(!was_known_safe, "{} was known safe but is a mine", cell);
                    break
                }
                agent.record(cell, board.nearby_mines(&cell));

                prop_assert!(agent.known_mine().iter().all(|cell| board.is_mine(cell)));
                prop_assert!(agent.known_safe().iter().all(|cell| !board.is_mine(cell)));
                prop_assert!(agent.known_mine().is_disjoint(agent.known_safe()));
                for clause in agent.knowledge() {
                    prop_assert!(clause.cells().is_disjoint(agent.known_mine()));
                    prop_assert!(clause.cells().is_disjoint(agent.known_safe()));
                }
            }
        }
    }
}
