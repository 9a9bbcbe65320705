use std::collections::{HashMap, HashSet};
use std::fmt;
use rand::Rng;
use rand::seq::SliceRandom;

use super::grid::{BoardSize, Cell};

/// The hidden layout a game is played on.
#[derive(Debug, Clone)]
pub struct Board {
    size: BoardSize,
    mines: HashSet<Cell>
}

fn sample_cells<R: Rng + ?Sized>(size: &BoardSize, n: usize, rng: &mut R) -> Vec<Cell> {
    let mut possible: Vec<usize> = (0..size.area()).collect();
    possible.shuffle(rng);
    possible.iter()
        .take(n)
        .filter_map(|&x| size.cell_from_integer(x))
        .collect()
}

impl Board {
    /// Places `mine_count` mines uniformly at random; capped at the board's area.
    pub fn new<R: Rng + ?Sized>(size: BoardSize, mine_count: usize, rng: &mut R) -> Board {
        let mines = sample_cells(&size, mine_count, rng).into_iter().collect();
        Board{size, mines}
    }

    pub fn from_mines<I: IntoIterator<Item = Cell>>(size: BoardSize, mines: I) -> Board {
        let mines = mines.into_iter()
            .filter(|cell| size.contains(cell))
            .collect();
        Board{size, mines}
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn is_mine(&self, cell: &Cell) -> bool {
        self.mines.contains(cell)
    }

    /// How many of the cells around `cell` hold a mine.
    pub fn nearby_mines(&self, cell: &Cell) -> usize {
        self.size.neighbors(cell).iter()
            .filter(|neighbor| self.is_mine(neighbor))
            .count()
    }

    /// Won once the flags sit on exactly the mines.
    pub fn won(&self, flags: &HashSet<Cell>) -> bool {
        *flags == self.mines
    }

    /// The board as a player sees it: counts for revealed cells, flags, and
    /// `X` for a mine that was revealed.
    pub fn render(&self, revealed: &HashMap<Cell, usize>, flags: &HashSet<Cell>) -> String {
        let mut result = "  ".to_owned();
        for j in 0..self.size.width {
            result += &(j % 10).to_string();
        }
        result += "\n";
        for i in 0..self.size.height {
            result += &(i % 10).to_string();
            result += " ";
            for j in 0..self.size.width {
                let cell = Cell(i, j);
                let c = match (revealed.get(&cell), flags.contains(&cell)) {
                    (Some(_), _) if self.is_mine(&cell) => String::from("X"),
                    (Some(0), _) => String::from("_"),
                    (Some(n), _) => n.to_string(),
                    (None, true) => String::from("▶"),
                    (None, false) => String::from("□")
                };
                result += &c;
            }
            result += "\n";
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "--".repeat(self.size.width) + "-";
        for i in 0..self.size.height {
            writeln!(f, "{}", border)?;
            for j in 0..self.size.width {
                if self.is_mine(&Cell(i, j)) {
                    write!(f, "|X")?;
                } else {
                    write!(f, "| ")?;
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", border)
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod board_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn nearby_mines_counts_neighbors_only() {
        let size = BoardSize::new(3, 3);
        let board = Board::from_mines(size, vec![Cell(0, 0), Cell(1, 1), Cell(2, 2)]);
        assert_eq!(board.nearby_mines(&Cell(1, 1)), 2);
        assert_eq!(board.nearby_mines(&Cell(0, 2)), 1);
        assert_eq!(board.nearby_mines(&Cell(1, 0)), 2);
        assert_eq!(board.nearby_mines(&Cell(0, 0)), 1);
    }

    #[test]
    fn won_needs_exact_flags() {
        let board = Board::from_mines(BoardSize::new(2, 2), vec![Cell(0, 1)]);
        let mut flags = HashSet::new();
        assert!(!board.won(&flags));
        flags.insert(Cell(0, 1));
        assert!(board.won(&flags));
        flags.insert(Cell(1, 1));
        assert!(!board.won(&flags));
    }

    #[test]
    fn display_marks_mines() {
        let board = Board::from_mines(BoardSize::new(1, 2), vec![Cell(0, 1)]);
        assert_eq!(board.to_string(), "-----\n| |X|\n-----\n");
    }

    #[test]
    fn render_shows_the_players_view() {
        let board = Board::from_mines(BoardSize::new(2, 2), vec![Cell(1, 1)]);
        let mut revealed = HashMap::new();
        revealed.insert(Cell(0, 0), 1);
        let mut flags = HashSet::new();
        flags.insert(Cell(1, 1));
        assert_eq!(board.render(&revealed, &flags), "  01\n0 1□\n1 □▶\n");
    }

    proptest! {
        #[test]
        fn places_requested_mines(seed in any::<u64>(), width in 1..20usize,
                                  height in 1..20usize, mines in 0..500usize) {
            let size = BoardSize::new(height, width);
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(size, mines, &mut rng);
            prop_assert_eq!(board.mine_count(), mines.min(size.area()));
            prop_assert!(board.mines().iter().all(|cell| size.contains(cell)));
        }

        #[test]
        fn nearby_mines_is_bounded(seed in any::<u64>(), row in 0..6usize, col in 0..6usize) {
            let size = BoardSize::new(6, 6);
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(size, 12, &mut rng);
            let cell = Cell(row, col);
            prop_assert!(board.nearby_mines(&cell) <= size.neighbors(&cell).len());
        }
    }
}
