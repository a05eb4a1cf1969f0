//! Distance estimates used to guide the A* search.
//!
//! Every estimator takes a board and the goal board and returns a lower bound on
//! the number of moves still needed. They are pure functions; the search picks
//! one through [`HeuristicKind`].
use crate::engine::{Board, BLANK, BOARD_WIDTH, CELL_COUNT};
use clap::ValueEnum;
use std::fmt;

/// Goal position of each symbol, indexed by symbol. See [`Board::positions`].
pub type GoalPositions = [usize; CELL_COUNT];

/// Selects which estimator a search run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum HeuristicKind {
    /// Number of tiles not on their goal cell.
    Misplaced,
    /// Sum of the tiles' grid distances to their goal cells.
    Manhattan,
    /// Manhattan distance plus two moves for every linear conflict.
    LinearConflict,
}

impl HeuristicKind {
    /// All heuristics, from weakest to most informed.
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Misplaced,
        HeuristicKind::Manhattan,
        HeuristicKind::LinearConflict,
    ];

    /// Human-readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Misplaced => "Misplaced Tiles",
            HeuristicKind::Manhattan => "Manhattan Distance",
            HeuristicKind::LinearConflict => "Linear Conflict",
        }
    }

    /// Estimates the remaining moves from `board` to `goal`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// use eight_puzzle_solver::heuristics::HeuristicKind;
    ///
    /// let goal = Board::solved();
    /// let board: Board = "123456708".parse().unwrap();
    /// for kind in HeuristicKind::ALL {
    ///     assert_eq!(kind.evaluate(&goal, &goal), 0);
    ///     assert_eq!(kind.evaluate(&board, &goal), 1);
    /// }
    /// ```
    pub fn evaluate(&self, board: &Board, goal: &Board) -> u32 {
        self.evaluate_with(board, &goal.positions())
    }

    /// Same as [`HeuristicKind::evaluate`], with the goal already turned into a
    /// position table. The search calls this once per generated board.
    pub fn evaluate_with(&self, board: &Board, goal: &GoalPositions) -> u32 {
        match self {
            HeuristicKind::Misplaced => misplaced_with(board, goal),
            HeuristicKind::Manhattan => manhattan_with(board, goal),
            HeuristicKind::LinearConflict => {
                manhattan_with(board, goal) + 2 * conflicts_with(board, goal)
            }
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts the tiles (blank excluded) that are not where `goal` has them.
pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    misplaced_with(board, &goal.positions())
}

/// Sums, over all tiles except the blank, the row distance plus the column
/// distance between the tile's cell and its goal cell.
pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    manhattan_with(board, &goal.positions())
}

/// Counts linear conflicts between pairs of tiles.
///
/// Two tiles conflict when they share a row, both belong in that row at the goal,
/// and they are in the opposite left-to-right order from the goal. Columns are
/// checked the same way, independently of rows.
pub fn linear_conflicts(board: &Board, goal: &Board) -> u32 {
    conflicts_with(board, &goal.positions())
}

/// Manhattan distance plus two for every linear conflict.
///
/// Each conflicting pair needs at least two moves beyond the Manhattan distance,
/// since one of the tiles has to step out of the line and back.
pub fn linear_conflict(board: &Board, goal: &Board) -> u32 {
    let goal = goal.positions();
    manhattan_with(board, &goal) + 2 * conflicts_with(board, &goal)
}

fn misplaced_with(board: &Board, goal: &GoalPositions) -> u32 {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(index, &symbol)| symbol != BLANK && goal[symbol as usize] != index)
        .count() as u32
}

fn manhattan_with(board: &Board, goal: &GoalPositions) -> u32 {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &symbol)| symbol != BLANK)
        .map(|(index, &symbol)| {
            let target = goal[symbol as usize];
            let row_distance = (index / BOARD_WIDTH).abs_diff(target / BOARD_WIDTH);
            let col_distance = (index % BOARD_WIDTH).abs_diff(target % BOARD_WIDTH);
            (row_distance + col_distance) as u32
        })
        .sum()
}

fn conflicts_with(board: &Board, goal: &GoalPositions) -> u32 {
    let mut conflicts = 0;

    for line in 0..BOARD_WIDTH {
        for i in 0..BOARD_WIDTH - 1 {
            for j in i + 1..BOARD_WIDTH {
                // Row `line`, columns i < j.
                let first = board.get_tile(line, i);
                let second = board.get_tile(line, j);
                if first != BLANK && second != BLANK {
                    let t1 = goal[first as usize];
                    let t2 = goal[second as usize];
                    if t1 / BOARD_WIDTH == line && t2 / BOARD_WIDTH == line && t1 > t2 {
                        conflicts += 1;
                    }
                }

                // Column `line`, rows i < j.
                let first = board.get_tile(i, line);
                let second = board.get_tile(j, line);
                if first != BLANK && second != BLANK {
                    let t1 = goal[first as usize];
                    let t2 = goal[second as usize];
                    if t1 % BOARD_WIDTH == line && t2 % BOARD_WIDTH == line && t1 > t2 {
                        conflicts += 1;
                    }
                }
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_goal_scores_zero() {
        for seed in 0..20 {
            let goal = Board::random_with_seed(seed);
            for kind in HeuristicKind::ALL {
                assert_eq!(kind.evaluate(&goal, &goal), 0, "{} on goal", kind);
            }
        }
    }

    #[test]
    fn test_misplaced_tiles() {
        let goal = Board::solved();
        // The blank is out of place too, but is not counted.
        assert_eq!(misplaced_tiles(&board("123456708"), &goal), 1);
        assert_eq!(misplaced_tiles(&board("813402765"), &goal), 5);
    }

    #[test]
    fn test_manhattan_distance() {
        let goal = Board::solved();
        assert_eq!(manhattan_distance(&board("123456708"), &goal), 1);
        // 8:3 1:1 3:0 4:0 2:2 7:0 6:2 5:2
        assert_eq!(manhattan_distance(&board("813402765"), &goal), 10);
    }

    #[test]
    fn test_linear_conflicts_rows() {
        let goal = Board::solved();
        // 2 and 1 are both in their goal row, reversed.
        let b = board("213456780");
        assert_eq!(linear_conflicts(&b, &goal), 1);
        assert_eq!(linear_conflict(&b, &goal), manhattan_distance(&b, &goal) + 2);

        // 3 2 1 reversed: every pair conflicts.
        assert_eq!(linear_conflicts(&board("321456780"), &goal), 3);
    }

    #[test]
    fn test_linear_conflicts_columns() {
        let goal = Board::solved();
        // 4 above 1 in column 0, both belong to that column.
        let b = board("423156780");
        assert_eq!(linear_conflicts(&b, &goal), 1);
        assert_eq!(manhattan_distance(&b, &goal), 2);
        assert_eq!(linear_conflict(&b, &goal), 4);
    }

    #[test]
    fn test_linear_conflicts_ignore_tiles_from_other_lines() {
        let goal = Board::solved();
        // 5 precedes 1 and 2 in row 0 but belongs to row 1, so it cannot conflict there.
        assert_eq!(linear_conflicts(&board("512346780"), &goal), 0);
    }

    #[test]
    fn test_kind_dispatch_matches_functions() {
        let goal = board("123804765");
        for seed in 0..30 {
            let b = Board::random_with_seed(seed);
            assert_eq!(
                HeuristicKind::Misplaced.evaluate(&b, &goal),
                misplaced_tiles(&b, &goal)
            );
            assert_eq!(
                HeuristicKind::Manhattan.evaluate(&b, &goal),
                manhattan_distance(&b, &goal)
            );
            assert_eq!(
                HeuristicKind::LinearConflict.evaluate(&b, &goal),
                linear_conflict(&b, &goal)
            );
        }
    }

    #[test]
    fn test_heuristics_are_ordered() {
        let goal = Board::solved();
        for seed in 0..100 {
            let b = Board::random_with_seed(seed);
            let misplaced = misplaced_tiles(&b, &goal);
            let manhattan = manhattan_distance(&b, &goal);
            let conflict = linear_conflict(&b, &goal);
            assert!(misplaced <= manhattan);
            assert!(manhattan <= conflict);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(HeuristicKind::Misplaced.to_string(), "Misplaced Tiles");
        assert_eq!(HeuristicKind::Manhattan.name(), "Manhattan Distance");
        assert_eq!(HeuristicKind::LinearConflict.name(), "Linear Conflict");
    }
}
