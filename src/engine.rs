//! Board representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable 3x3 arrangement of the symbols 0-8, where 0 is the blank.
//! - `Move`: a direction in which the blank can slide.
//!
//! Boards are small `Copy` values. Every move produces a new board rather than
//! mutating a shared one, which keeps them usable as hash-map keys during search.
use crate::error::InputProblem;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Width (and height) of the board.
pub const BOARD_WIDTH: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// The symbol used for the blank cell.
pub const BLANK: u8 = 0;

/// A direction the blank can move in.
///
/// Moving the blank `Up` swaps it with the tile directly above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset of the blank for this move.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An 8-puzzle board stored in row-major order.
///
/// A `Board` always holds each symbol 0-8 exactly once. The only ways to obtain
/// one are [`Board::from_cells`] (validated), [`Board::solved`], the random
/// constructors, and moving the blank of an existing board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [u8; CELL_COUNT],
    blank: u8,
}

impl Board {
    /// Creates a board from nine symbols, checking that they form a permutation of 0-8.
    ///
    /// # Arguments
    /// * `cells`: The symbols in row-major order.
    ///
    /// # Returns
    /// * `Ok(Board)` if every symbol 0-8 appears exactly once.
    /// * `Err(InputProblem)` naming the first out-of-range or repeated symbol.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert_eq!(board.blank_index(), 8);
    /// assert!(Board::from_cells([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
    /// ```
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self, InputProblem> {
        let mut seen = [false; CELL_COUNT];
        let mut blank = 0;
        for (index, &digit) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(digit as usize)
                .ok_or(InputProblem::DigitOutOfRange { digit, index })?;
            if *slot {
                return Err(InputProblem::Duplicate { digit });
            }
            *slot = true;
            if digit == BLANK {
                blank = index as u8;
            }
        }
        // Nine distinct symbols drawn from 0-8 cover all of them, blank included.
        Ok(Board { cells, blank })
    }

    /// The conventional goal layout `123456780`.
    pub fn solved() -> Self {
        Board {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
            blank: 8,
        }
    }

    /// Creates a board with all nine symbols shuffled by a seeded RNG.
    ///
    /// The same seed always yields the same board. The result may or may not be
    /// solvable with respect to any particular goal.
    pub fn random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells = Board::solved().cells;
        cells.shuffle(&mut rng);
        let blank = cells.iter().position(|&c| c == BLANK).unwrap_or(0) as u8;
        Board { cells, blank }
    }

    /// Walks the blank randomly away from `goal` for `moves` steps.
    ///
    /// A step never undoes the one before it. Because every step is a legal move,
    /// the returned board can always reach `goal` again.
    pub fn scrambled(goal: &Board, moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = *goal;
        let mut last: Option<Move> = None;
        for _ in 0..moves {
            let options: Vec<(Move, Board)> = board
                .successors()
                .into_iter()
                .filter(|(mv, _)| Some(mv.opposite()) != last)
                .collect();
            if let Some(&(mv, next)) = options.choose(&mut rng) {
                board = next;
                last = Some(mv);
            }
        }
        board
    }

    /// The symbols in row-major order.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Returns the symbol at row `r` and column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `BOARD_WIDTH`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.cells[r * BOARD_WIDTH + c]
    }

    /// Index of the blank cell, in `0..CELL_COUNT`.
    pub fn blank_index(&self) -> usize {
        self.blank as usize
    }

    /// Position of every symbol, indexed by symbol.
    ///
    /// Heuristics look up goal positions through this table instead of scanning
    /// the goal board once per tile.
    pub fn positions(&self) -> [usize; CELL_COUNT] {
        let mut positions = [0; CELL_COUNT];
        for (index, &symbol) in self.cells.iter().enumerate() {
            positions[symbol as usize] = index;
        }
        positions
    }

    /// Returns the board obtained by moving the blank, or `None` if that would
    /// leave the grid.
    pub fn try_move(&self, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.as_offset();
        let blank = self.blank_index();
        let row = (blank / BOARD_WIDTH) as isize + dr;
        let col = (blank % BOARD_WIDTH) as isize + dc;
        if row < 0 || row >= BOARD_WIDTH as isize || col < 0 || col >= BOARD_WIDTH as isize {
            return None;
        }
        let target = row as usize * BOARD_WIDTH + col as usize;
        let mut next = *self;
        next.cells.swap(blank, target);
        next.blank = target as u8;
        Some(next)
    }

    /// Moves the blank in place. Returns `false` and leaves the board unchanged
    /// if the move is off the grid.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        match self.try_move(mv) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// All legal moves together with the boards they produce, in `Move::ALL` order.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.try_move(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Boards reachable with a single move (2 to 4 of them).
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// // Blank in a corner has two neighbours.
    /// assert_eq!(Board::solved().neighbors().len(), 2);
    /// ```
    pub fn neighbors(&self) -> Vec<Board> {
        self.successors().into_iter().map(|(_, next)| next).collect()
    }

    /// The move that turns `self` into `next`, if they are one move apart.
    pub fn move_between(&self, next: &Board) -> Option<Move> {
        self.successors()
            .into_iter()
            .find(|(_, candidate)| candidate == next)
            .map(|(mv, _)| mv)
    }

    /// The board as a nine-digit string, e.g. `"123456780"`.
    pub fn to_digit_string(&self) -> String {
        self.cells.iter().map(|&c| char::from(b'0' + c)).collect()
    }
}

impl fmt::Display for Board {
    /// Three lines of three digits, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &symbol in row {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u8; CELL_COUNT]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn test_from_cells_valid() {
        let b = board([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(b.blank_index(), 4);
        assert_eq!(b.get_tile(0, 0), 8);
        assert_eq!(b.get_tile(2, 2), 5);
    }

    #[test]
    fn test_from_cells_rejects_duplicates_and_range() {
        assert_eq!(
            Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(InputProblem::Duplicate { digit: 8 })
        );
        assert_eq!(
            Board::from_cells([1, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(InputProblem::DigitOutOfRange { digit: 9, index: 7 })
        );
    }

    #[test]
    fn test_solved_board() {
        let b = Board::solved();
        assert_eq!(b.to_digit_string(), "123456780");
        assert_eq!(b.blank_index(), 8);
        assert_eq!(b, board([1, 2, 3, 4, 5, 6, 7, 8, 0]));
    }

    #[test]
    fn test_neighbors_center_blank() {
        let b = board([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let next: Vec<String> = b.neighbors().iter().map(|n| n.to_digit_string()).collect();
        assert_eq!(
            next,
            vec!["103425678", "123475608", "123045678", "123450678"]
        );
    }

    #[test]
    fn test_neighbors_respect_edges() {
        // Blank on the left edge must not wrap to the previous row.
        let b = board([1, 2, 3, 0, 4, 5, 6, 7, 8]);
        let moves: Vec<Move> = b.successors().iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Down, Move::Right]);

        let corner = board([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(corner.neighbors().len(), 2);
        assert!(corner.try_move(Move::Up).is_none());
        assert!(corner.try_move(Move::Left).is_none());
    }

    #[test]
    fn test_apply_move_and_opposite() {
        let start = Board::solved();
        let mut b = start;
        assert!(b.apply_move(Move::Left));
        assert_eq!(b.to_digit_string(), "123456708");
        assert!(!b.apply_move(Move::Down));
        assert_eq!(b.to_digit_string(), "123456708");
        assert!(b.apply_move(Move::Left.opposite()));
        assert_eq!(b, start);
    }

    #[test]
    fn test_move_between() {
        let a = Board::solved();
        let b = a.try_move(Move::Up).unwrap();
        assert_eq!(a.move_between(&b), Some(Move::Up));
        assert_eq!(b.move_between(&a), Some(Move::Down));
        assert_eq!(a.move_between(&a), None);
    }

    #[test]
    fn test_positions() {
        let b = board([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        let pos = b.positions();
        assert_eq!(pos[0], 4);
        assert_eq!(pos[8], 0);
        assert_eq!(pos[5], 8);
    }

    #[test]
    fn test_random_with_seed_determinism() {
        let a = Board::random_with_seed(42);
        let b = Board::random_with_seed(42);
        assert_eq!(a, b);
        // Still a valid permutation.
        assert!(Board::from_cells(*a.cells()).is_ok());
        assert_eq!(a.get_tile(a.blank_index() / 3, a.blank_index() % 3), BLANK);
    }

    #[test]
    fn test_scrambled_is_reproducible() {
        let goal = Board::solved();
        let a = Board::scrambled(&goal, 25, 7);
        assert_eq!(a, Board::scrambled(&goal, 25, 7));
        assert_eq!(Board::scrambled(&goal, 0, 7), goal);
    }

    #[test]
    fn test_display_board_formatting() {
        let b = board([8, 1, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(format!("{}", b), "813\n402\n765");
        assert_eq!(Move::Left.to_string(), "Left");
    }
}
