//! Reachability test between two boards.
//!
//! On a board of odd width a blank move never changes the parity of the number
//! of inversions among the tiles, and every arrangement with matching parity is
//! reachable. Comparing parities is therefore an exact test for the 3x3 puzzle.

use crate::engine::{Board, BLANK};
use crate::error::{PuzzleError, Result};
use tracing::warn;

/// Counts pairs of tiles (blank ignored) that appear in decreasing order when
/// the board is read row by row.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::solvability::inversions;
///
/// assert_eq!(inversions(&Board::solved()), 0);
/// assert_eq!(inversions(&"213456780".parse().unwrap()), 1);
/// ```
pub fn inversions(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .cells()
        .iter()
        .copied()
        .filter(|&c| c != BLANK)
        .collect();

    tiles
        .iter()
        .enumerate()
        .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count() as u32)
        .sum()
}

/// Returns `true` if `goal` can be reached from `start`.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}

/// Like [`is_solvable`], but reports a mismatch as `PuzzleError::Unsolvable`
/// carrying both inversion counts.
pub fn ensure_solvable(start: &Board, goal: &Board) -> Result<()> {
    let start_inversions = inversions(start);
    let goal_inversions = inversions(goal);
    if start_inversions % 2 != goal_inversions % 2 {
        warn!(
            start = %start.to_digit_string(),
            goal = %goal.to_digit_string(),
            start_inversions,
            goal_inversions,
            "inversion parities differ, skipping search"
        );
        return Err(PuzzleError::Unsolvable {
            start_inversions,
            goal_inversions,
        });
    }
    Ok(())
}
