//! Error types for the 8-puzzle solver.
//!
//! Only pre-flight failures are errors. A search that exhausts the reachable
//! states is reported through [`crate::solver::SearchOutcome::Exhausted`].

use thiserror::Error;

/// Why a board string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputProblem {
    /// The text did not contain exactly nine characters.
    #[error("expected 9 characters, found {0}")]
    WrongLength(usize),

    /// A character that is not an ASCII digit.
    #[error("non-digit character '{ch}' at position {index}")]
    NonDigit { ch: char, index: usize },

    /// The digit 9 cannot appear on a 3x3 board.
    #[error("digit {digit} at position {index} is outside 0-8")]
    DigitOutOfRange { digit: u8, index: usize },

    /// A digit appeared more than once (so another one is missing).
    #[error("digit {digit} appears more than once")]
    Duplicate { digit: u8 },
}

/// Main error type for puzzle operations.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Malformed board text.
    #[error("invalid board '{input}': {reason}")]
    InvalidInput { input: String, reason: InputProblem },

    /// Start and goal have different inversion parity, so no search is run.
    #[error(
        "start cannot reach goal: inversion parities differ ({start_inversions} vs {goal_inversions})"
    )]
    Unsolvable {
        start_inversions: u32,
        goal_inversions: u32,
    },

    /// Failure while writing a report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
