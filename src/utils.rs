use crate::engine::{Board, CELL_COUNT};
use crate::error::{InputProblem, PuzzleError, Result};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parses a nine-character string into a `Board`.
///
/// The string lists the cells in row-major order using the digits `0`-`8`, with
/// `0` standing for the blank. Surrounding whitespace is not accepted; callers
/// reading from a terminal should trim first.
///
/// # Arguments
/// * `s`: The board text, e.g. `"123456780"`.
///
/// # Returns
/// * `Ok(Board)` if `s` is a permutation of the digits 0-8.
/// * `Err(PuzzleError::InvalidInput)` if:
///     - `s` is not exactly nine characters long.
///     - A character is not a digit, or is the digit `9`.
///     - A digit is repeated (which also means another one is missing).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("813402765").unwrap();
/// assert_eq!(board.blank_index(), 4);
/// assert_eq!(board.get_tile(0, 0), 8);
///
/// assert!(board_from_str("12345678").is_err());
/// assert!(board_from_str("1234567a0").is_err());
/// assert!(board_from_str("113456780").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board> {
    let invalid = |reason: InputProblem| PuzzleError::InvalidInput {
        input: s.to_string(),
        reason,
    };

    let length = s.chars().count();
    if length != CELL_COUNT {
        return Err(invalid(InputProblem::WrongLength(length)));
    }

    let mut cells = [0u8; CELL_COUNT];
    for (index, ch) in s.chars().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(InputProblem::NonDigit { ch, index })
            .map_err(invalid)?;
        cells[index] = digit as u8;
    }

    Board::from_cells(cells).map_err(invalid)
}

impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        board_from_str(s)
    }
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, defaulting to
/// warnings only. Safe to call more than once; later calls have no effect.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(input: &str) -> InputProblem {
        match board_from_str(input) {
            Err(PuzzleError::InvalidInput { reason, .. }) => reason,
            other => panic!("expected invalid input for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str("123456780").unwrap();
        assert_eq!(board, Board::solved());
        let parsed: Board = "087654321".parse().unwrap();
        assert_eq!(parsed.blank_index(), 0);
        assert_eq!(parsed.get_tile(2, 2), 1);
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        assert_eq!(reason_of(""), InputProblem::WrongLength(0));
        assert_eq!(reason_of("12345678"), InputProblem::WrongLength(8));
        assert_eq!(reason_of("1234567801"), InputProblem::WrongLength(10));
    }

    #[test]
    fn test_board_from_str_non_digit() {
        assert_eq!(
            reason_of("12345678x"),
            InputProblem::NonDigit { ch: 'x', index: 8 }
        );
        assert_eq!(
            reason_of("1234 5678"),
            InputProblem::NonDigit { ch: ' ', index: 4 }
        );
    }

    #[test]
    fn test_board_from_str_out_of_range_digit() {
        assert_eq!(
            reason_of("923456781"),
            InputProblem::DigitOutOfRange { digit: 9, index: 0 }
        );
    }

    #[test]
    fn test_board_from_str_duplicate_digit() {
        assert_eq!(reason_of("123456700"), InputProblem::Duplicate { digit: 0 });
        // No blank at all: 1 repeated in its place.
        assert_eq!(reason_of("123456781"), InputProblem::Duplicate { digit: 1 });
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_error_message_mentions_input() {
        let err = board_from_str("12345678x").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("12345678x"));
        assert!(message.contains("non-digit character 'x'"));
    }
}
