//! # 8-Puzzle Solver Library
//!
//! This library solves the 3x3 sliding tile puzzle with A* search and compares
//! three heuristics on the same start/goal pair.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Reads a start and a goal board, runs every heuristic and
//!   writes a results report, including the step-by-step solution for one of them.
//! - `heuristic_evaluator`: Solves a batch of reproducible random boards and
//!   prints how much work each heuristic needed on average.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), blank moves (`Move`) and
//!   successor generation.
//! - `utils`: Parsing boards from nine-digit strings.
//! - `solvability`: The inversion-parity test that gates every search.
//! - `heuristics`: The Misplaced Tiles, Manhattan Distance and Linear Conflict
//!   estimators and the `HeuristicKind` selector.
//! - `solver`: The A* search itself (`solve_astar`).
//! - `report`: Per-run reports, the three-heuristic `Experiment` and its text form.
//! - `error`: `PuzzleError` and the crate `Result` alias.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod report;
pub mod solvability;
pub mod solver;
pub mod utils;

pub use error::{PuzzleError, Result};
