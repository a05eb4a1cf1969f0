//! Per-heuristic results and their text rendering.
//!
//! - `RunReport`: what one A* run produced.
//! - `Experiment`: the three runs for one start/goal pair, gated by the
//!   solvability check. Its `Display` output is the text written to the
//!   results file by the `puzzle_solver` binary.
use crate::engine::{Board, Move};
use crate::error::Result;
use crate::heuristics::HeuristicKind;
use crate::solvability::ensure_solvable;
use crate::solver::{solve_astar, SearchOutcome};
use std::fmt;
use std::time::Duration;

const RULE: &str = "======================================";

/// Outcome of a single search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// The heuristic that guided the run.
    pub heuristic: HeuristicKind,
    pub outcome: SearchOutcome,
    /// Frontier pops, counting entries that were discarded as stale.
    pub nodes_removed: u64,
    /// Boards taken off the frontier and expanded (the closed set's final size).
    pub nodes_expanded: u64,
    /// Pops discarded because the board was already closed or reached more cheaply.
    pub stale_pops: u64,
    /// Time from frontier creation until the run ended.
    pub elapsed: Duration,
    /// Boards from start to goal, present only if the path was requested and found.
    pub path: Option<Vec<Board>>,
}

impl RunReport {
    /// Whether the goal was reached.
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }

    /// Number of moves in the solution, if one was found.
    pub fn path_length(&self) -> Option<u32> {
        match self.outcome {
            SearchOutcome::Found { cost } => Some(cost),
            SearchOutcome::Exhausted => None,
        }
    }

    /// The recorded path as blank moves, for replaying from the start board.
    ///
    /// Returns `None` when no path was recorded.
    pub fn moves(&self) -> Option<Vec<Move>> {
        let path = self.path.as_ref()?;
        path.windows(2)
            .map(|pair| pair[0].move_between(&pair[1]))
            .collect()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Heuristic: {}", self.heuristic)?;
        writeln!(f, "{}", RULE)?;

        let cost = match self.outcome {
            SearchOutcome::Found { cost } => cost,
            SearchOutcome::Exhausted => return writeln!(f, "Failed to find a solution.\n"),
        };

        writeln!(f, "Status: Solution Found!")?;
        writeln!(f, "- Running Time: {} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "- Solution Length (depth): {}", cost)?;
        writeln!(f, "- Nodes Removed from Frontier: {}", self.nodes_removed)?;
        writeln!(f)?;

        if let Some(path) = &self.path {
            writeln!(f, "--- Step-by-Step Path ({}) ---", self.heuristic)?;
            for (step, board) in path.iter().enumerate() {
                writeln!(f, "Step {}:", step)?;
                writeln!(f, "{}\n", board)?;
            }
        }
        Ok(())
    }
}

/// All heuristic runs for one start/goal pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Experiment {
    pub start: Board,
    pub goal: Board,
    /// One report per heuristic, in `HeuristicKind::ALL` order.
    pub reports: Vec<RunReport>,
}

impl Experiment {
    /// The report produced with `kind`.
    pub fn report(&self, kind: HeuristicKind) -> Option<&RunReport> {
        self.reports.iter().find(|r| r.heuristic == kind)
    }
}

/// Checks solvability, then runs an independent A* search with every heuristic.
///
/// Each run starts from a fresh frontier and closed set. The step-by-step path
/// is only rebuilt for `path_for`.
///
/// # Returns
/// * `Ok(Experiment)` with three reports.
/// * `Err(PuzzleError::Unsolvable)` if the inversion parities differ. No search
///   is run in that case.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::HeuristicKind;
/// use eight_puzzle_solver::report::run_experiment;
///
/// let goal = Board::solved();
/// let start: Board = "123405786".parse().unwrap();
/// let experiment = run_experiment(&start, &goal, Some(HeuristicKind::LinearConflict)).unwrap();
/// assert!(experiment.reports.iter().all(|r| r.path_length() == Some(2)));
///
/// let unreachable: Board = "213456780".parse().unwrap();
/// assert!(run_experiment(&unreachable, &goal, None).is_err());
/// ```
pub fn run_experiment(
    start: &Board,
    goal: &Board,
    path_for: Option<HeuristicKind>,
) -> Result<Experiment> {
    ensure_solvable(start, goal)?;

    let reports = HeuristicKind::ALL
        .iter()
        .map(|&kind| solve_astar(start, goal, kind, path_for == Some(kind)))
        .collect();

    Ok(Experiment {
        start: *start,
        goal: *goal,
        reports,
    })
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "8-Puzzle Experimentation Results")?;
        writeln!(f, "Start State: {}", self.start.to_digit_string())?;
        writeln!(f, "Goal State:  {}", self.goal.to_digit_string())?;
        writeln!(f)?;
        for report in &self.reports {
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}
