use crate::engine::Board;
use crate::heuristics::{GoalPositions, HeuristicKind};
use crate::report::RunReport;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, info};

/// How a search run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was popped from the frontier after `cost` moves.
    Found { cost: u32 },
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

/// A frontier entry: a board together with its path cost and estimate.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed on `f`. Among equal
/// `f` the entry with the larger `g` is popped first.
#[derive(Clone, Copy, Debug)]
struct Node {
    board: Board,
    g: u32,
    f: u32,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| self.g.cmp(&other.g))
    }
}

/// Per-run bookkeeping. Nothing here outlives a single call to [`solve_astar`].
struct SearchIndex {
    closed: HashSet<Board>,
    /// Predecessor of every discovered board; `None` marks the start.
    parents: HashMap<Board, Option<Board>>,
    /// Lowest `g` pushed so far for every discovered board.
    best_g: HashMap<Board, u32>,
}

impl SearchIndex {
    fn new(start: Board) -> Self {
        let mut parents = HashMap::new();
        parents.insert(start, None);
        let mut best_g = HashMap::new();
        best_g.insert(start, 0);
        SearchIndex {
            closed: HashSet::new(),
            parents,
            best_g,
        }
    }

    /// An entry is stale if its board was already expanded, or a cheaper path to
    /// it has been pushed since.
    fn is_stale(&self, node: &Node) -> bool {
        self.closed.contains(&node.board)
            || self.best_g.get(&node.board).is_some_and(|&g| node.g > g)
    }

    /// Records `parent -> board` at cost `g` if that is the first or a strictly
    /// cheaper way to reach `board`. Returns whether the board should be pushed.
    fn relax(&mut self, board: Board, parent: Board, g: u32) -> bool {
        if self.best_g.get(&board).is_some_and(|&known| g >= known) {
            return false;
        }
        self.best_g.insert(board, g);
        self.parents.insert(board, Some(parent));
        true
    }
}

/// Runs A* from `start` to `goal` guided by `heuristic`.
///
/// The caller is expected to have checked solvability first; on an unsolvable
/// pair the search still terminates, after visiting every reachable board, with
/// `SearchOutcome::Exhausted`.
///
/// # Arguments
/// * `start`: The initial board.
/// * `goal`: The board to reach.
/// * `heuristic`: Which estimator orders the frontier.
/// * `record_path`: Whether to rebuild the start-to-goal sequence of boards.
///
/// # Returns
/// A [`RunReport`] holding the outcome, the number of frontier pops (stale
/// entries included), the time spent searching, and the path if requested.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::HeuristicKind;
/// use eight_puzzle_solver::solver::solve_astar;
///
/// let start: Board = "123456708".parse().unwrap();
/// let report = solve_astar(&start, &Board::solved(), HeuristicKind::Manhattan, true);
/// assert_eq!(report.path_length(), Some(1));
/// assert_eq!(report.path.unwrap().len(), 2);
/// ```
pub fn solve_astar(
    start: &Board,
    goal: &Board,
    heuristic: HeuristicKind,
    record_path: bool,
) -> RunReport {
    info!(
        event = "search_start",
        heuristic = heuristic.name(),
        start = %start.to_digit_string(),
        goal = %goal.to_digit_string(),
    );

    let goal_positions: GoalPositions = goal.positions();
    let started = Instant::now();

    let mut frontier = BinaryHeap::new();
    let mut index = SearchIndex::new(*start);
    let h = heuristic.evaluate_with(start, &goal_positions);
    frontier.push(Node {
        board: *start,
        g: 0,
        f: h,
    });

    let mut nodes_removed: u64 = 0;
    let mut stale_pops: u64 = 0;
    let mut outcome = SearchOutcome::Exhausted;

    while let Some(current) = frontier.pop() {
        nodes_removed += 1;

        if index.is_stale(&current) {
            stale_pops += 1;
            debug!(board = %current.board.to_digit_string(), g = current.g, "discarding stale entry");
            continue;
        }

        if current.board == *goal {
            outcome = SearchOutcome::Found { cost: current.g };
            break;
        }

        index.closed.insert(current.board);

        for neighbor in current.board.neighbors() {
            if index.closed.contains(&neighbor) {
                continue;
            }
            let g = current.g + 1;
            if index.relax(neighbor, current.board, g) {
                let h = heuristic.evaluate_with(&neighbor, &goal_positions);
                frontier.push(Node {
                    board: neighbor,
                    g,
                    f: g + h,
                });
            }
        }
    }

    let elapsed = started.elapsed();

    let cost = match outcome {
        SearchOutcome::Found { cost } => Some(cost),
        SearchOutcome::Exhausted => None,
    };
    info!(
        event = "search_end",
        heuristic = heuristic.name(),
        solved = cost.is_some(),
        cost = ?cost,
        nodes_removed,
        stale_pops,
        elapsed_us = elapsed.as_micros() as u64,
    );

    let path = match outcome {
        SearchOutcome::Found { .. } if record_path => Some(reconstruct_path(&index.parents, goal)),
        _ => None,
    };

    RunReport {
        heuristic,
        outcome,
        nodes_removed,
        nodes_expanded: index.closed.len() as u64,
        stale_pops,
        elapsed,
        path,
    }
}

/// Follows parent links back from `goal` and returns the boards in start-to-goal
/// order. The walk stops at the first board without a recorded parent.
pub fn reconstruct_path(parents: &HashMap<Board, Option<Board>>, goal: &Board) -> Vec<Board> {
    let mut path = vec![*goal];
    let mut step = parents.get(goal).copied().flatten();
    while let Some(board) = step {
        path.push(board);
        step = parents.get(&board).copied().flatten();
    }
    path.reverse();
    path
}
