use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::HeuristicKind;
use eight_puzzle_solver::report::run_experiment;
use eight_puzzle_solver::utils::init_tracing;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare the A* heuristics on random solvable boards", long_about = None)]
struct Args {
    /// Number of random boards to solve
    #[clap(short = 'n', long, default_value_t = 20)]
    boards: u64,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Length of the random walk away from the goal used to build each board
    #[clap(short = 'm', long, default_value_t = 40)]
    scramble_moves: usize,
}

#[derive(Default)]
struct Totals {
    nodes_removed: u64,
    stale_pops: u64,
    elapsed: Duration,
    path_length: u64,
    solved: u64,
}

/// Seed for the `board_idx`-th board. Wraps so a `--seed` near `u64::MAX` still works.
fn board_seed(base: u64, board_idx: u64) -> u64 {
    base.wrapping_add(board_idx)
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let goal = Board::solved();

    let mut totals: BTreeMap<HeuristicKind, Totals> = BTreeMap::new();
    let mut disagreements = 0;

    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = board_seed(args.seed, board_idx);
        let start = Board::scrambled(&goal, args.scramble_moves, current_seed);

        println!(
            "\nEvaluating Board {} (Seed: {}): {}",
            board_idx,
            current_seed,
            start.to_digit_string()
        );

        let experiment = match run_experiment(&start, &goal, None) {
            Ok(experiment) => experiment,
            Err(err) => {
                warn!(seed = current_seed, %err, "skipping board");
                continue;
            }
        };

        for kind in HeuristicKind::ALL {
            let Some(report) = experiment.report(kind) else {
                continue;
            };
            let entry = totals.entry(kind).or_default();
            entry.nodes_removed += report.nodes_removed;
            entry.stale_pops += report.stale_pops;
            entry.elapsed += report.elapsed;
            if report.is_solved() {
                entry.path_length += report.path_length().map_or(0, u64::from);
                entry.solved += 1;
            }
            println!(
                "  Heuristic: {:<20} Length: {:<4} Nodes removed: {:<8} Stale: {:<6} Time: {:.6}s",
                kind.name(),
                report
                    .path_length()
                    .map_or_else(|| "-".to_string(), |l| l.to_string()),
                report.nodes_removed,
                report.stale_pops,
                report.elapsed.as_secs_f64()
            );
        }

        let first = experiment.reports.first().and_then(|r| r.path_length());
        if experiment.reports.iter().any(|r| r.path_length() != first) {
            disagreements += 1;
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!(
        "Heuristics evaluated: {}",
        HeuristicKind::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("Boards where heuristics disagreed on solution length: {}", disagreements);
    println!("\n--- Averages ---");

    for (kind, total) in &totals {
        if total.solved == 0 {
            println!("Heuristic {}: No solutions recorded.", kind.name());
            continue;
        }
        let solved = total.solved as f64;
        println!(
            "Heuristic {:<20}: Nodes Removed = {:.1} (stale {:.1}), Solution Length = {:.2}, Time = {:.6}s",
            kind.name(),
            total.nodes_removed as f64 / solved,
            total.stale_pops as f64 / solved,
            total.path_length as f64 / solved,
            total.elapsed.as_secs_f64() / solved
        );
    }
}
