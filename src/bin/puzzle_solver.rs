use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::HeuristicKind;
use eight_puzzle_solver::report::run_experiment;
use eight_puzzle_solver::utils::{board_from_str, init_tracing};
use eight_puzzle_solver::{PuzzleError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "8-Puzzle multi-heuristic evaluator", long_about = None)]
struct Args {
    /// Start board: 9 digits, 0 for the blank. Prompted for if omitted.
    start: Option<String>,

    /// Goal board: 9 digits, 0 for the blank. Prompted for if omitted.
    goal: Option<String>,

    /// File the results report is written to
    #[clap(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Heuristic whose step-by-step path is included in the report
    #[clap(long, value_enum, default_value = "linear-conflict")]
    path_heuristic: HeuristicKind,

    /// Leave the step-by-step path out of the report
    #[clap(long)]
    no_path: bool,

    /// Print the report to stdout instead of writing the output file
    #[clap(long)]
    stdout: bool,
}

fn prompt_board(label: &str) -> Result<Board> {
    print!("Enter {} State (9 digits, use '0' for blank): ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    board_from_str(input.trim())
}

fn read_board(arg: Option<&str>, label: &str) -> Result<Board> {
    match arg {
        Some(text) => board_from_str(text.trim()),
        None => prompt_board(label),
    }
}

fn run(args: &Args) -> Result<()> {
    println!("=== 8-Puzzle Multi-Heuristic Evaluator ===");
    let start = read_board(args.start.as_deref(), "Start")?;
    let goal = read_board(args.goal.as_deref(), "Goal")?;

    let path_for = (!args.no_path).then_some(args.path_heuristic);
    let experiment = run_experiment(&start, &goal, path_for)?;

    if let Some(report) = path_for.and_then(|kind| experiment.report(kind)) {
        match report.path_length() {
            Some(length) if report.is_solved() => {
                println!("{}: solved in {} moves.", report.heuristic, length)
            }
            _ => println!("{}: no solution found.", report.heuristic),
        }
    }

    if args.stdout {
        print!("{}", experiment);
    } else {
        fs::write(&args.output, experiment.to_string())?;
        println!("\nSuccess! Check the output file '{}'.", args.output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ PuzzleError::Unsolvable { .. }) => {
            eprintln!("\nError: The given start state cannot reach the provided goal state.");
            eprintln!("({})", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
