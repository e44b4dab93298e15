//! Command-line explorer for the 1512 Guarini knight-swap puzzle.
//!
//! Builds the full state graph from the fixed starting position, computes a
//! minimum-move solution, and presents the result:
//!
//! ```sh
//! guarini                          # statistics + the full move sequence
//! guarini --step 7                 # only the board after move 7
//! guarini --csv solution.csv       # (step, state) rows
//! guarini --graph-html guarini.html  # interactive graph visualization
//! ```

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use guarini_core::Board;
use guarini_solver::{Path, SolverError, StateGraph, shortest_path};

mod csv;
mod html;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Render only the board at this position of the solution (0..=move count).
    #[arg(long, value_name = "N")]
    step: Option<usize>,

    /// Write the solution as (step, state) CSV rows to this file.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the full state graph as an interactive HTML page to this file.
    #[arg(long, value_name = "PATH")]
    graph_html: Option<PathBuf>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    Solver(SolverError),
    Io(std::io::Error),
    #[display("step {step} is out of range 0..={max}")]
    #[from(skip)]
    StepOutOfRange { step: usize, max: usize },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let graph = StateGraph::explore(Board::INITIAL)?;
    log::info!(
        "explored {} boards and {} transitions",
        graph.node_count(),
        graph.edge_count()
    );
    let path = shortest_path(&graph, Board::INITIAL, Board::GOAL)?;
    log::info!("shortest solution has {} moves", path.move_count());

    if let Some(step) = args.step {
        return show_step(&path, step);
    }

    print_statistics(&graph, &path);

    if let Some(file) = &args.csv {
        fs::write(file, csv::to_csv(&path))?;
        println!("wrote solution CSV to {}", file.display());
    }

    if let Some(file) = &args.graph_html {
        fs::write(file, html::to_html(&graph, &path))?;
        println!("wrote graph HTML to {}", file.display());
    } else {
        print_path(&path);
    }

    Ok(())
}

fn print_statistics(graph: &StateGraph, path: &Path) {
    let rule = "─".repeat(60);
    println!("{rule}");
    println!("Guarini 3×3 state space");
    println!("boards : {:>4}", graph.node_count());
    println!("moves  : {:>4}", graph.edge_count());
    println!("minimum solution: {} moves", path.move_count());
    println!("{rule}");
}

fn print_path(path: &Path) {
    for (step, board) in path.boards().iter().enumerate() {
        println!("step {step}");
        for line in render::board_lines(board) {
            println!("{line}");
        }
        println!();
    }
}

fn show_step(path: &Path, step: usize) -> Result<(), AppError> {
    let max = path.move_count();
    let board = path
        .boards()
        .get(step)
        .ok_or(AppError::StepOutOfRange { step, max })?;
    println!("step {step}/{max}");
    for line in render::board_lines(board) {
        println!("{line}");
    }
    Ok(())
}
