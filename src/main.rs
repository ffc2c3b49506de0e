//! Advent of Code 2024 runner.
//!
//! Reads each day's puzzle input from `<input dir>/dayNN.txt` (or an explicit
//! path), solves both parts and prints the answers. Diagnostics go to stderr
//! through `tracing`; answers go to stdout.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use advent24::input::{self, DEFAULT_INPUT_DIR};
use advent24::{solver_for, Answers, Solver, SOLVERS};

/// Solves Advent of Code 2024 puzzles.
#[derive(Parser)]
#[command(name = "advent24")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing `dayNN.txt` input files.
    #[arg(long, global = true, env = "ADVENT24_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Print diagnostic output (maps, traces, timings). Answers are unaffected.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single day.
    Solve {
        /// Day of the month (1-based).
        day: u8,
        /// Read this file instead of the conventional input path.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Solve every day that has an input file.
    All,
    /// List the available days.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Some(Command::Solve { day, input }) => {
            let solver = solver_for(day)?;
            let path = input.unwrap_or_else(|| input::default_path(&cli.input_dir, day));
            run_solver(solver, &path)
        }
        Some(Command::List) => {
            run_list();
            Ok(())
        }
        // default: solve everything available
        Some(Command::All) | None => run_all(&cli.input_dir),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Solves one day from `path` and prints its report.
fn run_solver(solver: &dyn Solver, path: &Path) -> anyhow::Result<()> {
    let input = input::read(path)?;
    let started = Instant::now();
    let answers = solver
        .solve(&input)
        .with_context(|| format!("day {} failed on {}", solver.day(), path.display()))?;
    info!(day = solver.day(), elapsed = ?started.elapsed(), "solved");

    println!("{}", format_report(solver, &answers));
    Ok(())
}

/// Solves every day whose input file exists, skipping the rest.
fn run_all(input_dir: &Path) -> anyhow::Result<()> {
    let mut solved = 0;
    for &solver in SOLVERS {
        let path = input::default_path(input_dir, solver.day());
        if !path.exists() {
            warn!(day = solver.day(), path = %path.display(), "no input file, skipping");
            continue;
        }
        run_solver(solver, &path)?;
        solved += 1;
    }

    if solved == 0 {
        eprintln!(
            "No input files found in {}. Expected names like day01.txt.",
            input_dir.display()
        );
    }
    Ok(())
}

/// Prints the day numbers and titles.
fn run_list() {
    for solver in SOLVERS {
        println!("{:>2}  {}", solver.day(), solver.title());
    }
}

/// Heading line followed by both answers.
fn format_report(solver: &dyn Solver, answers: &Answers) -> String {
    format!("Day {}: {}\n{}", solver.day(), solver.title(), answers)
}
