mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use cli::Args;
use npuzzle::text::{parse_board, render_board, render_moves, render_solution};
use npuzzle::{solve, Board, Outcome};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a solution was found.
fn run(args: &Args) -> Result<bool> {
    let config = args.search_config();
    let start = load_start(args)?;

    if args.verbose {
        eprintln!(
            "Solving {}x{} board (visited index: {:?}, budget: {:?})",
            config.size, config.size, config.visited, config.budget
        );
    }
    if !args.quiet {
        println!("Initial Puzzle:\n{}\n", render_board(&start));
    }

    let report = solve(start, &config).context("search failed")?;

    if args.verbose {
        let stats = &report.stats;
        eprintln!(
            "Expanded {} states, generated {}, discarded {} duplicates, peak frontier {} ({:.2?})",
            stats.expanded, stats.generated, stats.discarded, stats.max_frontier, stats.elapsed
        );
    }

    match report.outcome {
        Outcome::Found(solution) => {
            if args.quiet {
                println!("{}", render_moves(&solution));
            } else {
                let color = !args.no_color && std::io::stdout().is_tty();
                println!("Found optimal solution with {} moves\n", solution.len());
                print!("{}", render_solution(&solution, color));
            }
            Ok(true)
        }
        Outcome::Exhausted => {
            println!("No solution found");
            Ok(false)
        }
        Outcome::BudgetExceeded => {
            println!("Search budget exceeded before a solution was found");
            Ok(false)
        }
    }
}

fn load_start(args: &Args) -> Result<Board> {
    if args.random {
        let board = match args.seed {
            Some(seed) => Board::shuffled(args.size, &mut StdRng::seed_from_u64(seed)),
            None => Board::shuffled(args.size, &mut thread_rng()),
        };
        return board.context("could not generate a random board");
    }

    let text = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("could not read stdin")?;
            buf
        }
    };
    parse_board(&text, args.size).context("invalid puzzle definition")
}
