//! klondike: decide whether Klondike deals are winnable
//!
//! Reads one deal per stdin line (52 two-character card codes) and writes
//! one JSON record per deal on stdout. Search progress can be reported on
//! stderr with `--verbose`.
//!
//! # Usage
//!
//! ```bash
//! # Solve deals from a file with a 10 second budget per deal
//! klondike --timeout 10 < deals.txt
//!
//! # Draw-1 rules with smaller caches
//! klondike --draw_size 1 --state_cache_size 100000 < deals.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: All deals processed (wins, losses and timeouts included)
//! - 1: Malformed input or I/O failure

use anyhow::{bail, Context, Result};
use clap::Parser;
use klondike_core::Game;
use klondike_json::{deck_codes, parse_deck_line, MoveRecord, SolveRecord};
use klondike_solver::{
    SolveStatus, Solver, SolverConfig, DEFAULT_MOVE_CACHE_SIZE, DEFAULT_STATE_CACHE_SIZE,
};
use std::io::{self, BufRead, Write};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "klondike")]
#[command(about = "Klondike solitaire deal solver", long_about = None)]
struct Args {
    /// Solver timeout per deal, in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// Max entries for the solver state cache
    #[arg(long = "state_cache_size", default_value_t = DEFAULT_STATE_CACHE_SIZE)]
    state_cache_size: usize,

    /// Max entries for the tableau move cache
    #[arg(long = "move_cache_size", default_value_t = DEFAULT_MOVE_CACHE_SIZE)]
    move_cache_size: usize,

    /// Cards moved from the stock per draw
    #[arg(long = "draw_size", default_value_t = 3)]
    draw_size: usize,

    /// Report search progress and board snapshots on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.draw_size == 0 {
        bail!("draw_size must be at least 1");
    }
    let config = SolverConfig {
        timeout: Duration::from_secs(args.timeout),
        state_cache_size: args.state_cache_size,
        move_cache_size: args.move_cache_size,
        verbose: args.verbose,
    };
    let version = format!("klondike {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        let deal = parse_deck_line(line.trim_end())
            .with_context(|| format!("line {}", number + 1))?;

        let game = Game::new(&deal, args.draw_size);
        if args.verbose {
            eprintln!("{}", game);
        }
        let mut solver = Solver::new(game, &config);
        let result = solver.solve();

        let record = SolveRecord {
            status: status_str(result.status),
            deck: deck_codes(&deal),
            winning_moves: result
                .moves
                .map(|moves| moves.into_iter().map(MoveRecord::from).collect()),
            moves_considered: result.calls,
            elapsed_seconds: result.elapsed.as_secs(),
            timeout_seconds: args.timeout,
            version: version.clone(),
        };
        writeln!(out, "{}", record.to_json()).context("writing stdout")?;
    }
    Ok(())
}

fn status_str(status: SolveStatus) -> &'static str {
    match status {
        SolveStatus::Solved => "win",
        SolveStatus::Timeout => "timeout",
        SolveStatus::NoSolution => "lose",
    }
}
