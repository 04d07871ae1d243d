use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, info};

use sudoku_dlx::{read_from_file, solve, verify};

/// Solves 9x9 Sudoku puzzles with a Dancing Links / Algorithm X engine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a file with one 81-character puzzle line per row ('.' for
    /// unknown cells).
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let grids = match read_from_file(&cli.path) {
        Ok(grids) => grids,
        Err(err) => {
            eprintln!("IO Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!("loaded {} puzzle(s) from {}", grids.len(), cli.path.display());

    for grid in &grids {
        let started = Instant::now();
        let solved = solve(grid);
        let ok = verify(&solved);
        debug!(
            "solved puzzle in {:?} (verified: {})",
            started.elapsed(),
            ok
        );
        println!("{}", solved.to_line());
    }

    ExitCode::SUCCESS
}
