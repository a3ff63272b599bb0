//! Word Search Generator
//!
//! Reads one word per line, places every word into the smallest grid (from the
//! requested size upward) that holds them all, and prints where each word went
//! followed by the grid.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::{build_puzzle, logging, read_words, render_grid, render_hints, BuildConfig};

/// Generates a word search puzzle from a list of words.
#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with one word per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Smallest grid size to try; raised to the longest word if needed.
    #[arg(short, long, default_value_t = 20)]
    size: usize,

    /// Largest grid size to try before giving up.
    #[arg(long)]
    max_size: Option<usize>,

    /// Fill blank cells with random letters.
    #[arg(long)]
    fill: bool,

    /// Only print the grid.
    #[arg(long)]
    no_hints: bool,

    /// Seed for a reproducible puzzle.
    #[arg(long)]
    seed: Option<u64>,

    /// Log each sizing round.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Reads words, builds the puzzle, and returns the text to print.
fn run(cli: &Cli) -> Result<String> {
    let words = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_words(BufReader::new(file))?
        }
        None => read_words(io::stdin().lock())?,
    };

    let mut config = BuildConfig::default()
        .with_min_size(cli.size)
        .with_fill_gaps(cli.fill);
    if let Some(max_size) = cli.max_size {
        config = config.with_size_cap(max_size);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = build_puzzle(&words, &config, &mut rng)?;

    Ok(format_output(&puzzle, !cli.no_hints))
}

/// Hints (optional), a blank line, then the grid.
fn format_output(puzzle: &wordsearch::Puzzle, show_hints: bool) -> String {
    let grid = render_grid(&puzzle.grid);
    if show_hints {
        format!("{}\n\n{grid}", render_hints(&puzzle.hints))
    } else {
        grid
    }
}
