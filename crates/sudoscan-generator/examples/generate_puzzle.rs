//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles at a chosen difficulty and prints each
//! problem, its solution, and the seed that replays it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Replay a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-digit-seed>
//! ```
//!
//! Generate a batch in parallel:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 8
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use sudoscan_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level to generate at.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to replay (64 hex digits). Incompatible with --count > 1.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let generator = PuzzleGenerator::new();

    if let Some(seed) = &args.seed {
        if args.count != 1 {
            eprintln!("--seed replays exactly one puzzle; drop --count.");
            process::exit(2);
        }
        let seed = match seed.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(difficulty, seed));
        return;
    }

    let puzzles: Vec<GeneratedPuzzle> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate(difficulty))
        .collect();
    for puzzle in &puzzles {
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty: {} ({} clues)", puzzle.difficulty, puzzle.clue_count());
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
}
