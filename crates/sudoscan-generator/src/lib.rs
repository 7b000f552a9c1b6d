//! Puzzle generation for the Sudoscan engine.
//!
//! Generation runs in two phases: a randomized backtracking fill produces
//! a complete valid grid, then cells are carved out one at a time, each
//! removal kept only while the puzzle still has exactly one solution.
//! The number of cells to carve is the only tunable and comes from
//! [`Difficulty`].
//!
//! All randomness flows from an explicit [`PuzzleSeed`], so any generated
//! puzzle can be reproduced exactly from the seed it reports.
//!
//! # Examples
//!
//! ```
//! use sudoscan_generator::{Difficulty, PuzzleGenerator};
//! use sudoscan_solver::has_unique_solution;
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! assert!(has_unique_solution(&puzzle.problem));
//! assert!(puzzle.solution.is_solved());
//! ```

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
};

mod difficulty;
mod generator;
mod seed;
