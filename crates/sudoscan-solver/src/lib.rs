//! Backtracking search for the Sudoscan engine.
//!
//! Three operations live here, all pure and synchronous:
//!
//! - [`solve`]: exhaustive depth-first search that completes a grid or
//!   reports that no completion exists
//! - [`count_solutions`]: a bounded variant that counts completions up to
//!   a cap, used to verify puzzle uniqueness
//! - [`hint`]: reveals one randomly chosen empty cell's solved digit
//!
//! "No solution" is a normal outcome throughout, expressed as `None` or a
//! zero count, never as an error. Recursion depth is bounded by the 81
//! cells of the grid, so no explicit stack machinery is needed.

pub use self::{
    backtrack::solve,
    counter::{DEFAULT_SOLUTION_CAP, count_solutions, has_unique_solution},
    hint::{Hint, hint},
};

mod backtrack;
mod counter;
mod hint;

#[cfg(test)]
pub(crate) mod testing;
