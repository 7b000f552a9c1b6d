//! Solved-grid filling and uniqueness-preserving carving.

use rand::{Rng, RngExt as _, seq::SliceRandom as _};
use sudoscan_core::{Digit, DigitGrid, Position};
use sudoscan_solver::has_unique_solution;

use crate::{Difficulty, PuzzleSeed};

/// Upper bound on carve-loop iterations for one puzzle.
///
/// Each iteration picks one random cell and either accepts or rejects its
/// removal. Without a bound, a run where every remaining removal breaks
/// uniqueness would retry forever; with it, the generator settles for a
/// puzzle with a few more clues than the target asked for.
const MAX_CARVE_ATTEMPTS: usize = 10_000;

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved puzzle. Filled cells are the givens.
    pub problem: DigitGrid,
    /// The complete grid the puzzle was carved from. Solving `problem`
    /// reproduces exactly this grid.
    pub solution: DigitGrid,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that replays this generation run.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of givens in the problem grid.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        81 - self.problem.empty_count()
    }
}

/// Generates uniquely-solvable puzzles.
///
/// # Examples
///
/// ```
/// use sudoscan_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Easy);
/// assert_eq!(puzzle.clue_count(), Difficulty::Easy.clue_count());
///
/// // The seed replays the identical puzzle.
/// let replay = generator.generate_with_seed(Difficulty::Easy, puzzle.seed);
/// assert_eq!(replay, puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    _private: (),
}

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generates a puzzle from a fresh entropy seed.
    ///
    /// The seed used is reported in the returned puzzle.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::from_entropy())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same `(difficulty, seed)` pair always produces the same puzzle.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = fill_solved_grid(&mut rng);
        let problem = carve(&solution, difficulty.removal_target(), &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Builds a complete valid grid by backtracking from an empty grid with a
/// freshly shuffled candidate order at every cell.
///
/// The per-cell shuffle is what makes generated grids distinct; with it,
/// the fill is a uniform-ish walk over valid grids rather than the single
/// deterministic grid the ascending order would always produce.
fn fill_solved_grid<R>(rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, rng);
    debug_assert!(filled, "an empty grid is always completable");
    grid
}

fn fill_from<R>(grid: &mut DigitGrid, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_legal_placement(pos, digit) {
            grid[pos] = Some(digit);
            if fill_from(grid, rng) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

/// Removes `target` cells from a copy of `solution`, keeping each removal
/// only if the puzzle still has exactly one solution.
///
/// Cells are chosen uniformly at random; a rejected removal restores the
/// digit and the loop retries elsewhere. If [`MAX_CARVE_ATTEMPTS`] runs
/// out first, the puzzle is returned with the removals accepted so far,
/// still uniquely solvable.
fn carve<R>(solution: &DigitGrid, target: usize, rng: &mut R) -> DigitGrid
where
    R: Rng + ?Sized,
{
    let mut puzzle = solution.clone();
    let mut removed = 0;
    let mut attempts = 0;
    while removed < target {
        if attempts == MAX_CARVE_ATTEMPTS {
            log::warn!(
                "carve attempt budget exhausted: removed {removed} of {target} cells"
            );
            break;
        }
        attempts += 1;

        let pos = Position::from_index(rng.random_range(0..81));
        let Some(digit) = puzzle[pos] else {
            continue;
        };
        puzzle[pos] = None;
        if has_unique_solution(&puzzle) {
            removed += 1;
        } else {
            puzzle[pos] = Some(digit);
        }
    }
    puzzle
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sudoscan_solver::{DEFAULT_SOLUTION_CAP, count_solutions, solve};

    use super::*;

    fn seed(byte: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([byte; 32])
    }

    fn assert_house_permutations(grid: &DigitGrid) {
        for i in 0..9 {
            let row: Vec<_> = (0..9).map(|col| grid[Position::new(i, col)]).collect();
            let col: Vec<_> = (0..9).map(|row| grid[Position::new(row, i)]).collect();
            let origin = Position::new((i / 3) * 3, (i % 3) * 3);
            let boxed: Vec<_> = (0..9)
                .map(|j| {
                    Position::new(origin.row() + j / 3, origin.col() + j % 3)
                })
                .map(|pos| grid[pos])
                .collect();
            for digit in Digit::ALL {
                let digit = Some(digit);
                assert_eq!(row.iter().filter(|cell| **cell == digit).count(), 1);
                assert_eq!(col.iter().filter(|cell| **cell == digit).count(), 1);
                assert_eq!(boxed.iter().filter(|cell| **cell == digit).count(), 1);
            }
        }
    }

    #[test]
    fn test_fill_produces_a_valid_solved_grid() {
        let grid = fill_solved_grid(&mut seed(7).rng());
        assert!(grid.is_solved());
        assert_house_permutations(&grid);
    }

    #[test]
    fn test_generation_is_reproducible_from_the_seed() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(Difficulty::Easy, seed(3));
        let b = generator.generate_with_seed(Difficulty::Easy, seed(3));
        assert_eq!(a, b);

        let c = generator.generate_with_seed(Difficulty::Easy, seed(4));
        assert_ne!(a.problem, c.problem);
    }

    #[test]
    fn test_easy_puzzle_meets_the_removal_target() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(Difficulty::Easy, seed(1));
        assert_eq!(puzzle.problem.empty_count(), 30);
        assert_eq!(puzzle.clue_count(), Difficulty::Easy.clue_count());
        assert_eq!(
            count_solutions(&puzzle.problem, DEFAULT_SOLUTION_CAP),
            1
        );
    }

    #[test]
    fn test_medium_puzzle_meets_the_removal_target() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(Difficulty::Medium, seed(2));
        assert_eq!(puzzle.problem.empty_count(), 45);
        assert_eq!(
            count_solutions(&puzzle.problem, DEFAULT_SOLUTION_CAP),
            1
        );
    }

    #[test]
    fn test_hard_puzzle_is_unique_and_within_target() {
        // The attempt budget may stop carving short of the hard target,
        // but never past it, and uniqueness always holds.
        let puzzle = PuzzleGenerator::new().generate_with_seed(Difficulty::Hard, seed(5));
        assert!(puzzle.problem.empty_count() <= 55);
        assert_eq!(
            count_solutions(&puzzle.problem, DEFAULT_SOLUTION_CAP),
            1
        );
    }

    #[test]
    fn test_solving_the_problem_reproduces_the_solution() {
        let generator = PuzzleGenerator::new();
        for byte in 0..4 {
            let puzzle = generator.generate_with_seed(Difficulty::Medium, seed(byte));
            assert_eq!(solve(&puzzle.problem).as_ref(), Some(&puzzle.solution));
        }
    }

    #[test]
    fn test_problem_givens_match_the_solution() {
        let puzzle = PuzzleGenerator::new().generate_with_seed(Difficulty::Easy, seed(9));
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_filled_grids_have_permutation_houses(bytes in any::<[u8; 32]>()) {
            let grid = fill_solved_grid(&mut PuzzleSeed::from_bytes(bytes).rng());
            prop_assert!(grid.is_solved());
            assert_house_permutations(&grid);
        }
    }
}
