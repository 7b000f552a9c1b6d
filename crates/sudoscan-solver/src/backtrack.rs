//! Exhaustive backtracking solver.

use sudoscan_core::{Digit, DigitGrid};

/// Solves a grid by exhaustive backtracking search.
///
/// The search binds one frame per recursion depth to the next empty cell
/// in row-major order, tries digits in ascending order, and clears the
/// cell again when a branch fails. The first complete assignment found is
/// returned; `None` means the grid has no valid completion, which is a
/// normal outcome for inconsistent or over-constrained input, not an
/// error.
///
/// A grid whose filled cells already conflict has no valid completion by
/// definition and is rejected before the search starts; the search itself
/// only validates the placements it makes.
///
/// Solving is deterministic: the same input grid always yields the same
/// solution. Hint stability within a session relies on this.
///
/// The input is never mutated.
///
/// # Examples
///
/// ```
/// use sudoscan_core::DigitGrid;
/// use sudoscan_solver::solve;
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// let solution = solve(&puzzle).unwrap();
/// assert!(solution.is_solved());
/// ```
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    if !grid.is_consistent() {
        return None;
    }
    let mut work = grid.clone();
    solve_in_place(&mut work).then_some(work)
}

/// Fills the next empty cell and recurses. On failure the grid is left
/// exactly as it was entered; each frame undoes only its own placement.
fn solve_in_place(grid: &mut DigitGrid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in Digit::ALL {
        if grid.is_legal_placement(pos, digit) {
            grid[pos] = Some(digit);
            if solve_in_place(grid) {
                return true;
            }
            grid[pos] = None;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use sudoscan_core::Position;

    use super::*;
    use crate::testing::{CLASSIC_PUZZLE, CLASSIC_SOLUTION, parse};

    #[test]
    fn test_solves_classic_puzzle() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let solution = solve(&puzzle).unwrap();
        assert_eq!(solution, parse(CLASSIC_SOLUTION));

        // Row 0 of the unique classical solution.
        let row0: Vec<u8> = (0..9)
            .map(|col| solution[Position::new(0, col)].unwrap().value())
            .collect();
        assert_eq!(row0, [5, 3, 4, 6, 7, 8, 9, 1, 2]);
    }

    #[test]
    fn test_preserves_given_cells() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let solution = solve(&puzzle).unwrap();
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                assert_eq!(solution[pos], Some(digit));
            }
        }
    }

    #[test]
    fn test_is_deterministic() {
        let puzzle = parse(CLASSIC_PUZZLE);
        assert_eq!(solve(&puzzle), solve(&puzzle));

        // An empty grid has many solutions; determinism still picks one.
        let empty = DigitGrid::new();
        assert_eq!(solve(&empty), solve(&empty));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let copy = puzzle.clone();
        let _ = solve(&puzzle);
        assert_eq!(puzzle, copy);
    }

    #[test]
    fn test_empty_grid_solves_with_ascending_first_row() {
        // From an empty grid, ascending digit order fills row 0 with 1-9.
        let solution = solve(&DigitGrid::new()).unwrap();
        assert!(solution.is_solved());
        for col in 0..9 {
            assert_eq!(
                solution[Position::new(0, col)].unwrap().value(),
                col + 1
            );
        }
    }

    #[test]
    fn test_inconsistent_givens_return_none() {
        // Two 5s in row 0 make the grid inconsistent; the solver reports
        // "no solution" rather than erroring.
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        grid[Position::new(0, 3)] = Some(Digit::D5);
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_dead_end_grid_returns_none() {
        // Consistent givens, but (0, 8) has no legal candidate: its row
        // rules out 1-8 and a 9 below it in column 8 rules out 9.
        let mut grid = DigitGrid::new();
        for col in 0..8 {
            grid[Position::new(0, col)] = Digit::new(col + 1);
        }
        grid[Position::new(4, 8)] = Some(Digit::D9);
        assert!(grid.is_consistent());
        assert_eq!(solve(&grid), None);
    }
}
