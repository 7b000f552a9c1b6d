//! Bounded solution counting for uniqueness checks.

use sudoscan_core::{Digit, DigitGrid};

/// The default solution cap, chosen so that "exactly one solution" is
/// distinguishable from "more than one" at the lowest possible cost.
pub const DEFAULT_SOLUTION_CAP: usize = 2;

/// Counts completions of a grid, stopping once `cap` have been found.
///
/// This runs the same depth-first search as [`solve`](crate::solve) but
/// keeps backtracking past each completed grid instead of returning, so
/// distinct completions are enumerated in deterministic order. The whole
/// search is pruned as soon as `cap` completions have been seen.
///
/// The cap is what keeps generation cost bounded: a sparse grid can have
/// an astronomical number of completions, and callers only ever need to
/// know whether the count is 0, 1, or "at least `cap`". A `cap` of 0
/// short-circuits to 0 without searching.
///
/// The input is never mutated. A grid whose filled cells already conflict
/// counts as having no completions.
///
/// # Examples
///
/// ```
/// use sudoscan_core::DigitGrid;
/// use sudoscan_solver::{DEFAULT_SOLUTION_CAP, count_solutions};
///
/// // An empty grid has far more than two completions; the cap stops the
/// // enumeration immediately after the second one.
/// let n = count_solutions(&DigitGrid::new(), DEFAULT_SOLUTION_CAP);
/// assert_eq!(n, 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, cap: usize) -> usize {
    if cap == 0 || !grid.is_consistent() {
        return 0;
    }
    let mut work = grid.clone();
    let mut found = 0;
    count_in_place(&mut work, cap, &mut found);
    found
}

/// Tests whether a grid has exactly one completion.
///
/// Equivalent to `count_solutions(grid, 2) == 1`; this is the predicate
/// the generator uses to accept or reject each cell removal.
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    count_solutions(grid, DEFAULT_SOLUTION_CAP) == 1
}

fn count_in_place(grid: &mut DigitGrid, cap: usize, found: &mut usize) {
    let Some(pos) = grid.first_empty() else {
        *found += 1;
        return;
    };
    for digit in Digit::ALL {
        if grid.is_legal_placement(pos, digit) {
            grid[pos] = Some(digit);
            count_in_place(grid, cap, found);
            grid[pos] = None;
            if *found >= cap {
                return;
            }
        }
    }
}
