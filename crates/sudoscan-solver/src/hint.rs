//! Single-cell hint derivation.

use rand::{Rng, RngExt as _};
use sudoscan_core::{Digit, DigitGrid, Position};
use tinyvec::ArrayVec;

use crate::solve;

/// One revealed cell: a coordinate and its solved digit.
///
/// Hints are consumed once; the caller applies the digit to its own grid
/// and discards the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell the hint reveals.
    pub position: Position,
    /// The correct digit for that cell.
    pub digit: Digit,
}

/// Picks a uniformly random empty cell of `current` and reveals its
/// solved digit.
///
/// If `solution` is `None`, one is computed by solving `current` first;
/// when `current` is unsatisfiable (or already complete) there is nothing
/// to reveal and `None` is returned. `current` is never mutated.
///
/// The random source is supplied by the caller, so hint sequences are
/// reproducible under a seeded RNG.
///
/// # Examples
///
/// ```
/// use rand::rng;
/// use sudoscan_core::DigitGrid;
/// use sudoscan_solver::hint;
///
/// let grid = DigitGrid::new();
/// let hint = hint(&grid, None, &mut rng()).unwrap();
/// assert_eq!(grid[hint.position], None);
/// ```
pub fn hint<R>(current: &DigitGrid, solution: Option<&DigitGrid>, rng: &mut R) -> Option<Hint>
where
    R: Rng + ?Sized,
{
    let computed;
    let solution = match solution {
        Some(solution) => solution,
        None => {
            computed = solve(current)?;
            &computed
        }
    };

    let mut empty: ArrayVec<[Position; 81]> = ArrayVec::new();
    for pos in Position::ALL {
        if current[pos].is_none() {
            empty.push(pos);
        }
    }
    if empty.is_empty() {
        return None;
    }

    let position = empty[rng.random_range(0..empty.len())];
    let digit = solution[position]?;
    Some(Hint { position, digit })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{CLASSIC_PUZZLE, CLASSIC_SOLUTION, parse};

    fn rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_hint_reveals_solution_digit_of_an_empty_cell() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let solution = parse(CLASSIC_SOLUTION);
        let mut rng = rng();
        for _ in 0..50 {
            let hint = hint(&puzzle, Some(&solution), &mut rng).unwrap();
            assert_eq!(puzzle[hint.position], None);
            assert_eq!(solution[hint.position], Some(hint.digit));
        }
    }

    #[test]
    fn test_hint_computes_solution_lazily() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let solution = parse(CLASSIC_SOLUTION);
        let hint = hint(&puzzle, None, &mut rng()).unwrap();
        assert_eq!(solution[hint.position], Some(hint.digit));
    }

    #[test]
    fn test_no_hint_for_unsatisfiable_grid() {
        let mut grid = DigitGrid::new();
        grid[Position::new(0, 0)] = Some(Digit::D5);
        grid[Position::new(0, 3)] = Some(Digit::D5);
        assert_eq!(hint(&grid, None, &mut rng()), None);
    }

    #[test]
    fn test_no_hint_for_complete_grid() {
        let solution = parse(CLASSIC_SOLUTION);
        assert_eq!(hint(&solution, Some(&solution), &mut rng()), None);
    }

    #[test]
    fn test_hint_does_not_mutate_input() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let copy = puzzle.clone();
        let _ = hint(&puzzle, None, &mut rng());
        assert_eq!(puzzle, copy);
    }

    #[test]
    fn test_hint_is_reproducible_under_a_fixed_seed() {
        let puzzle = parse(CLASSIC_PUZZLE);
        let a = hint(&puzzle, None, &mut rng());
        let b = hint(&puzzle, None, &mut rng());
        assert_eq!(a, b);
    }
}
