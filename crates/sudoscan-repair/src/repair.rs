//! Greedy conflict clearing and conflict reporting.

use sudoscan_core::{DigitGrid, Position};

/// The result of a [`repair`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOutcome {
    /// The repaired grid. Always consistent, not necessarily solvable.
    pub grid: DigitGrid,
    /// The cells whose digits were cleared, in row-major order.
    pub cleared: Vec<Position>,
}

/// Clears conflicting digits from a noisy grid in a single greedy pass.
///
/// Cells are visited in row-major order. Each filled cell's digit is
/// tested against the cells already accepted before it and kept only if
/// legal there; of two conflicting digits, the later one in scan order is
/// therefore the one cleared. The pass is order-dependent by design and
/// makes no minimal-change or solvability promise. Attempting to solve the
/// result and getting "no solution" is the expected way to discover that
/// the noise was beyond repair.
///
/// The input is never mutated.
///
/// # Examples
///
/// ```
/// use sudoscan_core::{Digit, DigitGrid, Position};
/// use sudoscan_repair::repair;
///
/// let mut noisy = DigitGrid::new();
/// noisy[Position::new(0, 0)] = Some(Digit::D5);
/// noisy[Position::new(0, 3)] = Some(Digit::D5);
///
/// let outcome = repair(&noisy);
/// assert_eq!(outcome.grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(outcome.grid[Position::new(0, 3)], None);
/// assert_eq!(outcome.cleared, [Position::new(0, 3)]);
/// ```
#[must_use]
pub fn repair(noisy: &DigitGrid) -> RepairOutcome {
    let mut grid = DigitGrid::new();
    let mut cleared = Vec::new();
    for pos in Position::ALL {
        let Some(digit) = noisy[pos] else {
            continue;
        };
        if grid.is_legal_placement(pos, digit) {
            grid[pos] = Some(digit);
        } else {
            log::debug!("repair cleared {digit} at {pos}");
            cleared.push(pos);
        }
    }
    RepairOutcome { grid, cleared }
}

/// Marks every cell involved in a row, column, or box duplication.
///
/// Both members of each conflicting pair are marked, which is the shape a
/// UI needs to highlight bad cells; [`repair`] instead decides which
/// member survives. Empty cells are never marked.
#[must_use]
pub fn conflicts(grid: &DigitGrid) -> [[bool; 9]; 9] {
    let mut marked = [[false; 9]; 9];
    let mut work = grid.clone();
    for pos in Position::ALL {
        if let Some(digit) = work[pos] {
            work[pos] = None;
            if !work.is_legal_placement(pos, digit) {
                marked[usize::from(pos.row())][usize::from(pos.col())] = true;
            }
            work[pos] = Some(digit);
        }
    }
    marked
}
