//! The 9×9 digit grid and the placement legality check.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9×9 Sudoku grid of optional digits.
///
/// Each cell holds either a [`Digit`] or `None` (empty). The grid itself
/// does not enforce the Sudoku uniqueness invariant; a grid assembled from
/// noisy input may well be inconsistent. Legality is checked through
/// [`is_legal_placement`](Self::is_legal_placement), and consistency of a
/// whole grid through [`is_consistent`](Self::is_consistent).
///
/// # Text format
///
/// [`FromStr`] accepts digits `1`-`9` for filled cells and `.`, `_`, or
/// `0` for empty cells; all whitespace is ignored. Exactly 81 cells must
/// remain after stripping whitespace. [`Display`] renders the grid as a
/// single 81-character line using `_` for empty cells.
///
/// # Examples
///
/// ```
/// use sudoscan_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
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
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.empty_count(), 51);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Tests whether placing `digit` at `pos` would be legal.
    ///
    /// Returns `false` iff `digit` already appears anywhere in the cell's
    /// row, column, or 3×3 box. The scan covers the target cell itself, so
    /// a caller testing a replacement value for a filled cell must clear
    /// that cell first.
    ///
    /// This predicate is the single source of truth for placement
    /// legality; the solver, generator, and repair pass all route their
    /// decisions through it.
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        let digit = Some(digit);
        let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));
        for i in 0..9 {
            if self.cells[row * 9 + i] == digit || self.cells[i * 9 + col] == digit {
                return false;
            }
        }
        let origin = pos.box_origin();
        let (box_row, box_col) = (usize::from(origin.row()), usize::from(origin.col()));
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if self.cells[r * 9 + c] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// `None` means the grid is completely filled. This scan order defines
    /// the solver's search-frame order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Tests whether every filled cell is legal against the rest of the
    /// grid.
    ///
    /// Each filled cell is temporarily cleared and its digit re-tested via
    /// [`is_legal_placement`](Self::is_legal_placement). Empty cells are
    /// ignored, so an incomplete grid can be consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut work = self.clone();
        for pos in Position::ALL {
            if let Some(digit) = work[pos] {
                work[pos] = None;
                if !work.is_legal_placement(pos, digit) {
                    return false;
                }
                work[pos] = Some(digit);
            }
        }
        true
    }

    /// Tests whether the grid is a complete, consistent solution.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// An error parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// A character that is neither a digit, an empty marker, nor
    /// whitespace.
    #[display("invalid character in grid: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if count == 81 {
                return Err(GridParseError::WrongCellCount(count + 1));
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::new(ch as u8 - b'0'),
                _ => return Err(GridParseError::InvalidCharacter(ch)),
            };
            grid.cells[count] = cell;
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount(count));
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
