//! Validated raw recognition input.

use derive_more::{Display, Error};
use sudoscan_core::{Digit, DigitGrid, Position};

/// A raw 9×9 recognition result: integers in 0-9, where 0 means "no digit
/// recognized".
///
/// This is the exact shape the external recognition boundary delivers.
/// Construction validates the value range up front so out-of-range values
/// are rejected before they can reach any grid arithmetic; no consistency
/// check is performed, because conflicting digits are precisely what
/// [`repair`](crate::repair) exists to deal with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawScan {
    cells: [[u8; 9]; 9],
}

impl RawScan {
    /// Creates a validated scan from raw recognition output.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ValueOutOfRange`] if any cell holds a value
    /// greater than 9.
    pub fn new(cells: [[u8; 9]; 9]) -> Result<Self, ScanError> {
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if value > 9 {
                    return Err(ScanError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Converts the scan into a grid, mapping 0 to an empty cell.
    ///
    /// The result may be inconsistent; run it through
    /// [`repair`](crate::repair) before solving.
    #[must_use]
    pub fn to_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            let value = self.cells[usize::from(pos.row())][usize::from(pos.col())];
            grid[pos] = Digit::new(value);
        }
        grid
    }
}

/// An error validating a [`RawScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ScanError {
    /// A cell held a value outside 0-9.
    #[display("cell ({row}, {col}) holds {value}, outside 0-9")]
    ValueOutOfRange {
        /// Row of the offending cell (0-8).
        row: usize,
        /// Column of the offending cell (0-8).
        col: usize,
        /// The rejected value.
        value: u8,
    },
}
