//! Cell coordinates on a 9×9 grid.

use std::fmt::{self, Display};

/// A cell coordinate: `(row, column)`, each in 0-8.
///
/// Rows count downward from the top of the grid, columns rightward from
/// the left. The 3×3 box containing a cell is identified by
/// `(row / 3) * 3 + col / 3`, left to right, top to bottom.
///
/// # Examples
///
/// ```
/// use sudoscan_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.index(), 43);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// Row-major order is load-bearing: the solver binds its search frames
    /// to the first empty cell in this order, and repair processes cells in
    /// this order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from a row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this cell.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the position of the top-left cell of this cell's box.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(*pos, Position::from_index(i));
        }
    }

    #[test]
    fn test_box_arithmetic() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 2).box_index(), 0);
        assert_eq!(Position::new(0, 3).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(5, 7).box_origin(), Position::new(3, 6));
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "r3c7");
    }
}
