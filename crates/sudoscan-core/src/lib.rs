//! Core data model for the Sudoscan engine.
//!
//! This crate defines the value types the rest of the engine operates on:
//!
//! - [`Digit`]: a type-safe Sudoku digit 1-9
//! - [`Position`]: a `(row, column)` cell coordinate
//! - [`DigitGrid`]: a 9×9 grid of optional digits, including the
//!   row/column/box legality check that every other component routes
//!   placement decisions through
//!
//! Grids are plain value types: solving, generation, and repair all either
//! clone their input or mutate a grid the caller exclusively owns for the
//! duration of the call. Nothing in this crate performs I/O or holds
//! shared state.
//!
//! # Examples
//!
//! ```
//! use sudoscan_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(0, 0);
//! assert!(grid.is_legal_placement(pos, Digit::D5));
//!
//! grid[pos] = Some(Digit::D5);
//! // 5 now conflicts everywhere in row 0, column 0, and the top-left box.
//! assert!(!grid.is_legal_placement(Position::new(0, 8), Digit::D5));
//! assert!(!grid.is_legal_placement(Position::new(8, 0), Digit::D5));
//! assert!(!grid.is_legal_placement(Position::new(2, 2), Digit::D5));
//! ```

pub use self::{
    digit::Digit,
    grid::{DigitGrid, GridParseError},
    position::Position,
};

mod digit;
mod grid;
mod position;
