//! Repair of grids assembled from unreliable digit recognition.
//!
//! External recognition (camera capture, OCR) supplies a 9×9 grid of
//! integers in 0-9 with no validity guarantee: digits can be misread into
//! cells where they conflict with each other. This crate accepts exactly
//! that shape as [`RawScan`], converts it into a
//! [`DigitGrid`](sudoscan_core::DigitGrid), and offers a best-effort
//! [`repair`] pass that clears conflicting digits so a solver can attempt
//! the rest.
//!
//! Repair is a heuristic, not a guarantee: the repaired grid may still be
//! unsolvable, which the solver surfaces as its ordinary "no solution"
//! outcome for the caller to report.
//!
//! # Examples
//!
//! ```
//! use sudoscan_repair::{RawScan, repair};
//!
//! // Row 0 was misread with two 5s.
//! let mut cells = [[0_u8; 9]; 9];
//! cells[0][0] = 5;
//! cells[0][3] = 5;
//!
//! let scan = RawScan::new(cells).unwrap();
//! let outcome = repair(&scan.to_grid());
//! assert_eq!(outcome.cleared.len(), 1);
//! assert!(outcome.grid.is_consistent());
//! ```

pub use self::{
    raw::{RawScan, ScanError},
    repair::{RepairOutcome, conflicts, repair},
};

mod raw;
mod repair;
