//! Shared fixtures for solver tests.

use sudoscan_core::DigitGrid;

/// The canonical example puzzle used throughout the test suite.
///
/// It has exactly one solution, [`CLASSIC_SOLUTION`].
pub(crate) const CLASSIC_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// The unique solution of [`CLASSIC_PUZZLE`].
pub(crate) const CLASSIC_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// Parses a grid string, panicking on malformed fixtures.
pub(crate) fn parse(s: &str) -> DigitGrid {
    s.parse().unwrap()
}
