//! Difficulty levels and their clue-removal targets.

use std::fmt::{self, Display};

/// A puzzle difficulty level.
///
/// Each level maps to a fixed number of cells the generator removes from
/// the solved grid. This clue-count target is the only difficulty model
/// the engine has; there is no custom clue-count parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 30 cells removed, 51 clues remain.
    #[default]
    Easy,
    /// 45 cells removed, 36 clues remain.
    Medium,
    /// 55 cells removed, 26 clues remain.
    Hard,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the number of cells the generator removes for this level.
    #[must_use]
    pub const fn removal_target(self) -> usize {
        match self {
            Self::Easy => 30,
            Self::Medium => 45,
            Self::Hard => 55,
        }
    }

    /// Returns the number of clues a puzzle of this level carries
    /// (`81 -` [`removal_target`](Self::removal_target)).
    #[must_use]
    pub const fn clue_count(self) -> usize {
        81 - self.removal_target()
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}
