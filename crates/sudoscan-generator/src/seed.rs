//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying one generation run.
///
/// Every [`GeneratedPuzzle`](crate::GeneratedPuzzle) carries the seed it
/// was produced from, and feeding the same seed back through
/// [`PuzzleGenerator::generate_with_seed`](crate::PuzzleGenerator::generate_with_seed)
/// replays the identical puzzle. Seeds render as 64 lowercase hex digits
/// and parse back from the same form, so they can be logged, shared, and
/// pasted into bug reports.
///
/// # Examples
///
/// ```
/// use sudoscan_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the process random source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the generation RNG for this seed.
    ///
    /// The seed bytes are hashed with SHA-256 before keying the RNG, so
    /// structurally similar seeds (for example, hand-typed low-entropy
    /// ones) still produce unrelated streams.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// The text was not exactly 64 characters long.
    #[display("expected 64 hex digits, found {_0} characters")]
    WrongLength(#[error(not(source))] usize),
    /// A character that is not a hex digit.
    #[display("invalid hex digit: {_0:?}")]
    InvalidHexDigit(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(SeedParseError::WrongLength(s.chars().count()));
        }
        let mut bytes = [0; 32];
        let chars: Vec<char> = s.chars().collect();
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(chars[i * 2])?;
            let lo = hex_value(chars[i * 2 + 1])?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn hex_value(ch: char) -> Result<u8, SeedParseError> {
    let digit = ch.to_digit(16).ok_or(SeedParseError::InvalidHexDigit(ch))?;
    Ok(digit as u8)
}
