//! Rank inference from `.idxN` path suffixes

use crate::error::IdxError;
use std::path::Path;

const MINIMAL_SUFFIX: &str = ".idx";

/// Number of shape dimensions declared by an IDX file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    /// `I` items of a single element
    One = 1,
    /// `I` items of `1 x C` elements
    Two = 2,
    /// `I` items of `R x C` elements
    Three = 3,
}

impl Rank {
    pub fn from_u32(rank: u32) -> Result<Self, IdxError> {
        match rank {
            1 => Ok(Rank::One),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            _ => Err(IdxError::UnsupportedRank { rank }),
        }
    }

    pub fn get(self) -> u32 {
        self as u32
    }
}

/// Parse the rank from the digits right after `.idx` in `path`
///
/// The first `.idx` anywhere in the path is used, so a directory named
/// `foo.idx/` shadows the real file suffix. Existing datasets rely on this
/// lookup order, keep it.
pub fn parse_suffix(path: &Path) -> Result<Rank, IdxError> {
    let invalid = || IdxError::InvalidSuffix {
        path: path.to_path_buf(),
    };

    let text = path.to_string_lossy();
    let start = text.find(MINIMAL_SUFFIX).ok_or_else(invalid)? + MINIMAL_SUFFIX.len();

    let digits: &str = {
        let rest = &text[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return Err(invalid());
    }

    let rank: u32 = digits.parse().map_err(|_| invalid())?;
    Rank::from_u32(rank)
}
