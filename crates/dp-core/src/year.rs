//! Simulated year axis.
//!
//! Periods are annual and 1-based: the first simulated year is `Year(1)` and
//! the last is `Year(horizon)`.  Path index `i` corresponds to `Year(i + 1)`.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Year(pub u32);

impl Year {
    pub const FIRST: Year = Year(1);

    /// Year for path index `index` (0-based).
    #[inline]
    pub fn from_index(index: usize) -> Year {
        Year(index as u32 + 1)
    }

    /// Path index of this year.
    ///
    /// # Panics
    /// Panics in debug mode for `Year(0)`.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All years of a horizon, `Year(1)..=Year(horizon)`.
    pub fn range(horizon: u32) -> impl Iterator<Item = Year> {
        (1..=horizon).map(Year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}", self.0)
    }
}
