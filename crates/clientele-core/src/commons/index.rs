use std::fmt;

use crate::errors::{ClienteleError, Result};

/// Position in a displayed list
///
/// Users count from 1; code indexes slices from 0. An `Index` is never 0 on
/// the one-based side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// # Errors
    /// `InvalidIndexFormat` if `one_based` is 0.
    pub fn from_one_based(one_based: usize) -> Result<Self> {
        one_based
            .checked_sub(1)
            .map(Self::from_zero_based)
            .ok_or(ClienteleError::InvalidIndexFormat)
    }

    /// Parse user input such as `"3"`
    ///
    /// # Errors
    /// `InvalidIndexFormat` unless `raw` is a positive integer.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ClienteleError::InvalidIndexFormat);
        }
        let one_based = trimmed
            .parse::<usize>()
            .map_err(|_| ClienteleError::InvalidIndexFormat)?;
        Self::from_one_based(one_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
