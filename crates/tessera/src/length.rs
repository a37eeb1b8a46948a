// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::num::NonZeroUsize;

use crate::error::GenerateError;

/// A validated, strictly positive output length.
///
/// Generation methods take a plain `usize` and reject `0`. `Length` is for
/// callers holding untyped input (signed integers, floats parsed from a
/// request) that must be validated before it reaches the generator.
///
/// # Example
///
/// ```rust
/// use tessera::{GenerateError, Length};
///
/// assert_eq!(Length::try_from(21i64).map(Length::get), Ok(21));
/// assert_eq!(Length::try_from(-5i64), Err(GenerateError::InvalidLength));
/// assert_eq!(Length::try_from(2.5f64), Err(GenerateError::InvalidLength));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length(NonZeroUsize);

impl Length {
    /// Validates `length`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidLength`] when `length` is zero.
    pub fn new(length: usize) -> Result<Self, GenerateError> {
        NonZeroUsize::new(length)
            .map(Self)
            .ok_or(GenerateError::InvalidLength)
    }

    /// Returns the length as a `usize`.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Length> for usize {
    fn from(length: Length) -> Self {
        length.get()
    }
}

impl TryFrom<usize> for Length {
    type Error = GenerateError;

    fn try_from(length: usize) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

impl TryFrom<i64> for Length {
    type Error = GenerateError;

    fn try_from(length: i64) -> Result<Self, Self::Error> {
        let length = usize::try_from(length).map_err(|_| GenerateError::InvalidLength)?;
        Self::new(length)
    }
}

impl TryFrom<i32> for Length {
    type Error = GenerateError;

    fn try_from(length: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(length))
    }
}

impl TryFrom<f64> for Length {
    type Error = GenerateError;

    fn try_from(length: f64) -> Result<Self, Self::Error> {
        if !length.is_finite() || length.fract() != 0.0 || length < 1.0 {
            return Err(GenerateError::InvalidLength);
        }
        if length > usize::MAX as f64 {
            return Err(GenerateError::InvalidLength);
        }

        Self::new(length as usize)
    }
}
