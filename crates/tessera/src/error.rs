// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use tessera_rand::EntropyError;

/// Errors returned by identifier generation.
///
/// Low-entropy configurations are not errors; they are reported through an
/// [`AdvisorySink`](crate::AdvisorySink) and still produce a value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Length is zero, negative, fractional or not finite.
    #[error("InvalidLength")]
    InvalidLength,

    /// Alphabet has fewer than 2 or more than 256 distinct symbols.
    #[error("InvalidAlphabet: {0}")]
    InvalidAlphabet(&'static str),

    /// Complex string requested with every character class disabled.
    #[error("NoCharacterClassSelected")]
    NoCharacterClassSelected,

    /// The entropy source could not provide random bytes. Not retryable.
    #[error("SecureRandomUnavailable: {0}")]
    SecureRandomUnavailable(#[from] EntropyError),
}
