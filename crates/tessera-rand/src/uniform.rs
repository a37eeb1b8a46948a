// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased index draws and Fisher-Yates shuffling over an [`EntropySource`].
//!
//! # Algorithm
//!
//! Indices are drawn from 32-bit words. A word `r` is accepted only when
//! `r >= (2^32 - n) % n`, which leaves exactly `floor(2^32 / n) * n`
//! accepted values, so `r % n` carries no modulo bias. The expected number
//! of draws per index is below 2 for every `n`.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Draws one 32-bit word from the entropy source.
#[inline(always)]
fn next_u32<E: EntropySource + ?Sized>(entropy: &E) -> Result<u32, EntropyError> {
    let mut word = [0u8; 4];
    entropy.fill_bytes(&mut word)?;
    Ok(u32::from_le_bytes(word))
}

/// Returns a uniformly distributed index in `[0, n)`.
///
/// Uses rejection sampling to avoid modulo bias. `n` of 0 or 1 returns `0`
/// without consuming entropy. `n` above `u32::MAX` is clamped to `u32::MAX`.
///
/// # Errors
///
/// Propagates [`EntropyError::EntropyNotAvailable`] from the source.
///
/// # Example
///
/// ```rust
/// use tessera_rand::{SystemEntropySource, uniform_index};
///
/// let index = uniform_index(&SystemEntropySource {}, 10).expect("Failed to draw index");
/// assert!(index < 10);
/// ```
pub fn uniform_index<E: EntropySource + ?Sized>(
    entropy: &E,
    n: usize,
) -> Result<usize, EntropyError> {
    if n <= 1 {
        return Ok(0);
    }

    let n = u32::try_from(n).unwrap_or(u32::MAX);
    let threshold = n.wrapping_neg() % n;

    loop {
        let r = next_u32(entropy)?;
        if r >= threshold {
            return Ok((r % n) as usize);
        }
    }
}

/// Permutes a slice in-place using the Fisher-Yates shuffle.
///
/// Every permutation is equiprobable as long as the entropy source is
/// uniform.
///
/// # Errors
///
/// Propagates [`EntropyError::EntropyNotAvailable`] from the source. The
/// slice may be partially shuffled when an error is returned.
///
/// # Example
///
/// ```rust
/// use tessera_rand::{SystemEntropySource, shuffle};
///
/// let mut data = [0u8, 1, 2, 3, 4, 5, 6, 7];
/// shuffle(&SystemEntropySource {}, &mut data).expect("Failed to shuffle");
///
/// let mut sorted = data;
/// sorted.sort();
/// assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn shuffle<E: EntropySource + ?Sized, T>(
    entropy: &E,
    data: &mut [T],
) -> Result<(), EntropyError> {
    if data.len() <= 1 {
        return Ok(());
    }

    for i in (1..data.len()).rev() {
        let j = uniform_index(entropy, i + 1)?;
        data.swap(i, j);
    }

    Ok(())
}
