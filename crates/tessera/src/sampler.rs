// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-to-symbol sampling.
//!
//! A [`Sampler`] maps one random byte to either an index in
//! `[0, alphabet_len)` or a rejection. The strategy is fixed when the sampler
//! is built and depends on the alphabet size and the [`BiasPolicy`]:
//!
//! | Size             | `StrictUnbiased`              | `FastModulo`                     |
//! |------------------|-------------------------------|----------------------------------|
//! | power of two     | mask, never rejects           | mask, never rejects              |
//! | ≤ 16             | mask + reject `>= len`        | reject `>= floor(256/len)*len`, then `% len` |
//! | > 16             | mask + reject `>= len`        | `% len`, never rejects, **biased** |
//!
//! The biased path exists for callers that want a fixed one-byte-per-symbol
//! cost on large alphabets. Symbols below `256 % len` come up with
//! probability `(q + 1) / 256` instead of `q / 256` where `q = 256 / len`.

use crate::alphabet::Alphabet;

/// Multiplier applied to the expected byte count when rejection is possible,
/// so that a single refill usually covers the whole request.
const REJECTION_HEADROOM: f64 = 1.6;

/// How much distribution bias a caller tolerates in exchange for throughput.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiasPolicy {
    /// Every symbol is exactly equiprobable.
    #[default]
    StrictUnbiased,
    /// Unbiased rejection for alphabets up to 16 symbols, plain modulo
    /// (slightly biased) above that.
    FastModulo,
}

/// Concrete sampling rule chosen for one alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStrategy {
    /// `byte & mask`; the size is a power of two.
    Masked {
        /// `size - 1`
        mask: u8,
    },
    /// `byte & mask`, rejected when `>= size`.
    Rejection {
        /// Smallest `2^k - 1` with `mask >= size - 1`.
        mask: u8,
    },
    /// Rejected when `byte >= limit`, otherwise `byte % size`.
    Threshold {
        /// `floor(256 / size) * size`
        limit: u16,
    },
    /// `byte % size` with no rejection.
    Modulo,
}

/// Largest alphabet the threshold rule is applied to under [`BiasPolicy::FastModulo`].
const SMALL_ALPHABET: usize = 16;

/// Converts random bytes into alphabet indices.
///
/// # Example
///
/// ```rust
/// use tessera::{BiasPolicy, Sampler};
///
/// let sampler = Sampler::new(10, BiasPolicy::StrictUnbiased);
///
/// assert_eq!(sampler.sample(0b0000_0111), Some(7));
/// // 0b1100 & 0b1111 = 12, out of range
/// assert_eq!(sampler.sample(0b0000_1100), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    size: usize,
    strategy: SamplingStrategy,
}

impl Sampler {
    /// Builds a sampler for `size` symbols.
    ///
    /// `size` is clamped into `[2, 256]`; sizes from a validated
    /// [`Alphabet`] are always in range.
    pub fn new(size: usize, policy: BiasPolicy) -> Self {
        let size = size.clamp(2, 256);

        let strategy = if size.is_power_of_two() {
            SamplingStrategy::Masked {
                mask: (size - 1) as u8,
            }
        } else {
            match policy {
                BiasPolicy::StrictUnbiased => SamplingStrategy::Rejection {
                    mask: (size.next_power_of_two() - 1) as u8,
                },
                BiasPolicy::FastModulo if size <= SMALL_ALPHABET => SamplingStrategy::Threshold {
                    limit: ((256 / size) * size) as u16,
                },
                BiasPolicy::FastModulo => SamplingStrategy::Modulo,
            }
        };

        Self { size, strategy }
    }

    /// Builds a sampler for `alphabet`.
    pub fn for_alphabet(alphabet: &Alphabet, policy: BiasPolicy) -> Self {
        Self::new(alphabet.len(), policy)
    }

    /// Number of symbols this sampler indexes into.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Strategy picked at construction.
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Maps one random byte to an index, or `None` when the byte is rejected.
    #[inline(always)]
    pub fn sample(&self, byte: u8) -> Option<usize> {
        match self.strategy {
            SamplingStrategy::Masked { mask } => Some((byte & mask) as usize),
            SamplingStrategy::Rejection { mask } => {
                let candidate = (byte & mask) as usize;
                (candidate < self.size).then_some(candidate)
            }
            SamplingStrategy::Threshold { limit } => {
                (u16::from(byte) < limit).then_some(byte as usize % self.size)
            }
            SamplingStrategy::Modulo => Some(byte as usize % self.size),
        }
    }

    /// Fraction of byte values that yield an index.
    pub fn acceptance_rate(&self) -> f64 {
        match self.strategy {
            SamplingStrategy::Masked { .. } | SamplingStrategy::Modulo => 1.0,
            SamplingStrategy::Rejection { mask } => self.size as f64 / (f64::from(mask) + 1.0),
            SamplingStrategy::Threshold { limit } => f64::from(limit) / 256.0,
        }
    }

    /// Whether a byte can ever be rejected.
    pub fn rejects(&self) -> bool {
        matches!(
            self.strategy,
            SamplingStrategy::Rejection { .. } | SamplingStrategy::Threshold { .. }
        )
    }

    /// Whether the output distribution is not exactly uniform.
    pub fn is_biased(&self) -> bool {
        matches!(self.strategy, SamplingStrategy::Modulo)
    }

    /// Bytes to request from the entropy source for `remaining` symbols.
    ///
    /// Exactly `remaining` when nothing is rejected; otherwise the expected
    /// byte count scaled by a 1.6 headroom factor. Never above `cap`, never
    /// below 1.
    pub fn step_for(&self, remaining: usize, cap: usize) -> usize {
        let step = if self.rejects() {
            (REJECTION_HEADROOM * remaining as f64 / self.acceptance_rate()).ceil() as usize
        } else {
            remaining
        };

        step.min(cap).max(1)
    }
}
