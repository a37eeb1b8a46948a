// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::sampler::BiasPolicy;

/// Entropy below which a [`LowEntropy`](crate::Advisory::LowEntropy) advisory is emitted.
pub const DEFAULT_MIN_ENTROPY_BITS: f64 = 64.0;

/// Lengths below this are assembled by pushing onto a `String` directly.
pub const DEFAULT_INCREMENTAL_THRESHOLD: usize = 16;

/// Upper bound on bytes requested from the entropy source per refill.
pub const DEFAULT_MAX_BATCH_BYTES: usize = 4096;

/// Tuning knobs for a [`Generator`](crate::Generator).
///
/// # Example
///
/// ```rust
/// use tessera::{BiasPolicy, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_bias_policy(BiasPolicy::FastModulo)
///     .with_min_entropy_bits(96.0);
///
/// assert_eq!(config.bias_policy(), BiasPolicy::FastModulo);
/// assert_eq!(config.max_batch_bytes(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    bias_policy: BiasPolicy,
    min_entropy_bits: f64,
    incremental_threshold: usize,
    max_batch_bytes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bias_policy: BiasPolicy::default(),
            min_entropy_bits: DEFAULT_MIN_ENTROPY_BITS,
            incremental_threshold: DEFAULT_INCREMENTAL_THRESHOLD,
            max_batch_bytes: DEFAULT_MAX_BATCH_BYTES,
        }
    }
}

impl GeneratorConfig {
    /// Sets the sampling bias policy.
    pub fn with_bias_policy(mut self, bias_policy: BiasPolicy) -> Self {
        self.bias_policy = bias_policy;
        self
    }

    /// Sets the advisory threshold. `0.0` silences low-entropy advisories.
    pub fn with_min_entropy_bits(mut self, min_entropy_bits: f64) -> Self {
        self.min_entropy_bits = min_entropy_bits.max(0.0);
        self
    }

    /// Sets the length at which assembly switches to an indexed buffer.
    pub fn with_incremental_threshold(mut self, incremental_threshold: usize) -> Self {
        self.incremental_threshold = incremental_threshold;
        self
    }

    /// Sets the per-refill byte cap (at least 1).
    pub fn with_max_batch_bytes(mut self, max_batch_bytes: usize) -> Self {
        self.max_batch_bytes = max_batch_bytes.max(1);
        self
    }

    /// Sampling bias policy.
    pub fn bias_policy(&self) -> BiasPolicy {
        self.bias_policy
    }

    /// Advisory threshold in bits.
    pub fn min_entropy_bits(&self) -> f64 {
        self.min_entropy_bits
    }

    /// Incremental/indexed assembly cut-over.
    pub fn incremental_threshold(&self) -> usize {
        self.incremental_threshold
    }

    /// Per-refill byte cap.
    pub fn max_batch_bytes(&self) -> usize {
        self.max_batch_bytes
    }
}
