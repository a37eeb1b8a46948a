// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy and collision math for random identifiers.
//!
//! All functions are pure. Probabilities are expressed as percentages in
//! `[0, 100]`.
//!
//! # Collision model
//!
//! With `P = alphabet_size^length` equally likely identifiers and `n`
//! independent draws, the probability that at least one pair collides is
//!
//! ```text
//! exact:   1 - ((P - 1) / P)^(n (n - 1) / 2)
//! approx:  1 - e^(-n² / 2P)
//! ```
//!
//! The exact form is used up to 60 bits of entropy, where `P` is still
//! representable in an `f64` mantissa. Above that the approximation is used.

/// Entropy at or below which the exact birthday formula is evaluated.
const EXACT_FORMULA_MAX_BITS: f64 = 60.0;

/// Smallest collision ceiling honoured by [`recommended_length`], in percent.
const MIN_CEILING_PERCENT: f64 = 1e-12;

/// Bits of entropy of one identifier: `length * log2(alphabet_size)`.
///
/// Returns `0.0` for an empty length or an alphabet with fewer than two
/// symbols.
///
/// # Example
///
/// ```rust
/// use tessera::analyzer::entropy_bits;
///
/// assert_eq!(entropy_bits(21, 64), 126.0);
/// ```
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if length == 0 || alphabet_size < 2 {
        return 0.0;
    }

    length as f64 * (alphabet_size as f64).log2()
}

/// Probability, in percent, that `id_count` identifiers contain a duplicate.
///
/// Returns `0.0` when `id_count <= 1` and `100.0` once `id_count` exceeds
/// the number of distinct identifiers.
///
/// # Example
///
/// ```rust
/// use tessera::analyzer::collision_probability;
///
/// assert_eq!(collision_probability(21, 64, 1), 0.0);
/// assert!(collision_probability(21, 64, 1_000_000_000) < 1e-15);
/// assert!(collision_probability(2, 4, 16) > 99.9);
/// ```
pub fn collision_probability(length: usize, alphabet_size: usize, id_count: u64) -> f64 {
    if id_count <= 1 {
        return 0.0;
    }

    let bits = entropy_bits(length, alphabet_size);
    if bits == 0.0 {
        return 100.0;
    }

    let n = id_count as f64;

    let probability = if bits <= EXACT_FORMULA_MAX_BITS {
        // length <= 60 here since alphabet_size >= 2
        let space = (alphabet_size as f64).powi(length as i32);
        if n > space {
            return 100.0;
        }

        let pairs = n * (n - 1.0) / 2.0;
        -(pairs * (-1.0 / space).ln_1p()).exp_m1()
    } else {
        let space = bits.exp2();
        -(-(n * n) / (2.0 * space)).exp_m1()
    };

    (probability * 100.0).clamp(0.0, 100.0)
}

/// Shortest length keeping the collision probability of `id_count`
/// identifiers at or below `max_collision_probability` percent.
///
/// The ceiling is clamped into `[1e-12, 100)`. Degenerate alphabets
/// (fewer than two symbols) and `id_count <= 1` return `1`.
///
/// The result always satisfies
/// `collision_probability(result, alphabet_size, id_count) <= ceiling`.
///
/// # Example
///
/// ```rust
/// use tessera::analyzer::{collision_probability, recommended_length};
///
/// let length = recommended_length(64, 1_000_000, 0.0001);
/// assert!(collision_probability(length, 64, 1_000_000) <= 0.0001);
/// assert!(collision_probability(length - 1, 64, 1_000_000) > 0.0001);
/// ```
pub fn recommended_length(
    alphabet_size: usize,
    id_count: u64,
    max_collision_probability: f64,
) -> usize {
    if alphabet_size < 2 || id_count <= 1 {
        return 1;
    }

    let ceiling = if max_collision_probability.is_nan() {
        MIN_CEILING_PERCENT
    } else {
        max_collision_probability.clamp(MIN_CEILING_PERCENT, 100.0 - 1e-9)
    };

    let n = id_count as f64;
    let bits_per_symbol = (alphabet_size as f64).log2();

    // n² / 2P <= -ln(1 - p)  <=>  log2(P) >= log2(n² / (2 * -ln(1 - p)))
    let tolerance = -(-ceiling / 100.0).ln_1p();
    let required_bits = (n * n / (2.0 * tolerance)).log2();
    let pigeonhole_bits = n.log2();

    let estimate = (required_bits.max(pigeonhole_bits) / bits_per_symbol).ceil();
    let mut length = if estimate.is_finite() && estimate >= 1.0 {
        estimate as usize
    } else {
        1
    };

    while collision_probability(length, alphabet_size, id_count) > ceiling {
        length += 1;
    }

    // The estimate counts n²/2 pairs; for small id counts the exact n(n-1)/2 may allow less.
    while length > 1 && collision_probability(length - 1, alphabet_size, id_count) <= ceiling {
        length -= 1;
    }

    length
}

/// How many identifiers can be issued before the collision probability
/// reaches `probability` percent.
///
/// Inverse of the birthday approximation: `sqrt(2P * -ln(1 - p))`. The
/// result is fractional and can be `inf` for very large identifier spaces.
pub fn ids_until_probability(length: usize, alphabet_size: usize, probability: f64) -> f64 {
    let bits = entropy_bits(length, alphabet_size);
    if bits == 0.0 {
        return 1.0;
    }
    if probability.is_nan() || probability <= 0.0 {
        return 0.0;
    }
    if probability >= 100.0 {
        return f64::INFINITY;
    }

    let tolerance = -(-probability / 100.0).ln_1p();
    (2.0 * bits.exp2() * tolerance).sqrt()
}

/// Summary of an identifier format at a given issuance volume.
///
/// # Example
///
/// ```rust
/// use tessera::analyzer::IdProfile;
///
/// let profile = IdProfile::analyze(21, 64, 1_000_000);
/// assert_eq!(profile.entropy_bits, 126.0);
/// assert!(profile.collision_probability < 1e-20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdProfile {
    /// Identifier length.
    pub length: usize,
    /// Distinct symbols in the alphabet.
    pub alphabet_size: usize,
    /// Planned number of identifiers.
    pub id_count: u64,
    /// See [`entropy_bits`].
    pub entropy_bits: f64,
    /// See [`collision_probability`].
    pub collision_probability: f64,
    /// Identifiers issuable before a 1% collision chance, see [`ids_until_probability`].
    pub ids_until_one_percent: f64,
}

impl IdProfile {
    /// Computes every figure for one format.
    pub fn analyze(length: usize, alphabet_size: usize, id_count: u64) -> Self {
        Self {
            length,
            alphabet_size,
            id_count,
            entropy_bits: entropy_bits(length, alphabet_size),
            collision_probability: collision_probability(length, alphabet_size, id_count),
            ids_until_one_percent: ids_until_probability(length, alphabet_size, 1.0),
        }
    }
}
