// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Non-fatal warnings about weak configurations.
//!
//! Advisories never stop generation. They are handed to an [`AdvisorySink`]
//! so the caller decides whether to log, count, or escalate them.

use std::fmt;

/// A weak-but-valid generation request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Advisory {
    /// Estimated entropy of the output is below the configured threshold.
    LowEntropy {
        /// Requested length.
        length: usize,
        /// Distinct symbols in the alphabet.
        alphabet_size: usize,
        /// `length * log2(alphabet_size)`
        bits: f64,
        /// Configured minimum.
        threshold: f64,
    },
    /// Token shorter than the recommended minimum.
    ShortToken {
        /// Requested length.
        length: usize,
        /// Recommended minimum length.
        recommended: usize,
    },
    /// Salt shorter than the recommended minimum.
    ShortSalt {
        /// Requested length.
        length: usize,
        /// Recommended minimum length.
        recommended: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LowEntropy {
                length,
                alphabet_size,
                bits,
                threshold,
            } => write!(
                f,
                "{length} symbols over {alphabet_size} yields {bits:.1} bits of entropy \
                 (< {threshold:.1})"
            ),
            Advisory::ShortToken {
                length,
                recommended,
            } => write!(f, "token length {length} is below the recommended {recommended}"),
            Advisory::ShortSalt {
                length,
                recommended,
            } => write!(f, "salt length {length} is below the recommended {recommended}"),
        }
    }
}

/// Receiver for [`Advisory`] events.
pub trait AdvisorySink {
    /// Handles one advisory. Must not fail or block for long.
    fn advise(&self, advisory: Advisory);
}

impl<S: AdvisorySink + ?Sized> AdvisorySink for &S {
    fn advise(&self, advisory: Advisory) {
        (**self).advise(advisory)
    }
}

/// Emits advisories as `tracing` warnings under the `tessera` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAdvisorySink;

impl AdvisorySink for TracingAdvisorySink {
    fn advise(&self, advisory: Advisory) {
        match &advisory {
            Advisory::LowEntropy {
                length,
                alphabet_size,
                bits,
                threshold,
            } => tracing::warn!(
                target: "tessera",
                length,
                alphabet_size,
                bits,
                threshold,
                "{advisory}"
            ),
            Advisory::ShortToken {
                length,
                recommended,
            }
            | Advisory::ShortSalt {
                length,
                recommended,
            } => tracing::warn!(target: "tessera", length, recommended, "{advisory}"),
        }
    }
}

/// Drops every advisory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAdvisorySink;

impl AdvisorySink for SilentAdvisorySink {
    fn advise(&self, _advisory: Advisory) {}
}
